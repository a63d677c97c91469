use std::io::{self, Write};

pub fn print_ready(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "readyok")
}

/// `bestmove 0000` is the conventional null move when nothing was found.
pub fn print_bestmove(out: &mut impl Write, mv: Option<&str>) -> io::Result<()> {
    writeln!(out, "bestmove {}", mv.unwrap_or("0000"))
}
