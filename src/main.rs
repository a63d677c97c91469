use std::env;
use std::io;

use mailbox_engine::{cli, uci};

fn main() -> io::Result<()> {
    match env::args().nth(1).as_deref() {
        Some("cli") => cli::run_cli(),
        _ => uci::run_uci_loop(),
    }
}
