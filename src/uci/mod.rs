//! Universal Chess Interface (UCI) protocol implementation.
//!
//! Handles communication with chess GUIs following the UCI specification.
//! Only node-limited searches are supported; time controls in `go` are
//! ignored.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{FenError, Game, MoveParseError, Searcher, StdoutLogger};

pub mod command;
pub mod options;
pub mod print;

use command::{parse_go_nodes, parse_uci_command, UciCommand};
use options::{parse_setoption, UciOptions};
use print::{print_bestmove, print_ready};

/// Error type for UCI position command parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciError {
    /// Invalid FEN string
    InvalidFen(FenError),
    /// Invalid move in the move list
    InvalidMove { move_str: String, error: MoveParseError },
    /// Missing required parts in the command
    MissingParts,
}

impl fmt::Display for UciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            UciError::InvalidMove { move_str, error } => {
                write!(f, "Invalid move '{move_str}': {error}")
            }
            UciError::MissingParts => write!(f, "Missing required parts in position command"),
        }
    }
}

impl std::error::Error for UciError {}

impl From<FenError> for UciError {
    fn from(e: FenError) -> Self {
        UciError::InvalidFen(e)
    }
}

/// Parse a UCI position command into a fresh game.
///
/// Supports both "position startpos" and "position fen <fen>" formats,
/// optionally followed by "moves <move1> <move2> ...". The FEN may stop
/// after any of its fields.
pub fn try_parse_position_command(parts: &[&str]) -> Result<Game, UciError> {
    let moves_at = parts.iter().position(|p| *p == "moves").unwrap_or(parts.len());

    let mut game = match parts.get(1) {
        Some(&"startpos") => Game::startpos(),
        Some(&"fen") => {
            let fen = parts.get(2..moves_at).ok_or(UciError::MissingParts)?;
            if fen.is_empty() {
                return Err(UciError::MissingParts);
            }
            Game::from_fen(&fen.join(" "))?
        }
        _ => return Err(UciError::MissingParts),
    };

    for move_str in parts.iter().skip(moves_at + 1) {
        let mv = game.parse_move(move_str).map_err(|e| UciError::InvalidMove {
            move_str: (*move_str).to_string(),
            error: e,
        })?;
        game.play(mv);
    }

    Ok(game)
}

/// State of one protocol session: the game being played and the searcher
/// that keeps its table between moves.
pub struct UciSession {
    game: Game,
    searcher: Searcher,
    options: UciOptions,
}

impl Default for UciSession {
    fn default() -> Self {
        Self::new()
    }
}

impl UciSession {
    #[must_use]
    pub fn new() -> Self {
        let options = UciOptions::default();
        let mut searcher = Searcher::new();
        searcher.set_table_capacity(options.table_capacity);
        UciSession {
            game: Game::startpos(),
            searcher,
            options,
        }
    }

    #[inline]
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> &UciOptions {
        &self.options
    }

    /// Execute one command. Returns `false` once the session should end.
    pub fn handle(&mut self, cmd: UciCommand, out: &mut impl Write) -> io::Result<bool> {
        match cmd {
            UciCommand::Uci => self.options.print(out)?,
            UciCommand::IsReady => print_ready(out)?,
            UciCommand::UciNewGame => {
                self.game = Game::startpos();
                self.searcher.clear();
            }
            UciCommand::Position(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                match try_parse_position_command(&parts) {
                    Ok(game) => self.game = game,
                    Err(e) => eprintln!("Error: {e}"),
                }
            }
            UciCommand::Go(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                let budget = parse_go_nodes(&parts).unwrap_or(self.options.node_budget);
                self.searcher
                    .set_logger(Box::new(StdoutLogger::new(self.game.white_to_move)));
                let result = self.searcher.search(&self.game.position, budget);
                let mv = result.best_move.map(|m| self.game.format_move(m));
                print_bestmove(out, mv.as_deref())?;
            }
            UciCommand::SetOption(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                match parse_setoption(&parts) {
                    Some((name, value)) => {
                        self.options
                            .apply_setoption(&name, value.as_deref(), &mut self.searcher);
                    }
                    None => eprintln!("Error: malformed setoption"),
                }
            }
            UciCommand::Display => write!(out, "{}", self.game)?,
            UciCommand::Quit => return Ok(false),
            UciCommand::Unknown(line) => eprintln!("Unknown command: {line}"),
        }
        out.flush()?;
        Ok(true)
    }
}

/// Run a session over arbitrary line input until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> io::Result<()> {
    let mut session = UciSession::new();
    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_uci_command(&line) else {
            continue;
        };
        if !session.handle(cmd, out)? {
            break;
        }
    }
    Ok(())
}

/// Run the protocol on standard input and output.
pub fn run_uci_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(stdin.lock(), &mut stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::STARTPOS_FEN;

    fn session_output(script: &str) -> String {
        let mut out = Vec::new();
        run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_position_startpos_with_moves() {
        let game = try_parse_position_command(&["position", "startpos", "moves", "e2e4", "e7e5"])
            .unwrap();
        assert!(game.white_to_move);
        let mut expected = Game::startpos();
        expected.play_uci_moves(["e2e4", "e7e5"]).unwrap();
        assert_eq!(game, expected);
    }

    #[test]
    fn test_position_fen() {
        let line = format!("position fen {STARTPOS_FEN} moves d2d4");
        let parts: Vec<&str> = line.split_whitespace().collect();
        let game = try_parse_position_command(&parts).unwrap();
        assert!(!game.white_to_move);
    }

    #[test]
    fn test_position_errors() {
        assert_eq!(
            try_parse_position_command(&["position"]),
            Err(UciError::MissingParts)
        );
        assert_eq!(
            try_parse_position_command(&["position", "fen"]),
            Err(UciError::MissingParts)
        );
        assert!(matches!(
            try_parse_position_command(&["position", "fen", "8/8"]),
            Err(UciError::InvalidFen(FenError::WrongRowCount { found: 2 }))
        ));
        assert!(matches!(
            try_parse_position_command(&["position", "startpos", "moves", "e2e5"]),
            Err(UciError::InvalidMove { .. })
        ));
    }

    #[test]
    fn test_bad_position_keeps_previous_game() {
        let mut session = UciSession::new();
        let mut out = Vec::new();
        session
            .handle(parse_uci_command("position startpos moves e2e4").unwrap(), &mut out)
            .unwrap();
        session
            .handle(parse_uci_command("position fen nonsense").unwrap(), &mut out)
            .unwrap();
        assert!(!session.game().white_to_move);
    }

    #[test]
    fn test_session_script() {
        let text = session_output("uci\nisready\nposition startpos\ngo nodes 200\nquit\ngo\n");
        assert!(text.contains("uciok\n"));
        assert!(text.contains("readyok\n"));
        assert_eq!(text.matches("bestmove ").count(), 1);
    }

    #[test]
    fn test_setoption_changes_budget() {
        let mut session = UciSession::new();
        let mut out = Vec::new();
        session
            .handle(
                parse_uci_command("setoption name Nodes value 321").unwrap(),
                &mut out,
            )
            .unwrap();
        assert_eq!(session.options().node_budget, 321);
    }
}
