//! Interactive game against the engine on a terminal.
//!
//! The human plays White and types moves in long algebraic notation. The
//! engine answers with a node-limited search.

use std::io::{self, BufRead, Write};

use crate::board::{Game, Move, Position, Searcher, MATE_LOWER};

/// Nodes the engine spends on each reply
pub const DEFAULT_NODE_BUDGET: u64 = 10_000;

/// How a game ended from the human's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HumanWon,
    HumanLost,
}

/// Decide whether the engine's reply ends the game. `pos` is the position
/// the engine moves from and `reply` its chosen move, if any.
#[must_use]
pub fn judge_reply(pos: &Position, reply: Option<Move>) -> Option<Outcome> {
    let Some(mv) = reply else {
        return Some(Outcome::HumanWon);
    };
    // The engine's king was already taken
    if pos.score() <= -MATE_LOWER {
        return Some(Outcome::HumanWon);
    }
    let value = pos.value(mv);
    if value <= -MATE_LOWER {
        Some(Outcome::HumanWon)
    } else if value >= MATE_LOWER {
        Some(Outcome::HumanLost)
    } else {
        None
    }
}

/// Play one game over the given streams. Ends on a decisive result or when
/// the input runs out.
pub fn run<R: BufRead, W: Write>(mut input: R, out: &mut W, node_budget: u64) -> io::Result<()> {
    let mut game = Game::startpos();
    let mut searcher = Searcher::new();

    loop {
        writeln!(out, "{}", game.render())?;

        let mv = loop {
            write!(out, "Enter move: ")?;
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(());
            }
            match game.parse_move(line.trim()) {
                Ok(mv) => break mv,
                Err(e) => writeln!(out, "{e}")?,
            }
        };
        game.play(mv);
        writeln!(out, "{}", game.render())?;

        let result = searcher.search(&game.position, node_budget);
        match judge_reply(&game.position, result.best_move) {
            Some(Outcome::HumanWon) => {
                writeln!(out, "You won")?;
                return Ok(());
            }
            Some(Outcome::HumanLost) => {
                writeln!(out, "You lost")?;
                return Ok(());
            }
            None => {}
        }
        if let Some(reply) = result.best_move {
            writeln!(out, "My move: {}", game.format_move(reply))?;
            game.play(reply);
        }
    }
}

/// Run the interactive game on standard input and output.
pub fn run_cli() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(stdin.lock(), &mut stdout, DEFAULT_NODE_BUDGET)
}
