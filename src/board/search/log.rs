use std::time::Duration;

use crate::board::Move;

/// Progress report emitted after every completed iteration
#[derive(Clone, Debug)]
pub struct SearchInfo {
    pub depth: i32,
    pub score: i32,
    pub nodes: u64,
    pub elapsed: Duration,
    pub table_size: usize,
    /// Best move so far, in the frame of the side to move
    pub best_move: Option<Move>,
}

pub trait SearchLogger {
    fn info(&self, info: &SearchInfo);
}

/// Discards all reports
pub struct SilentLogger;

impl SearchLogger for SilentLogger {
    fn info(&self, _info: &SearchInfo) {}
}

/// Prints UCI `info` lines. Moves are searched in the mover's frame, so the
/// logger needs to know the colour to print absolute squares.
pub struct StdoutLogger {
    pub white_to_move: bool,
}

impl StdoutLogger {
    #[must_use]
    pub fn new(white_to_move: bool) -> Self {
        StdoutLogger { white_to_move }
    }

    #[must_use]
    pub fn format(&self, info: &SearchInfo) -> String {
        let millis = info.elapsed.as_millis();
        let nps = if millis > 0 {
            u128::from(info.nodes) * 1000 / millis
        } else {
            0
        };
        let mut line = format!(
            "info depth {} score cp {} nodes {} nps {} time {} tablesize {}",
            info.depth, info.score, info.nodes, nps, millis, info.table_size
        );
        if let Some(mv) = info.best_move {
            let mv = if self.white_to_move { mv } else { mv.flip() };
            line.push_str(&format!(" pv {mv}"));
        }
        line
    }
}

impl SearchLogger for StdoutLogger {
    fn info(&self, info: &SearchInfo) {
        println!("{}", self.format(info));
    }
}
