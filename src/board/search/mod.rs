//! Search module implementing a null-window negamax with iterative deepening.
//!
//! Features:
//! - MTD-style driver: binary search over the score window with null-window probes
//! - Null-move pruning with a fixed depth reduction
//! - Horizon capture filter with stand-pat
//! - Transposition table keyed by the whole position
//! - Node budget checked between iterations

mod constants;
mod log;
mod params;

use std::time::Instant;

use crate::tt::{TTEntry, TranspositionTable};

use super::{Move, Position};
pub use constants::{MATE_LOWER, MATE_VALUE};
use constants::WORST_SCORE;
pub use log::{SearchInfo, SearchLogger, SilentLogger, StdoutLogger};
pub use params::SearchParams;

/// Outcome of `Searcher::search`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Move stored for the root position, in the frame of the side to move
    pub best_move: Option<Move>,
    /// Score of the last probed window, from the side to move
    pub score: i32,
    /// Deepest iteration that ran to the end of its window
    pub depth: i32,
    pub nodes: u64,
}

/// Owns the transposition table across searches. One searcher serves one
/// game; reuse it between moves so the table keeps paying off.
pub struct Searcher {
    tt: TranspositionTable,
    params: SearchParams,
    nodes: u64,
    logger: Box<dyn SearchLogger>,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::with_params(SearchParams::default())
    }

    #[must_use]
    pub fn with_params(params: SearchParams) -> Self {
        Searcher {
            tt: TranspositionTable::new(params.table_capacity),
            params,
            nodes: 0,
            logger: Box::new(SilentLogger),
        }
    }

    pub fn set_logger(&mut self, logger: Box<dyn SearchLogger>) {
        self.logger = logger;
    }

    #[inline]
    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    #[inline]
    #[must_use]
    pub fn table(&self) -> &TranspositionTable {
        &self.tt
    }

    /// Nodes visited by the current or last search
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn set_table_capacity(&mut self, capacity: usize) {
        self.params.table_capacity = capacity;
        self.tt.set_capacity(capacity);
    }

    /// Forget everything learned so far (new game).
    pub fn clear(&mut self) {
        self.tt.clear();
        self.nodes = 0;
    }

    /// Null-window search of `pos` at threshold `gamma`.
    ///
    /// The result is at least `gamma` if the true score is, and below `gamma`
    /// otherwise. It is only exact when the search happened to be exhaustive.
    pub fn bound(&mut self, pos: &Position, gamma: i32, depth: i32) -> i32 {
        self.nodes += 1;

        let cached = self.tt.get(pos);
        if let Some(entry) = cached {
            if entry.answers(gamma, depth) {
                return entry.score;
            }
        }

        // A king is gone
        if pos.score().abs() >= MATE_LOWER {
            return pos.score();
        }

        let null_score = if depth > 0 {
            -self.bound(
                &pos.null_move(),
                1 - gamma,
                depth - self.params.null_move_reduction,
            )
        } else {
            pos.score()
        };
        if null_score >= gamma {
            return null_score;
        }

        let mut best = WORST_SCORE;
        let mut best_move = None;
        for (value, mv) in self.ordered_moves(pos, cached.and_then(|e| e.best_move), depth) {
            if depth <= 0 && value < self.params.quiescence_threshold {
                break;
            }
            let score = -self.bound(&pos.make_move(mv), 1 - gamma, depth - 1);
            if score > best {
                best = score;
                best_move = Some(mv);
            }
            if score >= gamma {
                break;
            }
        }

        if depth <= 0 && best < null_score {
            return null_score;
        }

        // Every move loses the king but passing does not: stalemate, not mate
        if depth > 0 && best <= -MATE_LOWER && null_score > -MATE_LOWER {
            best = 0;
        }

        let replace = match cached {
            None => true,
            Some(entry) => depth >= entry.depth && best >= gamma,
        };
        if replace {
            self.tt.store(
                *pos,
                TTEntry {
                    depth,
                    score: best,
                    gamma,
                    best_move,
                },
            );
        }

        best
    }

    /// Moves paired with their value delta, best first. The cached move goes
    /// in front unless the horizon filter would reject it anyway.
    fn ordered_moves(
        &self,
        pos: &Position,
        cached: Option<Move>,
        depth: i32,
    ) -> Vec<(i32, Move)> {
        let mut moves: Vec<(i32, Move)> = pos
            .generate_moves()
            .into_iter()
            .map(|m| (pos.value(m), m))
            .collect();
        moves.sort_by(|a, b| b.0.cmp(&a.0));

        if let Some(first) = cached {
            if let Some(idx) = moves.iter().position(|&(_, m)| m == first) {
                if depth > 0 || moves[idx].0 >= self.params.quiescence_threshold {
                    let entry = moves.remove(idx);
                    moves.insert(0, entry);
                }
            }
        }
        moves
    }

    /// Iterative deepening driver.
    ///
    /// Each iteration narrows `[-3 * MATE_VALUE, 3 * MATE_VALUE]` by probing
    /// `bound` at the midpoint until the window is narrower than the
    /// roughness setting. Deepening stops once a king capture is forced or the
    /// node budget is spent. The budget is only checked between iterations,
    /// so a deep iteration can overrun it.
    pub fn search(&mut self, pos: &Position, node_budget: u64) -> SearchResult {
        self.nodes = 0;
        let start = Instant::now();
        let mut score = 0;
        let mut completed = 0;

        for depth in 1..self.params.max_depth {
            let mut lower = -3 * MATE_VALUE;
            let mut upper = 3 * MATE_VALUE;
            while lower < upper - self.params.eval_roughness {
                let gamma = (lower + upper + 1) / 2;
                score = self.bound(pos, gamma, depth);
                if score >= gamma {
                    lower = score;
                } else {
                    upper = score;
                }
            }
            completed = depth;

            let best_move = self.tt.get(pos).and_then(|e| e.best_move);
            self.logger.info(&SearchInfo {
                depth,
                score,
                nodes: self.nodes,
                elapsed: start.elapsed(),
                table_size: self.tt.len(),
                best_move,
            });
            #[cfg(feature = "logging")]
            ::log::debug!(
                "depth {depth} done: score {score}, {} nodes, {} table entries",
                self.nodes,
                self.tt.len()
            );

            if score.abs() >= MATE_LOWER || self.nodes >= node_budget {
                break;
            }
        }

        SearchResult {
            best_move: self.tt.get(pos).and_then(|e| e.best_move),
            score,
            depth: completed,
            nodes: self.nodes,
        }
    }
}
