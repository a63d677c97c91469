//! Transposition table for caching search results.
//!
//! Entries are keyed by the whole `Position`. Positions are always expressed
//! from the side to move, so two move orders reaching the same board, rights
//! and targets share one entry. When the table grows past its capacity it is
//! cleared in one go.

use std::collections::HashMap;

use crate::board::{Move, Position};

/// Result of one null-window probe
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub depth: i32,
    pub score: i32,
    /// Threshold the score was computed against. `score >= gamma` means the
    /// score is a lower bound, otherwise an upper bound.
    pub gamma: i32,
    pub best_move: Option<Move>,
}

impl TTEntry {
    /// True if this entry answers a probe at `gamma` and `depth`: it is deep
    /// enough and its bound lies on the same side of `gamma` as before.
    #[inline]
    #[must_use]
    pub fn answers(&self, gamma: i32, depth: i32) -> bool {
        self.depth >= depth
            && ((self.score < self.gamma && self.score < gamma)
                || (self.score >= self.gamma && self.score >= gamma))
    }
}

pub struct TranspositionTable {
    entries: HashMap<Position, TTEntry>,
    capacity: usize,
    evictions: u64,
}

impl TranspositionTable {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        TranspositionTable {
            entries: HashMap::new(),
            capacity,
            evictions: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, pos: &Position) -> Option<TTEntry> {
        self.entries.get(pos).copied()
    }

    /// Insert or overwrite the entry for `pos`. If that pushes the table past
    /// capacity, every entry is dropped.
    pub fn store(&mut self, pos: Position, entry: TTEntry) {
        self.entries.insert(pos, entry);
        if self.entries.len() > self.capacity {
            #[cfg(feature = "logging")]
            log::debug!(
                "transposition table over capacity ({} entries), clearing",
                self.entries.len()
            );
            self.entries.clear();
            self.evictions += 1;
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the capacity. Shrinking below the current size clears the table.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        if self.entries.len() > capacity {
            self.entries.clear();
            self.evictions += 1;
        }
    }

    /// Number of whole-table clears caused by overflow
    #[inline]
    #[must_use]
    pub fn evictions(&self) -> u64 {
        self.evictions
    }
}
