#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunable search settings
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchParams {
    /// Width below which the outer score window counts as resolved
    pub eval_roughness: i32,
    /// Minimum value delta for a move to be searched at the horizon
    pub quiescence_threshold: i32,
    pub null_move_reduction: i32,
    /// Deepest iteration the outer loop will start
    pub max_depth: i32,
    /// Entries kept in the transposition table before it is cleared
    pub table_capacity: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            eval_roughness: 13,
            quiescence_threshold: 150,
            null_move_reduction: 3,
            max_depth: 99,
            table_capacity: 10_000_000,
        }
    }
}
