//! Board representation and game logic.
//!
//! The board is a 12x10 padded mailbox: the 8x8 playing area is surrounded
//! by off-board sentinels so that every direction step lands on a readable
//! cell. Positions are always stored from the point of view of the side to
//! move and flip between plies.
//!
//! # Example
//! ```
//! use mailbox_engine::board::{Position, Searcher};
//!
//! let pos = Position::startpos();
//! println!("Starting position has {} moves", pos.generate_moves().len());
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&pos, 500);
//! assert!(result.best_move.is_some());
//! ```

mod error;
mod eval;
mod fen;
mod game;
mod grid;
mod movegen;
mod position;
mod pst;
mod search;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use fen::{parse_fen, parse_placement, STARTPOS_FEN};
pub use game::Game;
pub use grid::Grid;
pub use position::Position;
pub use types::{CastlingRights, Corner, Move, Piece, PieceKind, Square, EAST, NORTH, SOUTH, WEST};

pub use search::{
    SearchInfo, SearchLogger, SearchParams, SearchResult, Searcher, SilentLogger, StdoutLogger,
    MATE_LOWER, MATE_VALUE,
};
