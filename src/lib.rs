pub mod board;
pub mod cli;
pub mod tt;
pub mod uci;

pub use board::{Game, Move, Piece, Position, Searcher, Square};
pub use tt::TranspositionTable;
