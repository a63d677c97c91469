//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `PieceKind` - side-relative piece codes and sentinels
//! - `Square` - index into the 12x10 padded grid
//! - `Move` - origin/destination pair
//! - `CastlingRights` - per-corner castling flags

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastlingRights, Corner};
pub use moves::Move;
pub use piece::{Piece, PieceKind};
pub use square::{Square, EAST, NORTH, SOUTH, WEST};
