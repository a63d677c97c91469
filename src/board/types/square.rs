//! Square types and utilities.
//!
//! Squares index the 12x10 padded grid: two guard ranks above and below the
//! playing area and one guard file on each side. Rank 8 of the mover's view is
//! row 2, rank 1 is row 9.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Offset of one step towards the opponent's side of the board.
pub const NORTH: i8 = -10;
pub const EAST: i8 = 1;
pub const SOUTH: i8 = 10;
pub const WEST: i8 = -1;

/// Index into the 120-cell padded grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub u8);

impl Square {
    /// Number of cells in the padded grid
    pub const COUNT: usize = 120;

    pub const A1: Square = Square(91);
    pub const H1: Square = Square(98);
    pub const A8: Square = Square(21);
    pub const H8: Square = Square(28);

    /// Square from zero-based file (0 = a) and rank (0 = rank 1)
    #[must_use]
    pub fn new(file: usize, rank: usize) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(((9 - rank) * 10 + file + 1) as u8))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row of the padded grid (2..=9 on the board)
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 10
    }

    /// Column of the padded grid (1..=8 on the board)
    #[inline]
    #[must_use]
    pub const fn column(self) -> u8 {
        self.0 % 10
    }

    /// True for the 64 playing squares
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        let (row, col) = (self.row(), self.column());
        row >= 2 && row <= 9 && col >= 1 && col <= 8
    }

    /// True on the mover's last rank, where pawns promote
    #[inline]
    #[must_use]
    pub const fn is_last_rank(self) -> bool {
        self.0 >= Square::A8.0 && self.0 <= Square::H8.0
    }

    /// Point reflection through the grid centre, the square as seen by the
    /// opponent. `s.flip().flip() == s`.
    #[inline]
    #[must_use]
    pub const fn flip(self) -> Square {
        Square(119 - self.0)
    }

    /// Step by a direction offset. Any playing square plus a knight, king or
    /// pawn offset stays inside the padded grid.
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: i8) -> Square {
        Square((self.0 as i16 + delta as i16) as u8)
    }

    /// Signed distance `self - other` in grid cells
    #[inline]
    #[must_use]
    pub const fn diff(self, other: Square) -> i16 {
        self.0 as i16 - other.0 as i16
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let files = b" abcdefgh ";
        let ranks = b"  87654321  ";
        let file = files.get(self.column() as usize).copied().unwrap_or(b' ');
        let rank = ranks.get(self.row() as usize).copied().unwrap_or(b' ');
        write!(f, "{}{}", file as char, rank as char)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a') as usize,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => (bytes[1] - b'1') as usize,
            _ => return Err(invalid()),
        };
        Square::new(file, rank).ok_or_else(invalid)
    }
}
