//! The 12x10 padded grid.
//!
//! The 8x8 playing area sits inside two guard ranks above and below and one
//! guard file on each side. Adding any direction offset used by move
//! generation to a playing square lands on another cell of the grid, so a
//! walk off the edge is detected by reading `Piece::OffBoard` rather than by
//! bounds checks.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use super::types::{Piece, Square};

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid([Piece; Square::COUNT]);

impl Grid {
    /// An empty board: playing squares are `Empty`, padding is `OffBoard`.
    #[must_use]
    pub fn empty() -> Self {
        let mut cells = [Piece::OffBoard; Square::COUNT];
        for (idx, cell) in cells.iter_mut().enumerate() {
            if Square(idx as u8).is_on_board() {
                *cell = Piece::Empty;
            }
        }
        Grid(cells)
    }

    /// The board as seen by the opponent: cells in reverse order with every
    /// piece changing owner. Flipping twice yields the original grid.
    #[must_use]
    pub fn flip(&self) -> Self {
        let mut cells = [Piece::OffBoard; Square::COUNT];
        for (idx, cell) in cells.iter_mut().enumerate() {
            *cell = self.0[Square::COUNT - 1 - idx].flip();
        }
        Grid(cells)
    }

    /// All 120 cells with their squares, in index order
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(idx, piece)| (Square(idx as u8), *piece))
    }

    /// Playing squares in display order, rank 8 first
    pub fn playing_squares() -> impl Iterator<Item = Square> {
        (2..10u8).flat_map(|row| (1..9u8).map(move |col| Square(row * 10 + col)))
    }

    /// 8x8 text diagram: a leading newline, then one line per rank.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(73);
        out.push('\n');
        for row in 2..10u8 {
            for col in 1..9u8 {
                out.push(self[Square(row * 10 + col)].to_char());
            }
            out.push('\n');
        }
        out
    }

    /// True if every padding cell holds `OffBoard` and no playing square does.
    #[must_use]
    pub fn has_intact_border(&self) -> bool {
        self.iter()
            .all(|(sq, piece)| sq.is_on_board() != piece.is_off_board())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::empty()
    }
}

impl Index<Square> for Grid {
    type Output = Piece;

    #[inline]
    fn index(&self, sq: Square) -> &Piece {
        &self.0[sq.index()]
    }
}

impl IndexMut<Square> for Grid {
    #[inline]
    fn index_mut(&mut self, sq: Square) -> &mut Piece {
        &mut self.0[sq.index()]
    }
}

/// Hashes the canonical one-byte-per-cell letter encoding of the grid.
impl Hash for Grid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut bytes = [0u8; Square::COUNT];
        for (byte, piece) in bytes.iter_mut().zip(self.0.iter()) {
            *byte = piece.to_char() as u8;
        }
        state.write(&bytes);
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
