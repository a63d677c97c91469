//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rook home corner in the mover's frame.
///
/// The side-relative board mirrors the opponent through the grid centre, so
/// the `A1` rook is queenside for White but kingside for Black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Corner {
    A1,
    H1,
}

impl Corner {
    #[inline]
    const fn index(self) -> usize {
        match self {
            Corner::A1 => 0,
            Corner::H1 => 1,
        }
    }
}

/// Castling availability for one side, one flag per rook corner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights([bool; 2]);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights([false, false])
    }

    /// Both rooks still available
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights([true, true])
    }

    /// Check if castling with the rook on `corner` is still allowed
    #[inline]
    #[must_use]
    pub const fn has(self, corner: Corner) -> bool {
        self.0[corner.index()]
    }

    #[inline]
    pub fn set(&mut self, corner: Corner) {
        self.0[corner.index()] = true;
    }

    #[inline]
    pub fn remove(&mut self, corner: Corner) {
        self.0[corner.index()] = false;
    }

    /// Drop both rights, e.g. after a king move
    #[inline]
    pub fn clear(&mut self) {
        self.0 = [false, false];
    }
}
