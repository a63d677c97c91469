//! Piece codes for the side-relative board.
//!
//! The board never records an absolute colour. A square holds either one of
//! the mover's pieces (`Ours`), one of the opponent's pieces (`Theirs`), an
//! empty playing square or the off-board padding.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece types in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Parse a piece type from a letter, ignoring case
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Uppercase letter for this piece type
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Static material value. The king is worth more than all other material
    /// combined so that losing it always dominates the score.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 280,
            PieceKind::Bishop => 320,
            PieceKind::Rook => 479,
            PieceKind::Queen => 929,
            PieceKind::King => 60000,
        }
    }

    /// Bishops, rooks and queens keep moving along a direction until blocked
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

/// Contents of one cell of the padded grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Piece {
    /// Padding outside the 8x8 playing area
    OffBoard,
    /// Empty playing square
    Empty,
    /// A piece belonging to the side to move
    Ours(PieceKind),
    /// A piece belonging to the opponent
    Theirs(PieceKind),
}

impl Piece {
    /// Material value from the mover's point of view: positive for own
    /// pieces, zero for opponent pieces and sentinels.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Piece::Ours(kind) => kind.value(),
            _ => 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_ours(self) -> bool {
        self.value() > 0
    }

    #[inline]
    #[must_use]
    pub const fn is_theirs(self) -> bool {
        matches!(self, Piece::Theirs(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn is_off_board(self) -> bool {
        matches!(self, Piece::OffBoard)
    }

    /// Piece type, if the cell holds a piece
    #[inline]
    #[must_use]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Piece::Ours(kind) | Piece::Theirs(kind) => Some(kind),
            Piece::Empty | Piece::OffBoard => None,
        }
    }

    /// The same piece owned by the other side. Sentinels are unchanged.
    #[inline]
    #[must_use]
    pub const fn flip(self) -> Piece {
        match self {
            Piece::Ours(kind) => Piece::Theirs(kind),
            Piece::Theirs(kind) => Piece::Ours(kind),
            other => other,
        }
    }

    /// Parse a FEN piece letter: uppercase is ours, lowercase is theirs.
    /// Sentinel characters are not accepted.
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_char(c)?;
        if c.is_ascii_uppercase() {
            Some(Piece::Ours(kind))
        } else {
            Some(Piece::Theirs(kind))
        }
    }

    /// Display letter: uppercase for ours, lowercase for theirs, `.` for an
    /// empty square and a space for padding.
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::OffBoard => ' ',
            Piece::Empty => '.',
            Piece::Ours(kind) => kind.to_char(),
            Piece::Theirs(kind) => kind.to_char().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership_follows_value() {
        assert!(Piece::Ours(PieceKind::Pawn).is_ours());
        assert!(!Piece::Theirs(PieceKind::Queen).is_ours());
        assert!(!Piece::Empty.is_ours());
        assert!(!Piece::OffBoard.is_ours());
        assert_eq!(Piece::Theirs(PieceKind::King).value(), 0);
    }

    #[test]
    fn test_flip_swaps_case() {
        for kind in PieceKind::ALL {
            let ours = Piece::Ours(kind);
            assert_eq!(ours.flip(), Piece::Theirs(kind));
            assert_eq!(ours.flip().flip(), ours);
            assert_eq!(ours.flip().to_char(), ours.to_char().to_ascii_lowercase());
        }
        assert_eq!(Piece::Empty.flip(), Piece::Empty);
        assert_eq!(Piece::OffBoard.flip(), Piece::OffBoard);
    }

    #[test]
    fn test_from_char() {
        assert_eq!(Piece::from_char('N'), Some(Piece::Ours(PieceKind::Knight)));
        assert_eq!(Piece::from_char('q'), Some(Piece::Theirs(PieceKind::Queen)));
        assert_eq!(Piece::from_char('.'), None);
        assert_eq!(Piece::from_char(' '), None);
        assert_eq!(Piece::from_char('x'), None);
    }
}
