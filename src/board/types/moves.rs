//! Move type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::MoveParseError;

/// A move from one square to another in the mover's frame.
///
/// There is no flag field: castling, en passant and promotion are recognised
/// from the moving piece and the geometry of the move when it is applied.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The same move expressed in the opponent's frame
    #[inline]
    #[must_use]
    pub const fn flip(self) -> Move {
        Move {
            from: self.from.flip(),
            to: self.to.flip(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Parses long algebraic notation such as `e2e4`. A trailing `q` is accepted
/// because pawns always promote to a queen; other promotion letters are
/// rejected.
impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: s.len() });
        }
        if let Some(promo) = s[4..].chars().next() {
            if promo != 'q' {
                return Err(MoveParseError::InvalidPromotion { char: promo });
            }
        }
        let square = |part: &str| {
            part.parse::<Square>()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: s.to_string(),
                })
        };
        Ok(Move::new(square(&s[0..2])?, square(&s[2..4])?))
    }
}
