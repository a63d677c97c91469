//! Colour-aware wrapper around a `Position`.
//!
//! The position itself only knows "us" and "them". The protocol shells talk
//! in absolute squares, so `Game` remembers whose turn it is and converts
//! moves between the absolute board and the mover's frame.

use std::fmt;

use super::error::{FenError, MoveParseError};
use super::fen::parse_fen;
use super::position::Position;
use super::types::{Move, Piece, PieceKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Game {
    /// Current snapshot, from the point of view of the side to move
    pub position: Position,
    pub white_to_move: bool,
}

impl Game {
    #[must_use]
    pub fn startpos() -> Self {
        Game {
            position: Position::startpos(),
            white_to_move: true,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen)
    }

    /// Convert a move on the absolute board into the mover's frame.
    #[inline]
    #[must_use]
    pub fn to_frame(&self, mv: Move) -> Move {
        if self.white_to_move {
            mv
        } else {
            mv.flip()
        }
    }

    /// Convert a move in the mover's frame back onto the absolute board.
    #[inline]
    #[must_use]
    pub fn to_absolute(&self, mv: Move) -> Move {
        // Flipping is its own inverse
        self.to_frame(mv)
    }

    /// Parse an absolute move such as `e7e5` and check that it is one of the
    /// generated moves for the side to move. Returns the move in the mover's
    /// frame, ready for `play`.
    pub fn parse_move(&self, notation: &str) -> Result<Move, MoveParseError> {
        let mv = self.to_frame(notation.parse::<Move>()?);
        if !self.position.generate_moves().contains(&mv) {
            return Err(MoveParseError::IllegalMove {
                notation: notation.to_string(),
            });
        }
        // The suffix only belongs on a pawn reaching the last rank
        if notation.len() == 5 && !self.is_promotion(mv) {
            return Err(MoveParseError::InvalidPromotion { char: 'q' });
        }
        Ok(mv)
    }

    fn is_promotion(&self, mv: Move) -> bool {
        self.position.grid()[mv.from()] == Piece::Ours(PieceKind::Pawn) && mv.to().is_last_rank()
    }

    /// Apply a move given in the mover's frame and hand the turn over.
    pub fn play(&mut self, mv: Move) {
        self.position = self.position.make_move(mv);
        self.white_to_move = !self.white_to_move;
    }

    /// Parse and play a sequence of absolute moves. Stops at the first
    /// invalid one, leaving the moves before it applied.
    pub fn play_uci_moves<'a, I>(&mut self, moves: I) -> Result<(), MoveParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for notation in moves {
            let mv = self.parse_move(notation)?;
            self.play(mv);
        }
        Ok(())
    }

    /// Absolute long algebraic form of a move in the mover's frame, with the
    /// `q` suffix when a pawn promotes.
    #[must_use]
    pub fn format_move(&self, mv: Move) -> String {
        let mut text = self.to_absolute(mv).to_string();
        if self.is_promotion(mv) {
            text.push('q');
        }
        text
    }

    /// Render the board with White in upper case, rank 8 at the top.
    #[must_use]
    pub fn render(&self) -> String {
        if self.white_to_move {
            self.position.grid().render()
        } else {
            self.position.grid().flip().render()
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::startpos()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())?;
        writeln!(f, "{} to move", if self.white_to_move { "White" } else { "Black" })
    }
}
