//! Incremental move evaluation.

use super::position::Position;
use super::pst::square_value;
use super::types::{Move, Piece, PieceKind, Square, SOUTH};

impl Position {
    /// Change in the mover's score if `mv` were played, without playing it.
    ///
    /// Our pieces are looked up at their own squares, captured pieces at the
    /// flipped square so they are valued in their owner's frame.
    #[must_use]
    pub fn value(&self, mv: Move) -> i32 {
        let (from, to) = (mv.from(), mv.to());
        let Some(kind) = self.grid[from].kind() else {
            return 0;
        };

        let mut score = square_value(kind, to) - square_value(kind, from);
        if let Piece::Theirs(captured) = self.grid[to] {
            score += square_value(captured, to.flip());
        }

        // Landing on or next to the square a castling king crossed counts as
        // taking the king
        if let Some(kp) = self.king_passant {
            if to.diff(kp).abs() < 2 {
                score += square_value(PieceKind::King, to.flip());
            }
        }

        match kind {
            PieceKind::King if to.diff(from).abs() == 2 => {
                let crossed = Square((from.0 + to.0) / 2);
                let corner = if to < from { Square::A1 } else { Square::H1 };
                score += square_value(PieceKind::Rook, crossed) - square_value(PieceKind::Rook, corner);
            }
            PieceKind::Pawn => {
                if to.is_last_rank() {
                    score += square_value(PieceKind::Queen, to) - square_value(PieceKind::Pawn, to);
                }
                if Some(to) == self.en_passant {
                    score += square_value(PieceKind::Pawn, to.offset(SOUTH).flip());
                }
            }
            _ => {}
        }
        score
    }
}
