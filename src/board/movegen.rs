//! Pseudo-legal move generation on the padded grid.
//!
//! Moves are produced for our pieces only, in board-index order and then in
//! direction-table order. Leaving the king in check is not filtered out: the
//! search sees the king capture on the next ply instead.

use super::position::Position;
use super::types::{Corner, Move, Piece, PieceKind, Square, EAST, NORTH, SOUTH, WEST};

const PAWN_DIRS: &[i8] = &[NORTH, NORTH + NORTH, NORTH + WEST, NORTH + EAST];
const KNIGHT_DIRS: &[i8] = &[
    NORTH + NORTH + EAST,
    EAST + NORTH + EAST,
    EAST + SOUTH + EAST,
    SOUTH + SOUTH + EAST,
    SOUTH + SOUTH + WEST,
    WEST + SOUTH + WEST,
    WEST + NORTH + WEST,
    NORTH + NORTH + WEST,
];
const BISHOP_DIRS: &[i8] = &[NORTH + EAST, SOUTH + EAST, SOUTH + WEST, NORTH + WEST];
const ROOK_DIRS: &[i8] = &[NORTH, EAST, SOUTH, WEST];
const ROYAL_DIRS: &[i8] = &[
    NORTH,
    EAST,
    SOUTH,
    WEST,
    NORTH + EAST,
    SOUTH + EAST,
    SOUTH + WEST,
    NORTH + WEST,
];

/// Movement directions per piece type
#[inline]
#[must_use]
pub(crate) const fn directions(kind: PieceKind) -> &'static [i8] {
    match kind {
        PieceKind::Pawn => PAWN_DIRS,
        PieceKind::Knight => KNIGHT_DIRS,
        PieceKind::Bishop => BISHOP_DIRS,
        PieceKind::Rook => ROOK_DIRS,
        PieceKind::Queen | PieceKind::King => ROYAL_DIRS,
    }
}

/// First rank of our pawns' double-step squares (rank 2)
const PAWN_HOME_START: Square = Square(Square::A1.0 - 10);

impl Position {
    /// Generate all pseudo-legal moves for the side to move.
    #[must_use]
    pub fn generate_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(48);
        for (from, piece) in self.grid.iter() {
            let Piece::Ours(kind) = piece else {
                continue;
            };
            for &dir in directions(kind) {
                self.walk(from, kind, dir, &mut moves);
            }
        }
        moves
    }

    /// Follow one direction from `from`, pushing every reachable destination.
    fn walk(&self, from: Square, kind: PieceKind, dir: i8, moves: &mut Vec<Move>) {
        let mut to = from.offset(dir);
        loop {
            let target = self.grid[to];
            if target.is_off_board() || target.is_ours() {
                break;
            }
            if kind == PieceKind::Pawn && !self.pawn_may_step(from, to, dir, target) {
                break;
            }
            moves.push(Move::new(from, to));

            if !kind.is_slider() || target.is_theirs() {
                break;
            }

            // A rook arriving next to our king offers castling on its side
            if from == Square::A1
                && self.grid[to.offset(EAST)] == Piece::Ours(PieceKind::King)
                && self.castling.has(Corner::A1)
            {
                moves.push(Move::new(to.offset(EAST), to.offset(WEST)));
            }
            if from == Square::H1
                && self.grid[to.offset(WEST)] == Piece::Ours(PieceKind::King)
                && self.castling.has(Corner::H1)
            {
                moves.push(Move::new(to.offset(WEST), to.offset(EAST)));
            }

            to = to.offset(dir);
        }
    }

    fn pawn_may_step(&self, from: Square, to: Square, dir: i8, target: Piece) -> bool {
        if dir == NORTH || dir == NORTH + NORTH {
            if !target.is_empty() {
                return false;
            }
            if dir == NORTH + NORTH
                && (from < PAWN_HOME_START || !self.grid[from.offset(NORTH)].is_empty())
            {
                return false;
            }
            return true;
        }
        // Diagonal: a capture, the en passant target, or a square a castling
        // king touched
        target.is_theirs()
            || Some(to) == self.en_passant
            || self.king_passant.is_some_and(|kp| to.diff(kp).abs() < 2)
    }
}
