//! Game state snapshot.
//!
//! A `Position` is always expressed from the point of view of the side about
//! to move. Applying a move never mutates the receiver: it returns a new
//! snapshot already flipped for the opponent, so callers (the search in
//! particular) can keep the parent around instead of undoing moves.

use super::grid::Grid;
use super::pst;
use super::types::{CastlingRights, Corner, Move, Piece, PieceKind, Square, NORTH, SOUTH};

/// King home squares in the mover's frame. White's king starts on e1; the
/// frame rotates Black's board, so its king starts on d1.
const WHITE_KING_HOME: Square = Square(95);
const BLACK_KING_HOME: Square = Square(94);

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) grid: Grid,
    /// Running evaluation, higher is better for the side to move
    pub(crate) score: i32,
    /// Our castling rights, by rook corner in our frame
    pub(crate) castling: CastlingRights,
    /// Their castling rights, by rook corner in their frame
    pub(crate) their_castling: CastlingRights,
    /// Square a pawn just skipped over, capturable en passant by us
    pub(crate) en_passant: Option<Square>,
    /// Square the opponent's king crossed while castling
    pub(crate) king_passant: Option<Square>,
}

impl Position {
    /// Wrap a grid as a game start: no castling rights, no en passant target,
    /// score set to the static value of the board.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Position {
            grid,
            score: pst::static_score(&grid),
            castling: CastlingRights::none(),
            their_castling: CastlingRights::none(),
            en_passant: None,
            king_passant: None,
        }
    }

    /// The standard starting position with White to move
    #[must_use]
    pub fn startpos() -> Self {
        let mut grid = Grid::empty();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            let ours = Square(Square::A1.0 + file as u8);
            let theirs = Square(Square::A8.0 + file as u8);
            grid[ours] = Piece::Ours(*kind);
            grid[ours.offset(NORTH)] = Piece::Ours(PieceKind::Pawn);
            grid[theirs] = Piece::Theirs(*kind);
            grid[theirs.offset(SOUTH)] = Piece::Theirs(PieceKind::Pawn);
        }
        Position::new(grid).with_castling(CastlingRights::all(), CastlingRights::all())
    }

    /// Replace the castling flags, keeping only rights whose rook still
    /// stands in its corner next to a king on its home rank.
    #[must_use]
    pub fn with_castling(mut self, ours: CastlingRights, theirs: CastlingRights) -> Self {
        self.castling = self.grid.castling_rights_for(ours);
        self.their_castling = self.grid.flip().castling_rights_for(theirs);
        self
    }

    #[must_use]
    pub fn with_en_passant(mut self, target: Option<Square>) -> Self {
        self.en_passant = target;
        self
    }

    #[inline]
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    #[must_use]
    pub fn their_castling(&self) -> CastlingRights {
        self.their_castling
    }

    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn king_passant(&self) -> Option<Square> {
        self.king_passant
    }

    /// The same position with the opponent to move: grid flipped, score
    /// negated, rights swapped, targets re-expressed in the new frame.
    #[must_use]
    pub fn flip(&self) -> Position {
        Position {
            grid: self.grid.flip(),
            score: -self.score,
            castling: self.their_castling,
            their_castling: self.castling,
            en_passant: self.en_passant.map(Square::flip),
            king_passant: self.king_passant.map(Square::flip),
        }
    }

    /// Pass the turn. Targets only exist for the move right after the one
    /// that created them, so a null move clears them.
    #[must_use]
    pub fn null_move(&self) -> Position {
        let mut next = self.flip();
        next.en_passant = None;
        next.king_passant = None;
        next
    }

    /// Apply `mv` and return the successor, flipped for the opponent.
    ///
    /// Special moves are recognised from the piece and the geometry: a king
    /// moving two files castles, a pawn reaching the last rank becomes a
    /// queen, a double pawn step sets the en passant target and a pawn moving
    /// onto the current target removes the pawn behind it.
    #[must_use]
    pub fn make_move(&self, mv: Move) -> Position {
        let (from, to) = (mv.from(), mv.to());
        let piece = self.grid[from];

        let mut next = *self;
        next.en_passant = None;
        next.king_passant = None;
        next.score = self.score + self.value(mv);
        next.grid[to] = piece;
        next.grid[from] = Piece::Empty;

        if from == Square::A1 {
            next.castling.remove(Corner::A1);
        }
        if from == Square::H1 {
            next.castling.remove(Corner::H1);
        }
        // Their corners seen from our side
        if to == Square::A8 {
            next.their_castling.remove(Corner::H1);
        }
        if to == Square::H8 {
            next.their_castling.remove(Corner::A1);
        }

        match piece {
            Piece::Ours(PieceKind::King) => {
                next.castling.clear();
                if to.diff(from).abs() == 2 {
                    let corner = if to < from { Square::A1 } else { Square::H1 };
                    let crossed = Square((from.0 + to.0) / 2);
                    next.grid[corner] = Piece::Empty;
                    next.grid[crossed] = Piece::Ours(PieceKind::Rook);
                    next.king_passant = Some(crossed);
                }
            }
            Piece::Ours(PieceKind::Pawn) => {
                if to.is_last_rank() {
                    next.grid[to] = Piece::Ours(PieceKind::Queen);
                }
                if to.diff(from) == 2 * NORTH as i16 {
                    next.en_passant = Some(from.offset(NORTH));
                }
                if Some(to) == self.en_passant {
                    next.grid[to.offset(SOUTH)] = Piece::Empty;
                }
            }
            _ => {}
        }

        next.flip()
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::startpos()
    }
}

impl Grid {
    /// Filter requested rights down to those with a rook on the corner and a
    /// king on its home square. The grid does not know its colour, so either
    /// home square is accepted.
    fn castling_rights_for(&self, requested: CastlingRights) -> CastlingRights {
        let king_home = [WHITE_KING_HOME, BLACK_KING_HOME]
            .iter()
            .any(|sq| self[*sq] == Piece::Ours(PieceKind::King));
        let mut rights = CastlingRights::none();
        for (corner, sq) in [(Corner::A1, Square::A1), (Corner::H1, Square::H1)] {
            if king_home && requested.has(corner) && self[sq] == Piece::Ours(PieceKind::Rook) {
                rights.set(corner);
            }
        }
        rights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{parse_fen, EAST};

    #[test]
    fn test_null_move_drops_king_passant() {
        let mut game =
            parse_fen("r3k2r/pppq1ppp/2n5/3pP3/8/5N2/PPP2PPP/R3K2R b KQkq - 0 1").unwrap();
        game.play(game.parse_move("e8g8").unwrap());

        // Back in Black's frame the rook stands on the square its king crossed
        let flipped = game.position.flip();
        let crossed = flipped.king_passant().expect("castling sets the target");
        assert_eq!(flipped.grid()[crossed], Piece::Ours(PieceKind::Rook));
        let rook_back = Move::new(crossed, crossed.offset(EAST));

        // Flipping alone keeps the target, so Black's own rook move would
        // collect the king's value
        assert!(flipped.value(rook_back) >= crate::board::MATE_LOWER);

        let passed = game.position.null_move();
        assert_eq!(passed.king_passant(), None);
        assert_eq!(passed.value(rook_back), 23);
    }

    #[test]
    fn test_null_move_drops_en_passant() {
        let mut game = parse_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").unwrap();
        game.play(game.parse_move("d7d5").unwrap());
        assert!(game.position.en_passant().is_some());
        let passed = game.position.null_move();
        assert_eq!(passed.en_passant(), None);
        assert_eq!(passed.grid(), game.position.flip().grid());
        assert_eq!(passed.score(), -game.position.score());
    }

    #[test]
    fn test_castling_needs_king_on_a_home_square() {
        let grid = parse_fen("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").unwrap().position.grid;
        assert_eq!(grid.castling_rights_for(CastlingRights::all()), CastlingRights::all());
        let grid = parse_fen("4k3/8/8/8/8/8/8/R2K3R w - - 0 1").unwrap().position.grid;
        assert_eq!(grid.castling_rights_for(CastlingRights::all()), CastlingRights::all());
        let grid = parse_fen("4k3/8/8/8/8/8/8/R1K4R w - - 0 1").unwrap().position.grid;
        assert_eq!(grid.castling_rights_for(CastlingRights::all()), CastlingRights::none());
    }
}
