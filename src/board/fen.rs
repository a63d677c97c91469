//! FEN decoding.
//!
//! Only the first four fields are read: piece placement, side to move,
//! castling availability and en passant target. The placement is mandatory,
//! the rest default to White to move with no rights and no target. Any
//! malformed field rejects the whole string.

use std::str::FromStr;

use super::error::FenError;
use super::game::Game;
use super::grid::Grid;
use super::position::Position;
use super::types::{CastlingRights, Corner, Piece, Square};

/// FEN of the standard starting position
pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parse the piece placement field into a grid with White's pieces as ours.
pub fn parse_placement(placement: &str) -> Result<Grid, FenError> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::WrongRowCount { found: rows.len() });
    }

    let mut grid = Grid::empty();
    for (row, text) in rows.iter().enumerate() {
        let rank = 7 - row;
        let mut file = 0usize;
        for c in text.chars() {
            match c {
                '1'..='8' => file += c as usize - '0' as usize,
                _ => {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let sq = Square::new(file, rank).ok_or(FenError::InvalidRowLength { row })?;
                    grid[sq] = piece;
                    file += 1;
                }
            }
            if file > 8 {
                return Err(FenError::InvalidRowLength { row });
            }
        }
        if file != 8 {
            return Err(FenError::InvalidRowLength { row });
        }
    }
    Ok(grid)
}

/// Parse a FEN string into a game, with the position already expressed from
/// the point of view of the side to move.
pub fn parse_fen(fen: &str) -> Result<Game, FenError> {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().ok_or(FenError::Empty)?;
    let grid = parse_placement(placement)?;

    let white_to_move = match fields.next() {
        None | Some("w") => true,
        Some("b") => false,
        Some(other) => {
            return Err(FenError::InvalidSideToMove {
                found: other.to_string(),
            })
        }
    };

    // White's corners are A1 = Q and H1 = K. Black's are mirrored, so in its
    // own frame A1 is its kingside rook.
    let mut white = CastlingRights::none();
    let mut black = CastlingRights::none();
    if let Some(castling) = fields.next() {
        for c in castling.chars() {
            match c {
                'K' => white.set(Corner::H1),
                'Q' => white.set(Corner::A1),
                'k' => black.set(Corner::A1),
                'q' => black.set(Corner::H1),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
    }

    let en_passant = match fields.next() {
        None | Some("-") => None,
        Some(text) => Some(text.parse::<Square>().map_err(|_| FenError::InvalidEnPassant {
            found: text.to_string(),
        })?),
    };

    let position = Position::new(grid)
        .with_castling(white, black)
        .with_en_passant(en_passant);
    let position = if white_to_move {
        position
    } else {
        position.flip()
    };

    Ok(Game {
        position,
        white_to_move,
    })
}

impl FromStr for Grid {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let placement = s.split_whitespace().next().ok_or(FenError::Empty)?;
        parse_placement(placement)
    }
}

impl FromStr for Game {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fen(s)
    }
}
