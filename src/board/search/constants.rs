//! Score thresholds shared by the search and its callers.

use crate::board::PieceKind;

/// Upper limit of any reachable score: a king plus ten queens. Used to size
/// the outer search window.
pub const MATE_VALUE: i32 = PieceKind::King.value() + 10 * PieceKind::Queen.value();

/// Scores at or beyond this magnitude mean a king has been captured. A king
/// capture is worth roughly a king, well short of `MATE_VALUE`, so the
/// decisive test subtracts the queens instead of adding them.
pub const MATE_LOWER: i32 = PieceKind::King.value() - 10 * PieceKind::Queen.value();

/// Initial best score in `bound`, below any real outcome
pub(crate) const WORST_SCORE: i32 = -3 * MATE_VALUE;
