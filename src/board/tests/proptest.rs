//! Property-based tests using proptest.

use proptest::prelude::*;
use rand::prelude::*;

use crate::board::pst::static_score;
use crate::board::{Position, Square};

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Positions reached by playing random generated moves from the start
fn playout(seed: u64, num_moves: usize) -> Vec<Position> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos = Position::startpos();
    let mut seen = vec![pos];
    for _ in 0..num_moves {
        let moves = pos.generate_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        pos = pos.make_move(mv);
        seen.push(pos);
    }
    seen
}

proptest! {
    /// Property: flipping twice is the identity for every reachable position
    #[test]
    fn prop_flip_involution(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for pos in playout(seed, num_moves) {
            prop_assert_eq!(pos.flip().flip(), pos);
            prop_assert_eq!(pos.grid().flip().flip(), *pos.grid());
        }
    }

    /// Property: the sentinel frame survives any sequence of moves
    #[test]
    fn prop_border_stays_intact(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for pos in playout(seed, num_moves) {
            prop_assert!(pos.grid().has_intact_border());
            for mv in pos.generate_moves() {
                prop_assert!(mv.to().is_on_board());
                prop_assert!(pos.grid()[mv.from()].is_ours());
            }
        }
    }

    /// Property: the value delta predicts the successor's score, and matches
    /// a full recount unless a castling king was hit
    #[test]
    fn prop_value_matches_score(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for pos in playout(seed, num_moves) {
            for mv in pos.generate_moves() {
                let next = pos.make_move(mv);
                prop_assert_eq!(-next.score(), pos.score() + pos.value(mv));
                if pos.king_passant().is_none() {
                    prop_assert_eq!(
                        -static_score(next.grid()),
                        static_score(pos.grid()) + pos.value(mv)
                    );
                }
            }
        }
    }

    /// Property: square flipping is an involution on the whole grid
    #[test]
    fn prop_square_flip_involution(idx in 0u8..120) {
        let sq = Square(idx);
        prop_assert_eq!(sq.flip().flip(), sq);
        prop_assert_eq!(sq.flip().is_on_board(), sq.is_on_board());
    }
}
