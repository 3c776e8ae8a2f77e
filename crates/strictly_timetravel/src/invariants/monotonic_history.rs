//! Monotonic history invariant: each snapshot adds exactly its own move.

use super::super::{Board, GameEngine};
use super::Invariant;

/// Invariant: Every snapshot is its predecessor plus one mark.
///
/// The initial snapshot is an empty board with no move. Each later snapshot
/// records a move, and applying that move to the previous board yields
/// exactly the stored board, so no earlier mark is ever overwritten.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameEngine> for MonotonicHistoryInvariant {
    fn holds(game: &GameEngine) -> bool {
        let snapshots = game.history().snapshots();

        let Some(first) = snapshots.first() else {
            return false;
        };
        if first.mov().is_some() || *first.board() != Board::new() {
            return false;
        }

        snapshots.windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            match next.mov() {
                Some(mov) => prev.board().apply_move(mov).as_ref() == Ok(next.board()),
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot equals the previous board plus its move"
    }
}
