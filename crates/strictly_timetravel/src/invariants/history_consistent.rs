//! History consistency invariant: snapshot index matches occupied squares.

use super::super::{GameEngine, MAX_HISTORY_LEN};
use super::Invariant;

/// Invariant: Snapshot `k` holds exactly `k` marks.
///
/// Every move in history corresponds to exactly one occupied square,
/// and the log never outgrows nine moves plus the initial board.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(game: &GameEngine) -> bool {
        let history = game.history();

        history.len() <= MAX_HISTORY_LEN
            && history
                .iter()
                .enumerate()
                .all(|(index, snapshot)| snapshot.board().occupied_count() == index)
    }

    fn description() -> &'static str {
        "History index matches number of occupied squares"
    }
}
