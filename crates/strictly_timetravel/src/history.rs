//! Snapshot history with truncation for time travel.
//!
//! The log always starts with the empty board at index 0. Play appends one
//! snapshot per accepted move; jumping back truncates everything after the
//! chosen index so the next move branches from there.

use super::action::Move;
use super::error::GameError;
use super::rules::evaluate;
use super::types::Board;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Upper bound on history length: nine moves plus the initial board.
pub const MAX_HISTORY_LEN: usize = 10;

static INITIAL_SNAPSHOT: Snapshot = Snapshot::initial();

/// A recorded board state plus the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub(crate) mov: Option<Move>,
    pub(crate) board: Board,
}

impl Snapshot {
    /// The snapshot every game starts from.
    pub const fn initial() -> Self {
        Self {
            mov: None,
            board: Board::new(),
        }
    }

    /// Snapshot of `board` produced by `mov`.
    pub fn after(mov: Move, board: Board) -> Self {
        Self {
            mov: Some(mov),
            board,
        }
    }

    /// The move that produced this snapshot, `None` for the initial board.
    pub fn mov(&self) -> Option<&Move> {
        self.mov.as_ref()
    }

    /// Board at this point in the game.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// One line of the "jump to move" list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct HistoryEntry {
    index: usize,
    mov: Option<Move>,
}

impl HistoryEntry {
    /// Position in the history log.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move recorded at this index, `None` for the game start.
    pub fn mov(&self) -> Option<&Move> {
        self.mov.as_ref()
    }

    /// Button caption for this entry.
    pub fn description(&self) -> String {
        match (self.index, self.mov) {
            (0, _) | (_, None) => "Go to game start".to_string(),
            (index, Some(mov)) => format!("Go to move #{} {}", index, mov),
        }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Ordered log of snapshots, index 0 being the empty board.
///
/// Deserialized logs are validated: they must start from the initial
/// snapshot and hold at most [`MAX_HISTORY_LEN`] entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Snapshot>", into = "Vec<Snapshot>")]
pub struct HistoryLog {
    pub(crate) snapshots: Vec<Snapshot>,
}

impl HistoryLog {
    /// Creates a log holding only the initial snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
        }
    }

    /// Appends a snapshot at the end.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::HistoryClosed`] if the current head is already
    /// won or drawn.
    #[instrument(skip(self, snapshot), fields(len = self.snapshots.len()))]
    pub fn append(&mut self, snapshot: Snapshot) -> Result<(), GameError> {
        let head = evaluate(self.current().board()).status();
        if head.is_over() || self.snapshots.len() >= MAX_HISTORY_LEN {
            warn!(?head, "Refusing to extend a finished history");
            return Err(GameError::HistoryClosed);
        }

        self.snapshots.push(snapshot);
        debug!(len = self.snapshots.len(), "Snapshot appended");
        Ok(())
    }

    /// Discards every snapshot after `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IndexOutOfRange`] if `index` is not in the log.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn truncate(&mut self, index: usize) -> Result<(), GameError> {
        let len = self.snapshots.len();
        if index >= len {
            debug!("Truncation target outside history");
            return Err(GameError::IndexOutOfRange { index, len });
        }

        self.snapshots.truncate(index + 1);
        debug!(dropped = len - index - 1, "History truncated");
        Ok(())
    }

    /// Returns the last snapshot.
    pub fn current(&self) -> &Snapshot {
        self.snapshots.last().unwrap_or(&INITIAL_SNAPSHOT)
    }

    /// Returns the snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Number of snapshots, including the initial one.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the log holds no snapshots. A log built by `new` never does.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Iterates over snapshots from oldest to newest.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// All snapshots as a slice.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Entries for a "jump to move" list.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.snapshots
            .iter()
            .enumerate()
            .map(|(index, snapshot)| HistoryEntry::new(index, snapshot.mov))
            .collect()
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Snapshot>> for HistoryLog {
    type Error = GameError;

    #[instrument(skip(snapshots), fields(len = snapshots.len()))]
    fn try_from(snapshots: Vec<Snapshot>) -> Result<Self, Self::Error> {
        match snapshots.first() {
            None => {
                warn!("Rejecting empty history");
                return Err(GameError::MalformedHistory(
                    "history must contain the initial snapshot".to_string(),
                ));
            }
            Some(first) if *first != Snapshot::initial() => {
                warn!("Rejecting history with a non-empty start");
                return Err(GameError::MalformedHistory(
                    "history must start from the empty board".to_string(),
                ));
            }
            Some(_) => {}
        }

        if snapshots.len() > MAX_HISTORY_LEN {
            warn!("Rejecting oversized history");
            return Err(GameError::MalformedHistory(format!(
                "history holds {} snapshots, at most {} allowed",
                snapshots.len(),
                MAX_HISTORY_LEN
            )));
        }

        Ok(Self { snapshots })
    }
}

impl From<HistoryLog> for Vec<Snapshot> {
    fn from(log: HistoryLog) -> Self {
        log.snapshots
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
