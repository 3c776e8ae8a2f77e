//! Game error types.

use super::Position;

/// Why a move could not be placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The square at the position is already occupied.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The coordinates fall outside the 3x3 board.
    #[display("({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// Error returned by board, history and engine operations.
///
/// Every variant is recoverable; the caller decides whether to surface it
/// or quietly ignore it (e.g. a click on an occupied square).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The move targets an occupied or nonexistent square.
    #[display("Invalid move: {}", _0)]
    InvalidMove(#[error(not(source))] InvalidMove),

    /// A move was attempted after the game was won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// A replay target does not exist in the history.
    #[display("History index {} out of range (length {})", index, len)]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// The history head is terminal and cannot be extended.
    #[display("History is closed: the game has already ended")]
    HistoryClosed,

    /// A deserialized history does not start from the empty board or has
    /// the wrong length.
    #[display("Malformed history: {}", _0)]
    MalformedHistory(#[error(not(source))] String),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
