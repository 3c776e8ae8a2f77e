//! Win detection logic for tic-tac-toe.

use super::super::{Board, GameStatus, Player, Position, Square};
use super::draw::is_full;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions forming a row, column or diagonal.
pub type WinLine = [Position; 3];

/// Every winning line, in evaluation order.
///
/// When a board completes more than one line at once, the first match in
/// this order is reported.
pub const LINES: [WinLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Evaluation {
    /// Owner of the first completed line.
    winner: Option<Player>,
    /// The first completed line.
    line: Option<WinLine>,
    /// Whether every square is occupied.
    full: bool,
}

impl Evaluation {
    /// Derives the game status: a winner beats a full board.
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(player) => GameStatus::Won(player),
            None if self.full => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }
}

/// Evaluates the board against every line in [`LINES`].
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    let full = is_full(board);

    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Evaluation {
                winner: Some(player),
                line: Some(line),
                full,
            };
        }
    }

    Evaluation {
        winner: None,
        line: None,
        full,
    }
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).winner
}
