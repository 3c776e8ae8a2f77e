//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::error::{GameError, InvalidMove};
use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    player: Player,
    /// The position where the player places their mark.
    position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Creates a move from zero-based row and column.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::OutOfBounds`] if either coordinate is outside the board.
    #[instrument]
    pub fn at(row: usize, col: usize, player: Player) -> Result<Self, GameError> {
        match Position::from_coords(row, col) {
            Some(position) => Ok(Self::new(player, position)),
            None => {
                debug!("Coordinates fall outside the board");
                Err(GameError::InvalidMove(InvalidMove::OutOfBounds { row, col }))
            }
        }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Zero-based row of the move.
    pub fn row(&self) -> usize {
        self.position.row()
    }

    /// Zero-based column of the move.
    pub fn col(&self) -> usize {
        self.position.col()
    }
}

impl std::fmt::Display for Move {
    /// Renders as `X - (col,row)`, column first.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - ({},{})", self.player, self.col(), self.row())
    }
}
