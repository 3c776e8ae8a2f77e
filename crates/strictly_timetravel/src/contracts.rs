//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::Move;
use super::engine::GameEngine;
use super::error::{GameError, InvalidMove};
use super::invariants::{InvariantSet, TimetravelInvariants};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`GameError::GameOver`] once the game is won or drawn.
    pub fn check(game: &GameEngine) -> Result<(), GameError> {
        if game.status().is_over() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`InvalidMove::SquareOccupied`] for a taken square.
    pub fn check(mov: &Move, game: &GameEngine) -> Result<(), GameError> {
        if !game.board().is_empty(mov.position()) {
            Err(GameError::InvalidMove(InvalidMove::SquareOccupied(
                mov.position(),
            )))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the game is live and the square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameEngine) -> Result<(), GameError> {
        GameNotOver::check(game)?;
        SquareIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game must not be over
/// - Square must be empty
///
/// Postconditions:
/// - History stays monotonic
/// - Players still alternate
/// - Each snapshot holds exactly as many marks as its index
pub struct MoveContract;

impl Contract<GameEngine, Move> for MoveContract {
    fn pre(game: &GameEngine, action: &Move) -> Result<(), GameError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), GameError> {
        if after.history().len() != before.history().len() + 1 {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "Move did not add exactly one snapshot"
            );
            return Err(GameError::InvariantViolation(
                "Postcondition failed: history must grow by one snapshot".to_string(),
            ));
        }

        TimetravelInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
