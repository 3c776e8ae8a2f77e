//! Strictly Timetravel - tic-tac-toe with move history and time travel
//!
//! This library provides the game-state engine behind a tic-tac-toe board
//! that lets players jump back to any earlier move. Rendering is left to the
//! caller: the engine accepts moves and replay requests and exposes
//! everything a view needs to draw the board.
//!
//! # Architecture
//!
//! - **Board**: value-semantics 3x3 grid, moves produce new boards
//! - **Rules**: win and draw evaluation over a fixed line order
//! - **History**: snapshot log, append-only during play, truncated on replay
//! - **Engine**: turn alternation, validation and status tracking
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameEngine, GameStatus, Player};
//!
//! # fn example() -> Result<(), strictly_timetravel::GameError> {
//! let mut engine = GameEngine::new();
//! engine.play(1, 1)?;
//! engine.play(0, 0)?;
//! assert_eq!(engine.to_move(), Player::X);
//!
//! // Jump back to the first move, discarding the second
//! let status = engine.replay(1)?;
//! assert_eq!(status, GameStatus::InProgress);
//! assert_eq!(engine.history().len(), 2);
//! assert_eq!(engine.to_move(), Player::O);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod config;
mod contracts;
mod engine;
mod error;
mod history;
mod invariants;
mod position;
mod rules;
mod types;
mod view;

// Crate-level exports - Core types
pub use action::Move;
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};

/// Alias for clarity when talking about board symbols.
pub type Mark = Player;

// Crate-level exports - Rules
pub use rules::{Evaluation, LINES, WinLine, check_winner, evaluate, is_draw, is_full};

// Crate-level exports - History
pub use history::{HistoryEntry, HistoryLog, MAX_HISTORY_LEN, Snapshot};

// Crate-level exports - Engine
pub use engine::GameEngine;
pub use view::GameView;

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, GameNotOver, LegalMove, MoveContract, SquareIsEmpty};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicHistoryInvariant, TimetravelInvariants,
};

// Crate-level exports - Configuration and errors
pub use config::{ConfigError, GameConfig};
pub use error::{GameError, InvalidMove};
