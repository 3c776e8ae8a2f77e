//! Game engine with time travel.
//!
//! The engine owns the [`HistoryLog`] and derives everything else from it:
//! the current board is the head snapshot's board, the status is
//! re-evaluated from that board, and the player to move follows from the
//! head snapshot's move.

use super::action::Move;
use super::config::GameConfig;
use super::contracts::{Contract, MoveContract};
use super::error::GameError;
use super::history::{HistoryEntry, HistoryLog, Snapshot};
use super::position::Position;
use super::rules::{WinLine, evaluate};
use super::types::{Board, GameStatus, Player};
use super::view::GameView;
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Callers own an engine and drive it with [`play`](Self::play) and
/// [`replay`](Self::replay). Both run to completion synchronously and
/// leave the engine untouched when they fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) config: GameConfig,
    pub(crate) history: HistoryLog,
    pub(crate) status: GameStatus,
    pub(crate) to_move: Player,
    pub(crate) selected: Option<Position>,
}

impl GameEngine {
    /// Creates a new game with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Creates a new game with the given configuration.
    #[instrument(skip(config), fields(first_player = %config.first_player()))]
    pub fn with_config(config: GameConfig) -> Self {
        let to_move = *config.first_player();
        Self {
            config,
            history: HistoryLog::new(),
            status: GameStatus::InProgress,
            to_move,
            selected: None,
        }
    }

    /// Builds a game by playing `positions` in order from the start.
    ///
    /// # Errors
    ///
    /// Fails with the first error any of the moves produces.
    #[instrument(skip(positions), fields(moves = positions.len()))]
    pub fn from_positions(positions: &[Position]) -> Result<Self, GameError> {
        let mut engine = Self::new();
        for pos in positions {
            engine.play(pos.row(), pos.col())?;
        }
        Ok(engine)
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Returns the status after the move.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the game is already won or drawn
    /// - [`GameError::InvalidMove`] if the square is taken or off the board
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            debug!(status = ?self.status, "Move rejected, game is over");
            return Err(GameError::GameOver);
        }

        let mov = Move::at(row, col, self.to_move)?;
        MoveContract::pre(self, &mov)?;

        let board = self.board().apply_move(&mov)?;
        let mut next = self.clone();
        next.history.append(Snapshot::after(mov, board))?;
        next.status = evaluate(next.board()).status();
        next.to_move = mov.player().opponent();
        next.selected = Some(mov.position());

        if self.verifies_postconditions() {
            MoveContract::post(self, &next)?;
        }

        *self = next;
        match self.status {
            GameStatus::InProgress => debug!(next = %self.to_move, "Move accepted"),
            GameStatus::Won(winner) => info!(%winner, "Game won"),
            GameStatus::Draw => info!("Game drawn"),
        }
        Ok(self.status)
    }

    /// Jumps back to history entry `index`, discarding every later entry.
    ///
    /// Status is re-evaluated from the target board, so jumping to a
    /// finished position puts the engine back into that finished state.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IndexOutOfRange`] if `index` is not in the history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn replay(&mut self, index: usize) -> Result<GameStatus, GameError> {
        self.history.truncate(index)?;

        let head = self.history.current();
        let mov = head.mov().copied();
        self.status = evaluate(head.board()).status();
        self.to_move = match mov {
            Some(mov) => mov.player().opponent(),
            None => *self.config.first_player(),
        };
        self.selected = mov.map(|m| m.position());

        debug!(status = ?self.status, to_move = %self.to_move, "Replayed to history entry");
        Ok(self.status)
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        self.history.current().board()
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Player whose mark goes down next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Last played cell, or the replayed snapshot's cell.
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// The completed line, if the game is won.
    pub fn winning_line(&self) -> Option<WinLine> {
        *evaluate(self.board()).line()
    }

    /// Full snapshot history.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Entries for a "jump to move" list.
    pub fn moves(&self) -> Vec<HistoryEntry> {
        self.history.entries()
    }

    /// Active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Status line for display.
    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Next player: {}", self.to_move),
            GameStatus::Won(winner) => format!("Winner: {}", winner),
            GameStatus::Draw => "Draw".to_string(),
        }
    }

    /// Whether a renderer should highlight `pos`.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.selected == Some(pos)
            || self
                .winning_line()
                .is_some_and(|line| line.contains(&pos))
    }

    /// Everything a renderer needs, in one serializable value.
    pub fn view(&self) -> GameView {
        GameView::from(self)
    }

    fn verifies_postconditions(&self) -> bool {
        cfg!(any(debug_assertions, feature = "verification")) || *self.config.verify_invariants()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_state() {
        let engine = GameEngine::new();
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.to_move(), Player::X);
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.selected(), None);
        assert_eq!(engine.winning_line(), None);
        assert_eq!(engine.status_text(), "Next player: X");
    }

    #[test]
    fn test_play_flips_turn_and_selects() {
        let mut engine = GameEngine::new();
        engine.play(1, 1).unwrap();
        assert_eq!(engine.to_move(), Player::O);
        assert_eq!(engine.selected(), Some(Position::Center));
        assert_eq!(engine.status_text(), "Next player: O");
    }

    #[test]
    fn test_failed_play_leaves_state() {
        let mut engine = GameEngine::new();
        engine.play(0, 0).unwrap();
        let before = engine.clone();

        assert!(matches!(engine.play(0, 0), Err(GameError::InvalidMove(_))));
        assert!(matches!(engine.play(3, 0), Err(GameError::InvalidMove(_))));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_failed_replay_leaves_state() {
        let mut engine = GameEngine::new();
        engine.play(0, 0).unwrap();
        let before = engine.clone();

        assert_eq!(
            engine.replay(5),
            Err(GameError::IndexOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_first_player_from_config() {
        let config = GameConfig::new().with_first_player(Player::O);
        let mut engine = GameEngine::with_config(config);
        assert_eq!(engine.to_move(), Player::O);

        engine.play(0, 0).unwrap();
        engine.play(1, 1).unwrap();
        engine.replay(0).unwrap();
        assert_eq!(engine.to_move(), Player::O);
    }

    #[test]
    fn test_highlight_covers_selection_and_line() {
        let engine = GameEngine::from_positions(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::TopRight,
        ])
        .unwrap();

        assert!(engine.is_highlighted(Position::TopLeft));
        assert!(engine.is_highlighted(Position::TopRight));
        assert!(!engine.is_highlighted(Position::Center));
    }

    #[test]
    fn test_postconditions_catch_corrupted_history() {
        let config = GameConfig::new().with_verify_invariants(true);
        let mut engine = GameEngine::with_config(config);
        engine.play(0, 0).unwrap();

        // Sneak an extra mark into the first snapshot
        let corrupted = engine.history.snapshots[1]
            .board
            .apply_move(&Move::new(Player::O, Position::BottomRight))
            .unwrap();
        engine.history.snapshots[1].board = corrupted;

        assert!(matches!(
            engine.play(1, 1),
            Err(GameError::InvariantViolation(_))
        ));
    }
}
