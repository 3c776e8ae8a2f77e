//! Renderer-facing view of the engine state.

use super::engine::GameEngine;
use super::history::HistoryEntry;
use super::position::Position;
use super::types::{Board, GameStatus, Player};
use serde::{Deserialize, Serialize};

/// Serializable bundle of everything a renderer draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Current board.
    pub board: Board,
    /// Current status.
    pub status: GameStatus,
    /// Status line, e.g. `Next player: X`.
    pub status_text: String,
    /// Player to move next.
    pub to_move: Player,
    /// Winning cells, empty unless the game is won.
    pub winning_line: Vec<Position>,
    /// Last played or replayed cell.
    pub selected: Option<Position>,
    /// Cells the renderer should highlight.
    pub highlighted: Vec<Position>,
    /// "Jump to move" entries.
    pub moves: Vec<HistoryEntry>,
    /// Captions for the "jump to move" entries, aligned with `moves`.
    pub move_descriptions: Vec<String>,
}

impl From<&GameEngine> for GameView {
    fn from(engine: &GameEngine) -> Self {
        let moves = engine.moves();
        Self {
            board: engine.board().clone(),
            status: engine.status(),
            status_text: engine.status_text(),
            to_move: engine.to_move(),
            winning_line: engine
                .winning_line()
                .map(|line| line.to_vec())
                .unwrap_or_default(),
            selected: engine.selected(),
            highlighted: Position::ALL
                .into_iter()
                .filter(|pos| engine.is_highlighted(*pos))
                .collect(),
            move_descriptions: moves.iter().map(HistoryEntry::description).collect(),
            moves,
        }
    }
}
