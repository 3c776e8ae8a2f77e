//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::GameEngine;
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The first recorded move belongs to the configured first player, no
/// player moves twice in a row, and the player to move is the opponent of
/// the last mover (or the first player on an empty history).
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine) -> bool {
        let first_player = *game.config().first_player();
        let movers: Vec<_> = game
            .history()
            .iter()
            .filter_map(|snapshot| snapshot.mov().map(|m| m.player()))
            .collect();

        if let Some(first) = movers.first()
            && *first != first_player
        {
            return false;
        }

        if movers.windows(2).any(|pair| pair[0] == pair[1]) {
            return false;
        }

        let expected_next = match movers.last() {
            Some(last) => last.opponent(),
            None => first_player,
        };
        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameConfig, Player, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = GameEngine::from_positions(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
            Position::BottomRight,
        ])
        .unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_holds_with_o_first() {
        let mut game = GameEngine::with_config(GameConfig::new().with_first_player(Player::O));
        game.play(0, 0).unwrap();
        game.play(1, 1).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_to_move_violates() {
        let mut game = GameEngine::from_positions(&[Position::Center]).unwrap();
        game.to_move = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
