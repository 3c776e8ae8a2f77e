//! Tests for loading engine configuration.

use std::io::Write;
use strictly_timetravel::{GameConfig, GameEngine, Player};
use tempfile::NamedTempFile;

#[test]
fn test_load_config_from_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "first_player = \"O\"").unwrap();
    writeln!(file, "verify_invariants = true").unwrap();

    let config = GameConfig::from_file(file.path()).expect("Valid config");
    assert_eq!(*config.first_player(), Player::O);
    assert!(*config.verify_invariants());

    let mut engine = GameEngine::with_config(config);
    assert_eq!(engine.to_move(), Player::O);
    engine.play(1, 1).unwrap();
    assert_eq!(engine.to_move(), Player::X);
}

#[test]
fn test_missing_file_reports_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    let config = GameConfig::from_file(file.path()).expect("Empty config is valid");
    assert_eq!(config, GameConfig::default());
}
