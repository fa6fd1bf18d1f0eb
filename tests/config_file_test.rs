use std::fs;

use tempfile::TempDir;
use tui_snake::core::{ConfigError, GameConfig, GameState};
use tui_snake::types::Tile;

#[test]
fn config_file_round_trip() {
    let config = GameConfig::new(16, 12)
        .with_initial_head(Tile::new(2, 3))
        .with_tick_interval_ms(80)
        .with_seed(99);
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snake.json");
    fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    let loaded = GameConfig::load(&path).unwrap();
    assert_eq!(loaded, config);

    let state = GameState::try_new(loaded).unwrap();
    assert_eq!(state.head(), Tile::new(2, 3));
}

#[test]
fn config_file_missing_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = GameConfig::load(dir.path().join("does-not-exist.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn config_file_with_zero_grid_fails_validation() {
    let config = GameConfig::from_json(r#"{"grid_width": 0}"#).unwrap();
    let err = GameState::try_new(config).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyGrid { width: 0, .. }));
    assert!(err.to_string().contains("0x24"));
}
