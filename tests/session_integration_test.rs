//! Scheduler + session behaviour through the facade crate.

use tui_snake::core::{GameConfig, GameState};
use tui_snake::engine::{Session, SharedSession};
use tui_snake::input::handle_key_event;
use tui_snake::types::{Direction, Tile};

use crossterm::event::{KeyCode, KeyEvent};

#[test]
fn session_runs_ticks_at_configured_period() {
    let config = GameConfig::new(20, 20)
        .with_initial_head(Tile::new(0, 10))
        .with_tick_interval_ms(50)
        .with_seed(1);
    let mut session = Session::try_new(config).unwrap();

    assert_eq!(session.on_elapsed(120), 2);
    assert_eq!(session.time_until_next_tick_ms(), 30);
    assert_eq!(session.state().head(), Tile::new(2, 10));
}

#[test]
fn session_rejects_degenerate_config() {
    assert!(Session::try_new(GameConfig::new(0, 5)).is_err());
    assert!(Session::try_new(GameConfig::default().with_tick_interval_ms(0)).is_err());
}

#[test]
fn key_presses_steer_the_session() {
    let state = GameState::from_parts(
        GameConfig::new(10, 10),
        Tile::new(5, 5),
        vec![Tile::new(4, 5)],
        Direction::Right,
        Tile::new(0, 0),
        1,
    );
    let mut session = Session::new(state);

    let left = handle_key_event(KeyEvent::from(KeyCode::Left)).unwrap();
    assert!(!session.on_action(left));

    let down = handle_key_event(KeyEvent::from(KeyCode::Char('s'))).unwrap();
    assert!(session.on_action(down));

    session.on_elapsed(100);
    assert_eq!(session.state().head(), Tile::new(5, 6));
    assert_eq!(session.state().body(), &[Tile::new(5, 5)]);
}

#[test]
fn session_stops_scheduling_after_game_over() {
    let state = GameState::from_parts(
        GameConfig::new(3, 3),
        Tile::new(1, 1),
        vec![],
        Direction::Up,
        Tile::new(2, 2),
        1,
    );
    let mut session = Session::new(state);

    assert_eq!(session.on_elapsed(1_000), 2);
    assert!(session.finished());
    let frozen = session.snapshot();
    assert_eq!(frozen.head, Tile::new(1, -1));
    assert_eq!(frozen.display_text(), "Game Over: 0");

    assert_eq!(session.on_elapsed(1_000), 0);
    assert!(!session.on_direction(Direction::Left));
    assert_eq!(session.snapshot(), frozen);
}

#[test]
fn shared_session_serializes_input_and_ticks() {
    let config = GameConfig::new(30, 30)
        .with_initial_head(Tile::new(15, 15))
        .with_seed(4);
    let shared = SharedSession::new(Session::try_new(config).unwrap());

    let handles: Vec<_> = [Direction::Down, Direction::Left, Direction::Up]
        .into_iter()
        .map(|d| {
            let s = shared.clone();
            std::thread::spawn(move || {
                s.on_direction(d);
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(shared.on_elapsed(100), 1);
    let snap = shared.snapshot();
    // Whatever order the turns landed in, the head moved exactly one tile.
    let d = (snap.head.x - 15).abs() + (snap.head.y - 15).abs();
    assert_eq!(d, 1);
}
