use tui_snake::core::{GameConfig, GameState};
use tui_snake::term::{fingerprint, RenderThrottle};

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
}

#[test]
fn render_throttle_static_renders_on_change() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(t.should_render(1, 2, true));
}

#[test]
fn render_throttle_static_throttles_when_unchanged() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(!t.should_render(10, 1, true));
    assert!(!t.should_render(249, 1, true));
    assert!(t.should_render(250, 1, true));
}

#[test]
fn render_throttle_dynamic_always_renders() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, false));
    assert!(t.should_render(1, 1, false));
    assert!(t.should_render(2, 1, false));
}

#[test]
fn render_throttle_reset_forces_next_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    t.reset();
    assert!(t.should_render(1, 1, true));
}

#[test]
fn snapshot_fingerprint_tracks_state_changes() {
    let mut state = GameState::try_new(GameConfig::default().with_seed(3)).unwrap();
    let a = fingerprint(&state.snapshot());
    assert_eq!(a, fingerprint(&state.snapshot()));
    state.tick();
    assert_ne!(a, fingerprint(&state.snapshot()));
}
