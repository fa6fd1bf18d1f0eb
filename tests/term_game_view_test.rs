use tui_snake::core::{GameConfig, GameSnapshot, GameState};
use tui_snake::term::{AnchorY, GameView, Viewport};
use tui_snake::types::{Direction, Tile};

fn snapshot(head: Tile, body: Vec<Tile>, food: Tile) -> GameSnapshot {
    GameState::from_parts(GameConfig::new(4, 4), head, body, Direction::Right, food, 1).snapshot()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = snapshot(Tile::new(0, 0), vec![], Tile::new(3, 3));
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    // 4x4 grid with 2x1 cells => 8x4 board, 10x6 frame, below one status row.
    let fb = view.render(&snap, Viewport::new(10, 7));

    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(9, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 6).unwrap().ch, '└');
    assert_eq!(fb.get(9, 6).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_tiles_two_chars_wide() {
    let snap = snapshot(Tile::new(2, 1), vec![Tile::new(1, 1)], Tile::new(3, 3));
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(10, 7));

    // Inside border: origin (1, 2). Tile (x, y) => column 1 + 2x, row 2 + y.
    let head = fb.get(1 + 2 * 2, 2 + 1).unwrap();
    assert_eq!(head.ch, '█');
    assert!(head.style.bold);
    assert_eq!(fb.get(1 + 2 * 2 + 1, 2 + 1).unwrap().ch, '█');

    let neck = fb.get(1 + 2, 2 + 1).unwrap();
    assert_eq!(neck.ch, '█');
    assert!(!neck.style.bold);

    let food = fb.get(1 + 2 * 3, 2 + 3).unwrap();
    assert_eq!(food.ch, '█');
    assert_ne!(food.style.fg, head.style.fg);

    // Empty tile shows a grid dot.
    assert_eq!(fb.get(1, 2).unwrap().ch, '·');
}

#[test]
fn term_view_shows_score_text() {
    let snap = snapshot(Tile::new(2, 1), vec![Tile::new(1, 1), Tile::new(0, 1)], Tile::new(3, 3));
    let fb = GameView::default().render(&snap, Viewport::new(40, 20));
    assert!(fb.text().contains("Score: 2"));
    assert!(!fb.text().contains("Game Over"));
}

#[test]
fn term_view_shows_game_over_text() {
    let mut state = GameState::from_parts(
        GameConfig::new(4, 4),
        Tile::new(3, 0),
        vec![],
        Direction::Right,
        Tile::new(0, 3),
        1,
    );
    state.tick();
    let snap = state.snapshot();
    assert!(snap.game_over);

    let fb = GameView::default().render(&snap, Viewport::new(40, 20));
    let text = fb.text();
    assert!(text.contains("Game Over: 0"));
    assert!(text.contains("q to quit"));
    // The head left the grid and is not painted; only the food tile remains.
    assert_eq!(text.matches('█').count(), 2);
}

#[test]
fn term_view_centers_board_by_default() {
    let snap = snapshot(Tile::new(0, 0), vec![], Tile::new(3, 3));
    // Frame 10x6 plus status row = 7 rows; (15 - 7) / 2 = 4.
    let fb = GameView::default().render(&snap, Viewport::new(20, 15));
    assert_eq!(fb.get(5, 5).unwrap().ch, '┌');
}

#[test]
fn term_view_survives_tiny_viewport() {
    let snap = snapshot(Tile::new(0, 0), vec![], Tile::new(3, 3));
    let fb = GameView::default().render(&snap, Viewport::new(3, 2));
    assert_eq!((fb.width(), fb.height()), (3, 2));
}

#[test]
fn huge_grid_is_cropped_to_the_viewport() {
    let snap = GameState::from_parts(
        GameConfig::new(100_000, 100_000),
        Tile::new(3, 2),
        vec![Tile::new(2, 2)],
        Direction::Right,
        Tile::new(99_999, 99_999),
        1,
    )
    .snapshot();
    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(40, 12));

    // Frame is wider than the screen, so it hugs the top-left corner.
    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(1, 2).unwrap().ch, '·');
    assert_eq!(fb.get(39, 11).unwrap().ch, '·');
    assert_eq!(fb.get(1 + 2 * 3, 2 + 2).unwrap().ch, '█');
    assert_eq!(fb.row_text(0).trim_end(), " Score: 1");
}
