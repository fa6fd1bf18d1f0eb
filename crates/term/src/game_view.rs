//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Tile;

const PLAY_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen position of the board frame, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Row holding the score / game-over text.
    pub status_y: u16,
    /// Top-left corner of the border.
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

/// A lightweight terminal renderer for the snake board.
///
/// Each tile becomes a `cell_w x cell_h` block of terminal cells, the terminal
/// stand-in for the fixed pixel cell size of a windowed board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Where the board lands for a given grid and viewport.
    ///
    /// The status line sits directly above the border; the pair is centred
    /// horizontally and anchored vertically per `anchor_y`.
    pub fn layout(&self, grid_width: u32, grid_height: u32, viewport: Viewport) -> BoardLayout {
        let board_w = clamp_u16(grid_width as u64 * self.cell_w as u64);
        let board_h = clamp_u16(grid_height as u64 * self.cell_h as u64);
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);
        let total_h = frame_h.saturating_add(1);

        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let status_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        BoardLayout {
            status_y,
            frame_x,
            frame_y: status_y.saturating_add(1),
            frame_w,
            frame_h,
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(snap.grid_width, snap.grid_height, viewport);

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            ' ',
            CellStyle::new(PLAY_BG, PLAY_BG),
        );
        self.draw_border(fb, &layout, border);

        // Only tiles that start inside the viewport; a huge grid is cropped.
        let cols = visible_tiles(viewport.width, layout.frame_x.saturating_add(1), self.cell_w)
            .min(snap.grid_width);
        let rows = visible_tiles(viewport.height, layout.frame_y.saturating_add(1), self.cell_h)
            .min(snap.grid_height);
        let grid = CellStyle::new(Rgb::new(60, 60, 60), PLAY_BG).dim();
        for y in 0..rows {
            for x in 0..cols {
                self.fill_tile(fb, &layout, snap, Tile::new(x as i32, y as i32), '·', grid);
            }
        }

        // Food first so the snake covers it when they overlap.
        let food = CellStyle::new(Rgb::new(220, 40, 40), PLAY_BG);
        self.fill_tile(fb, &layout, snap, snap.food, '█', food);

        let body = CellStyle::new(Rgb::new(40, 180, 60), PLAY_BG);
        for &segment in &snap.body {
            self.fill_tile(fb, &layout, snap, segment, '█', body);
        }
        let head = CellStyle::new(Rgb::new(90, 240, 110), PLAY_BG).bold();
        self.fill_tile(fb, &layout, snap, snap.head, '█', head);

        self.draw_status(fb, &layout, snap);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &BoardLayout, style: CellStyle) {
        let (x, y, w, h) = (layout.frame_x, layout.frame_y, layout.frame_w, layout.frame_h);
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Fill one tile's block. Tiles off the grid (a head that hit the wall)
    /// are not drawn.
    fn fill_tile(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        snap: &GameSnapshot,
        tile: Tile,
        ch: char,
        style: CellStyle,
    ) {
        if !tile.in_bounds(snap.grid_width, snap.grid_height) {
            return;
        }
        let px = clamp_u16(layout.frame_x as u64 + 1 + tile.x as u64 * self.cell_w as u64);
        let py = clamp_u16(layout.frame_y as u64 + 1 + tile.y as u64 * self.cell_h as u64);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_status(&self, fb: &mut FrameBuffer, layout: &BoardLayout, snap: &GameSnapshot) {
        let fg = if snap.game_over {
            Rgb::new(230, 50, 50)
        } else {
            Rgb::new(255, 255, 255)
        };
        let style = CellStyle::new(fg, Rgb::new(0, 0, 0)).bold();
        fb.put_str(layout.frame_x + 1, layout.status_y, &snap.display_text(), style);

        if snap.game_over {
            let hint = CellStyle::new(Rgb::new(160, 160, 160), Rgb::new(0, 0, 0)).dim();
            let y = layout.frame_y.saturating_add(layout.frame_h);
            fb.put_str(layout.frame_x + 1, y, "q to quit", hint);
        }
    }
}

/// Number of `cell`-sized tiles starting at `origin` that begin before `extent`.
fn visible_tiles(extent: u16, origin: u16, cell: u16) -> u32 {
    let span = extent.saturating_sub(origin) as u32;
    let cell = cell.max(1) as u32;
    (span + cell - 1) / cell
}

fn clamp_u16(v: u64) -> u16 {
    v.min(u16::MAX as u64) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_centers_frame_and_status() {
        let view = GameView::default();
        // 4x3 grid, 2x1 cells => 8x3 board, 10x5 frame, 6 rows with status.
        let layout = view.layout(4, 3, Viewport::new(20, 10));
        assert_eq!(layout.frame_w, 10);
        assert_eq!(layout.frame_h, 5);
        assert_eq!(layout.frame_x, 5);
        assert_eq!(layout.status_y, 2);
        assert_eq!(layout.frame_y, 3);
    }

    #[test]
    fn layout_top_anchor() {
        let view = GameView::new(1, 1).with_anchor_y(AnchorY::Top);
        let layout = view.layout(4, 4, Viewport::new(6, 20));
        assert_eq!((layout.frame_x, layout.status_y, layout.frame_y), (0, 0, 1));
    }

    #[test]
    fn visible_tiles_rounds_partial_tiles_up() {
        assert_eq!(visible_tiles(40, 1, 2), 20);
        assert_eq!(visible_tiles(41, 1, 2), 20);
        assert_eq!(visible_tiles(42, 1, 2), 21);
        assert_eq!(visible_tiles(5, 9, 2), 0);
    }

    #[test]
    fn zero_cell_size_is_clamped() {
        let view = GameView::new(0, 0);
        let layout = view.layout(3, 3, Viewport::new(10, 10));
        assert_eq!((layout.frame_w, layout.frame_h), (5, 5));
    }
}
