//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Style};
use crate::theme::Palette;
use crate::types::{Cell, Direction, GameOverReason, GameStatus};

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

/// Rows the side panel occupies before the d-pad.
const PANEL_ROWS: u16 = 15;
/// Minimum panel width for the panel (and d-pad) to be drawn at all.
const PANEL_MIN_W: u16 = 12;
const BUTTON_W: u16 = 3;

/// Where everything lands for a given grid and viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// Left column of the side panel, when there is room for it.
    pub panel_x: Option<u16>,
    /// Top-left of the 3x3 d-pad, when there is room for it.
    pub pad: Option<(u16, u16)>,
}

/// A lightweight terminal renderer for the snake board.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    palette: Palette,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            palette: Palette::default(),
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            palette: Palette::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> Layout {
        let frame_w = (snap.grid_width as u16) * self.cell_w + 2;
        let frame_h = (snap.grid_height as u16) * self.cell_h + 2;
        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let frame_y = viewport.height.saturating_sub(frame_h) / 2;

        let px = frame_x.saturating_add(frame_w).saturating_add(2);
        let panel_x = (px < viewport.width && viewport.width - px >= PANEL_MIN_W).then_some(px);

        let pad = panel_x.and_then(|x| {
            let y = frame_y.saturating_add(PANEL_ROWS);
            (y.saturating_add(3) <= viewport.height).then_some((x, y))
        });

        Layout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            panel_x,
            pad,
        }
    }

    /// Hit-test the on-screen d-pad.
    pub fn button_at(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        column: u16,
        row: u16,
    ) -> Option<Direction> {
        let (px, py) = self.layout(snap, viewport).pad?;
        if column < px || row < py {
            return None;
        }
        let slot = (column - px) / BUTTON_W;
        match (row - py, slot) {
            (0, 1) => Some(Direction::Up),
            (1, 0) => Some(Direction::Left),
            (1, 2) => Some(Direction::Right),
            (2, 1) => Some(Direction::Down),
            _ => None,
        }
    }

    /// Render the current snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(self.palette.screen.glyph(' '));

        let layout = self.layout(snap, viewport);
        let p = &self.palette;

        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            p.board,
        );
        self.draw_border(fb, &layout);

        for y in 0..snap.grid_height as u16 {
            for x in 0..snap.grid_width as u16 {
                self.draw_cell(fb, &layout, x, y, '·', p.grid_dot);
            }
        }

        if let Some(food) = snap.food {
            if let Some((x, y)) = grid_pos(snap, food) {
                self.draw_cell(fb, &layout, x, y, ' ', p.board);
                let (px, py) = self.cell_origin(&layout, x, y);
                fb.put_char(px, py, '●', p.food);
            }
        }

        // Body tail-first so the head always wins.
        for &seg in snap.snake.iter().skip(1).rev() {
            if let Some((x, y)) = grid_pos(snap, seg) {
                self.draw_cell(fb, &layout, x, y, '█', p.body);
            }
        }
        if let Some((x, y)) = snap.head().and_then(|h| grid_pos(snap, h)) {
            self.draw_cell(fb, &layout, x, y, head_glyph(snap.direction), p.head);
        }

        if let Some(panel_x) = layout.panel_x {
            self.draw_side_panel(fb, snap, viewport, panel_x, layout.frame_y);
        }
        if let Some((x, y)) = layout.pad {
            self.draw_pad(fb, x, y);
        }
        self.draw_hint(fb, snap, &layout);
        self.draw_overlay(fb, snap, &layout);
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let (x, y, w, h) = (layout.frame_x, layout.frame_y, layout.frame_w, layout.frame_h);
        let style = self.palette.border;
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

    fn cell_origin(&self, layout: &Layout, x: u16, y: u16) -> (u16, u16) {
        (
            layout.frame_x + 1 + x * self.cell_w,
            layout.frame_y + 1 + y * self.cell_h,
        )
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, layout: &Layout, x: u16, y: u16, ch: char, style: Style) {
        let (px, py) = self.cell_origin(layout, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        let label = self.palette.label;
        let value = self.palette.value;
        let dim = value.dim();
        let panel_w = viewport.width - panel_x;

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "BEST", label);
        fb.put_u32(panel_x, y + 1, snap.best_score.max(snap.score), value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "LEVEL", label);
        let end = fb.put_u32(panel_x, y + 1, snap.level, value);
        if panel_w >= 16 {
            let x = fb.put_u32(end + 2, y + 1, snap.food_in_level, dim);
            let x = fb.put_str(x, y + 1, "/", dim);
            fb.put_u32(x, y + 1, snap.food_per_level, dim);
        }
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "LENGTH", label);
        fb.put_u32(panel_x, y + 1, snap.snake.len() as u32, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "SPEED", label);
        let end = fb.put_u32(panel_x, y + 1, snap.interval_ms, value);
        fb.put_str(end, y + 1, "ms", dim);
    }

    fn draw_pad(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        let style = self.palette.button;
        fb.put_str(x + BUTTON_W, y, "[▲]", style);
        fb.put_str(x, y + 1, "[◀]", style);
        fb.put_str(x + 2 * BUTTON_W, y + 1, "[▶]", style);
        fb.put_str(x + BUTTON_W, y + 2, "[▼]", style);
    }

    fn draw_hint(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let y = layout.frame_y.saturating_add(layout.frame_h);
        if y >= fb.height() {
            return;
        }
        let text = match snap.status {
            GameStatus::Idle => "ENTER start  Q quit",
            GameStatus::Running => "SPACE pause  R reset  Q quit",
            GameStatus::Paused => "SPACE/ENTER resume  R reset",
            GameStatus::Over => "ENTER play again  Q quit",
        };
        self.put_centered(fb, layout, y, text, self.palette.value.dim());
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let mid_y = layout.frame_y.saturating_add(layout.frame_h / 2);
        let style = self.palette.overlay;
        match snap.status {
            GameStatus::Running => {
                if let Some(level) = snap.level_banner {
                    let y = layout.frame_y.saturating_add(2);
                    self.put_centered_number(fb, layout, y, "LEVEL ", level, "", style);
                    self.put_centered_number(
                        fb,
                        layout,
                        y + 1,
                        "next in ",
                        snap.food_per_level,
                        " food",
                        self.palette.value,
                    );
                }
            }
            GameStatus::Idle => {
                self.put_centered(fb, layout, mid_y, "READY", style);
            }
            GameStatus::Paused => {
                self.put_centered(fb, layout, mid_y, "PAUSED", style);
            }
            GameStatus::Over => {
                self.put_centered(fb, layout, mid_y, "GAME OVER", style);
                if let Some(reason) = snap.over_reason {
                    let text = match reason {
                        GameOverReason::Wall => "hit the wall",
                        GameOverReason::SelfCollision => "bit its own tail",
                        GameOverReason::BoardFilled => "board filled",
                    };
                    self.put_centered(fb, layout, mid_y + 1, text, self.palette.value);
                }
                if snap.new_best {
                    self.put_centered(fb, layout, mid_y + 2, "NEW BEST", self.palette.label);
                }
            }
        }
    }

    fn put_centered(&self, fb: &mut FrameBuffer, layout: &Layout, y: u16, text: &str, style: Style) {
        let text_w = text.chars().count() as u16;
        let x = layout
            .frame_x
            .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }

    /// `prefix`, `value`, `suffix` centred on one row, without formatting a string.
    #[allow(clippy::too_many_arguments)]
    fn put_centered_number(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        y: u16,
        prefix: &str,
        value: u32,
        suffix: &str,
        style: Style,
    ) {
        let text_w = prefix.chars().count() as u16 + digits(value) + suffix.chars().count() as u16;
        let x = layout
            .frame_x
            .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
        let x = fb.put_str(x, y, prefix, style);
        let x = fb.put_u32(x, y, value, style);
        fb.put_str(x, y, suffix, style);
    }
}

fn digits(mut value: u32) -> u16 {
    let mut n = 1;
    while value >= 10 {
        value /= 10;
        n += 1;
    }
    n
}

fn grid_pos(snap: &GameSnapshot, cell: Cell) -> Option<(u16, u16)> {
    let in_bounds = cell.x >= 0
        && cell.y >= 0
        && cell.x < snap.grid_width as i16
        && cell.y < snap.grid_height as i16;
    in_bounds.then_some((cell.x as u16, cell.y as u16))
}

fn head_glyph(direction: Direction) -> char {
    match direction {
        Direction::Up => '▲',
        Direction::Down => '▼',
        Direction::Left => '◀',
        Direction::Right => '▶',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, GameState};

    fn snapshot() -> GameSnapshot {
        GameState::new(GameConfig::default().with_seed(7))
            .unwrap()
            .snapshot()
    }

    #[test]
    fn frame_is_centered() {
        let snap = snapshot();
        let layout = GameView::default().layout(&snap, Viewport::new(100, 30));
        assert_eq!((layout.frame_w, layout.frame_h), (42, 22));
        assert_eq!((layout.frame_x, layout.frame_y), (29, 4));
        assert_eq!(layout.panel_x, Some(73));
        assert_eq!(layout.pad, Some((73, 19)));
    }

    #[test]
    fn narrow_viewport_drops_panel_and_pad() {
        let snap = snapshot();
        let layout = GameView::default().layout(&snap, Viewport::new(44, 24));
        assert_eq!(layout.panel_x, None);
        assert_eq!(layout.pad, None);
    }

    #[test]
    fn head_shows_direction() {
        let mut game = GameState::new(GameConfig::default().with_seed(7)).unwrap();
        game.start(0);
        let snap = game.snapshot();
        let view = GameView::default();
        let viewport = Viewport::new(100, 30);
        let fb = view.render(&snap, viewport);
        let layout = view.layout(&snap, viewport);
        let head = snap.head().unwrap();
        let x = layout.frame_x + 1 + head.x as u16 * 2;
        let y = layout.frame_y + 1 + head.y as u16;
        assert_eq!(fb.get(x, y).unwrap().ch, '▶');
        assert_eq!(fb.get(x + 1, y).unwrap().ch, '▶');
    }

    #[test]
    fn pad_hit_test() {
        let snap = snapshot();
        let view = GameView::default();
        let viewport = Viewport::new(100, 30);
        let (px, py) = view.layout(&snap, viewport).pad.unwrap();
        assert_eq!(view.button_at(&snap, viewport, px + 4, py), Some(Direction::Up));
        assert_eq!(view.button_at(&snap, viewport, px, py + 1), Some(Direction::Left));
        assert_eq!(view.button_at(&snap, viewport, px + 8, py + 1), Some(Direction::Right));
        assert_eq!(view.button_at(&snap, viewport, px + 3, py + 2), Some(Direction::Down));
        assert_eq!(view.button_at(&snap, viewport, px + 4, py + 1), None);
        assert_eq!(view.button_at(&snap, viewport, 0, 0), None);
    }

    #[test]
    fn digit_count() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(u32::MAX), 10);
    }

    #[test]
    fn idle_shows_ready_overlay() {
        let snap = snapshot();
        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(100, 30));
        let layout = view.layout(&snap, Viewport::new(100, 30));
        let mid = layout.frame_y + layout.frame_h / 2;
        assert!(fb.row_text(mid).contains("READY"));
    }
}
