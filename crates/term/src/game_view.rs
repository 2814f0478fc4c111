//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Cell;

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

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const GRID_DOT: Rgb = Rgb::new(90, 90, 100);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(160, 160, 170), Rgb::new(0, 0, 0));
const VALUE: CellStyle = CellStyle::new(Rgb::new(240, 240, 240), Rgb::new(0, 0, 0)).bold();

const HELP: [&str; 4] = ["←/→  move", "↓    drop", "↑    rotate", "q    quit"];

/// A lightweight terminal renderer for the board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the bordered board frame for a snapshot.
    ///
    /// Saturates at `u16::MAX` for boards wider or taller than a terminal.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        (
            to_u16(snap.cols).saturating_mul(self.cell_w).saturating_add(2),
            to_u16(snap.rows).saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        // Only cells that can land inside the viewport.
        let visible_cols = snap.cols.min(usize::from(viewport.width / self.cell_w) + 1);
        let visible_rows = snap.rows.min(usize::from(viewport.height / self.cell_h) + 1);
        for y in 0..visible_rows {
            for x in 0..visible_cols {
                let cell = snap.get(x, y).unwrap_or_default();
                self.draw_board_cell(fb, start_x, start_y, to_u16(x), to_u16(y), cell);
            }
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, snap, viewport, panel_x, start_y);

        if snap.is_over() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    /// Occupied cells use the occupant's color whether transient or locked.
    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        cell: Cell,
    ) {
        let (ch, style) = match cell.occupant() {
            Some(kind) => ('█', CellStyle::new(kind.color(), PLAYFIELD_BG)),
            None => ('·', CellStyle::new(GRID_DOT, PLAYFIELD_BG)),
        };
        fb.fill_rect(
            start_x.saturating_add(1).saturating_add(x.saturating_mul(self.cell_w)),
            start_y.saturating_add(1).saturating_add(y.saturating_mul(self.cell_h)),
            self.cell_w,
            self.cell_h,
            ch,
            style,
        );
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) {
        if x >= viewport.width {
            return;
        }

        let row = |dy: u16| y.saturating_add(dy);
        fb.put_str(x, row(1), "SCORE", LABEL);
        fb.put_str(x, row(2), &snap.score.to_string(), VALUE);

        if !snap.playable() {
            fb.put_str(x, row(4), "[Enter]", LABEL);
            fb.put_str(x, row(5), snap.start_label(), VALUE);
        }

        for (i, line) in (7u16..).zip(HELP.iter()) {
            fb.put_str(x, row(i), line, LABEL);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        text: &str,
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(120, 30, 30)).bold();
        let len = text.chars().count() as u16;
        let tx = x.saturating_add(w.saturating_sub(len) / 2);
        let ty = y.saturating_add(h / 2);
        fb.put_str(tx, ty, text, style);
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
