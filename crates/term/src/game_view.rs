//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{digit_count, CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, BOARD_SIZE};

const BOARD_BG: Rgb = Rgb::hex(0xbbada0);
const EMPTY_BG: Rgb = Rgb::hex(0xcdc1b4);
const DARK_TEXT: Rgb = Rgb::hex(0x776e65);
const LIGHT_TEXT: Rgb = Rgb::hex(0xf9f6f2);
const SCREEN_BG: Rgb = Rgb::hex(0xfaf8ef);

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

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    /// Spacing between tiles (and between tiles and the frame).
    gap: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square and fits five digits.
        Self {
            tile_w: 7,
            tile_h: 3,
            gap: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16, gap: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            gap,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board, in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        let n = BOARD_SIZE as u16;
        let inner_w = n * self.tile_w + (n + 1) * self.gap;
        let inner_h = n * self.tile_h + (n + 1) * self.gap;
        (inner_w + 2, inner_h + 2)
    }

    /// Top-left terminal cell of the tile at (row, col), given the frame origin.
    pub fn tile_origin(&self, start_x: u16, start_y: u16, row: usize, col: usize) -> (u16, u16) {
        let x = start_x + 1 + self.gap + (col as u16) * (self.tile_w + self.gap);
        let y = start_y + 1 + self.gap + (row as u16) * (self.tile_h + self.gap);
        (x, y)
    }

    /// Frame origin inside `viewport`.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        // Keep room for the side panel when the terminal is wide enough.
        let total_w = frame_w + PANEL_W + 2;
        let start_x = if viewport.width >= total_w {
            (viewport.width - total_w) / 2
        } else {
            viewport.width.saturating_sub(frame_w) / 2
        };
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        (start_x, start_y)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(DARK_TEXT, SCREEN_BG).into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        let board = CellStyle::new(BOARD_BG, BOARD_BG);
        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', board);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for (row, values) in snap.board.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                let highlight = snap.is_merged(row, col);
                self.draw_tile(fb, start_x, start_y, row, col, value, highlight);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::new(Rgb::hex(0x8f7a66), SCREEN_BG);

        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: usize,
        col: usize,
        value: Cell,
        highlight: bool,
    ) {
        let (px, py) = self.tile_origin(start_x, start_y, row, col);
        let mut style = tile_style(value);
        if highlight {
            style = style.bold();
        }
        fb.fill_rect(px, py, self.tile_w, self.tile_h, ' ', style);

        if value == 0 {
            return;
        }
        let digits = digit_count(value);
        let tx = px + self.tile_w.saturating_sub(digits) / 2;
        let ty = py + self.tile_h / 2;
        fb.put_u32(tx, ty, value, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_W {
            return;
        }

        let label = CellStyle::new(DARK_TEXT, SCREEN_BG).bold();
        let value = CellStyle::new(DARK_TEXT, SCREEN_BG);
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST TILE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.best_tile, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.moves, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "UNDO", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, if snap.can_undo { "ready" } else { "-" }, value);
        y = y.saturating_add(2);

        for line in [
            "arrows/hjkl  move",
            "u  undo",
            "r  restart",
            "q  quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, frame_w: u16, frame_h: u16) {
        let style = CellStyle::new(LIGHT_TEXT, Rgb::hex(0x8f7a66)).bold();
        let mid_y = start_y.saturating_add(frame_h / 2);

        for (dy, text) in [(0u16, "GAME OVER"), (1, "r to restart")] {
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w + 2) / 2);
            fb.put_char(x, mid_y + dy, ' ', style);
            fb.put_str(x + 1, mid_y + dy, text, style);
            fb.put_char(x + 1 + text_w, mid_y + dy, ' ', style);
        }
    }
}

/// Columns reserved for the side panel.
const PANEL_W: u16 = 18;

/// Background/foreground per tile value, after the classic palette.
pub fn tile_style(value: Cell) -> CellStyle {
    let (bg, fg) = match value {
        0 => (EMPTY_BG, DARK_TEXT),
        2 => (Rgb::hex(0xeee4da), DARK_TEXT),
        4 => (Rgb::hex(0xede0c8), DARK_TEXT),
        8 => (Rgb::hex(0xf2b179), LIGHT_TEXT),
        16 => (Rgb::hex(0xf59563), LIGHT_TEXT),
        32 => (Rgb::hex(0xf67c5f), LIGHT_TEXT),
        64 => (Rgb::hex(0xf65e3b), LIGHT_TEXT),
        128 => (Rgb::hex(0xedcf72), LIGHT_TEXT),
        256 => (Rgb::hex(0xedcc61), LIGHT_TEXT),
        512 => (Rgb::hex(0xedc850), LIGHT_TEXT),
        1024 => (Rgb::hex(0xedc53f), LIGHT_TEXT),
        2048 => (Rgb::hex(0xedc22e), LIGHT_TEXT),
        _ => (Rgb::hex(0x3c3a32), LIGHT_TEXT),
    };
    CellStyle::new(fg, bg)
}
