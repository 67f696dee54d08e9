//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested, and it owns the board
//! geometry so mouse coordinates can be mapped back to board positions with
//! exactly the layout that was drawn.

use crate::core::{format_time, CellState, GameResult, GameState};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{grid_coords, grid_index, GameMode, GamePhase, BOARD_SIZE, GRID_DIMENSION};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Front-end state drawn on top of the game state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ViewOverlay {
    /// Board position under the keyboard cursor
    pub cursor: Option<usize>,
    /// Board position of a rejected selection, shown as an error flash
    pub flash: Option<usize>,
    /// Show the end-of-game summary box
    pub show_summary: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Placement of the board frame inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Geometry {
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
}

const BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const STYLE_NUMBER: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), BG);
const STYLE_FOUND: CellStyle = CellStyle::new(Rgb::new(100, 220, 120), BG).dim();
const STYLE_PLACEHOLDER: CellStyle = CellStyle::new(Rgb::new(90, 90, 100), BG).dim();
const STYLE_BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
const STYLE_LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
const STYLE_VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
const STYLE_HINT: CellStyle = CellStyle::new(Rgb::new(150, 150, 160), PANEL_BG).dim();
const STYLE_OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();

const MAX_CELL_W: u16 = 8;
const MAX_CELL_H: u16 = 4;

const CURSOR_BG: Rgb = Rgb::new(70, 70, 120);
const FLASH_BG: Rgb = Rgb::new(160, 40, 40);

/// A lightweight terminal renderer for the number grid.
pub struct GameView {
    /// Board cell width in terminal columns (number is right-aligned, last column is a gap).
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 4,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    /// Custom cell size, clamped to 3..=8 columns and 1..=4 rows.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(3, MAX_CELL_W),
            cell_h: cell_h.clamp(1, MAX_CELL_H),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn geometry(&self, viewport: Viewport) -> Geometry {
        let dim = GRID_DIMENSION as u16;
        let frame_w = dim.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = dim.saturating_mul(self.cell_h).saturating_add(2);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        Geometry {
            start_x,
            start_y,
            frame_w,
            frame_h,
        }
    }

    /// Board position drawn at terminal coordinate (`column`, `row`), if any.
    pub fn hit_test(&self, viewport: Viewport, column: u16, row: u16) -> Option<usize> {
        let g = self.geometry(viewport);
        let px = column.checked_sub(g.start_x.saturating_add(1))?;
        let py = row.checked_sub(g.start_y.saturating_add(1))?;
        let col = u8::try_from(px / self.cell_w).ok()?;
        let line = u8::try_from(py / self.cell_h).ok()?;
        grid_index(line, col)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        state: &GameState,
        overlay: &ViewOverlay,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let g = self.geometry(viewport);
        let inner_w = g.frame_w - 2;
        let inner_h = g.frame_h - 2;

        fb.fill_rect(
            g.start_x + 1,
            g.start_y + 1,
            inner_w,
            inner_h,
            ' ',
            STYLE_NUMBER,
        );
        fb.draw_frame(g.start_x, g.start_y, g.frame_w, g.frame_h, STYLE_BORDER);

        if state.board_layout().is_empty() {
            for position in 0..BOARD_SIZE as usize {
                self.draw_placeholder(fb, g, position);
            }
        } else {
            for cell in state.cells() {
                self.draw_cell(fb, g, &cell, overlay);
            }
        }

        self.draw_side_panel(fb, state, viewport, g);
        self.draw_help(fb, state, viewport, g);

        match state.phase() {
            GamePhase::Idle => {
                self.draw_overlay_lines(fb, g, &["Press N, then select 0-99", "in ascending order"]);
            }
            GamePhase::Ended if overlay.show_summary => {
                if let Some(result) = GameResult::from_state(state) {
                    self.draw_summary(fb, g, &result);
                }
            }
            _ => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, overlay: &ViewOverlay, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, overlay, viewport, &mut fb);
        fb
    }

    fn cell_origin(&self, g: Geometry, position: usize) -> Option<(u16, u16)> {
        let (row, col) = grid_coords(position)?;
        Some((
            g.start_x + 1 + col as u16 * self.cell_w,
            g.start_y + 1 + row as u16 * self.cell_h,
        ))
    }

    fn draw_placeholder(&self, fb: &mut FrameBuffer, g: Geometry, position: usize) {
        let Some((x, y)) = self.cell_origin(g, position) else {
            return;
        };
        fb.put_str_right(x, y, self.cell_w - 1, "·", STYLE_PLACEHOLDER);
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, g: Geometry, cell: &CellState, overlay: &ViewOverlay) {
        let Some((x, y)) = self.cell_origin(g, cell.position) else {
            return;
        };

        let mut style = if cell.is_selected {
            STYLE_FOUND
        } else {
            STYLE_NUMBER
        };
        if overlay.cursor == Some(cell.position) {
            style.bg = CURSOR_BG;
            style.bold = true;
        }
        if overlay.flash == Some(cell.position) {
            style.bg = FLASH_BG;
            style.bold = true;
            style.dim = false;
        }

        fb.fill_rect(x, y, self.cell_w - 1, self.cell_h, ' ', style);
        fb.put_str_right(x, y, self.cell_w - 1, &cell.number.to_string(), style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, state: &GameState, viewport: Viewport, g: Geometry) {
        let panel_x = g.start_x.saturating_add(g.frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        if viewport.width - panel_x < 12 {
            return;
        }

        let mut y = g.start_y;
        let mut row = |fb: &mut FrameBuffer, label: &str, value: &str| {
            fb.put_str(panel_x, y, label, STYLE_LABEL);
            fb.put_str(panel_x, y.saturating_add(1), value, STYLE_VALUE);
            y = y.saturating_add(2);
        };

        row(fb, "MODE", state.mode().label());
        if state.mode() == GameMode::TimeLimit {
            row(fb, "LIMIT", &format_time(state.time_limit_seconds() as u32));
        }
        row(fb, "TIME", &format_time(state.elapsed_seconds()));
        if let Some(left) = state.remaining_seconds() {
            row(fb, "LEFT", &format_time(left));
        }
        let last = state
            .last_selected_number()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        row(fb, "LAST", &last);
        row(
            fb,
            "FOUND",
            &format!("{}/{}", state.selected_numbers().len(), BOARD_SIZE),
        );
    }

    fn draw_help(&self, fb: &mut FrameBuffer, state: &GameState, viewport: Viewport, g: Geometry) {
        let y = g.start_y.saturating_add(g.frame_h);
        if y >= viewport.height {
            return;
        }
        fb.put_str(
            g.start_x,
            y,
            "N start  R reset  M mode  +/- limit  Q quit",
            STYLE_HINT,
        );
        if state.phase() == GamePhase::Idle {
            fb.put_str(g.start_x, y.saturating_add(1), state.mode().description(), STYLE_HINT);
        }
    }

    fn draw_summary(&self, fb: &mut FrameBuffer, g: Geometry, result: &GameResult) {
        let message = result.message();
        let lines = [result.title(), message.as_str(), "R: play again · Esc: close"];

        let box_w = lines
            .iter()
            .map(|l| l.chars().count() as u16)
            .max()
            .unwrap_or(0)
            .saturating_add(4)
            .min(fb.width());
        let box_h = lines.len() as u16 + 2;
        let center_x = g.start_x + g.frame_w / 2;
        let x = center_x
            .saturating_sub(box_w / 2)
            .min(fb.width().saturating_sub(box_w));
        let y = g.start_y + g.frame_h.saturating_sub(box_h) / 2;

        fb.fill_rect(x, y, box_w, box_h, ' ', STYLE_OVERLAY);
        fb.draw_frame(x, y, box_w, box_h, STYLE_BORDER);
        for (i, line) in lines.iter().enumerate() {
            let len = line.chars().count() as u16;
            let lx = x + box_w.saturating_sub(len) / 2;
            fb.put_str(lx, y + 1 + i as u16, line, STYLE_OVERLAY);
        }
    }

    fn draw_overlay_lines(&self, fb: &mut FrameBuffer, g: Geometry, lines: &[&str]) {
        let top = g.start_y + g.frame_h.saturating_sub(lines.len() as u16) / 2;
        for (i, line) in lines.iter().enumerate() {
            let len = line.chars().count() as u16;
            let x = g.start_x + g.frame_w.saturating_sub(len) / 2;
            fb.put_str(x, top + i as u16, line, STYLE_OVERLAY);
        }
    }
}
