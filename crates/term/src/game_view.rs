//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::resources::{
    ResourceCache, LABEL_GAME_OVER, LABEL_NEW_GAME, LABEL_NEXT_PIECE, LABEL_PAUSE, LABEL_SCORE,
};
use crate::types::{GamePhase, Point, EMPTY_CELL};

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

const EMPTY_STYLE: CellStyle = CellStyle::new(Rgb::new(70, 70, 90), Rgb::new(0, 0, 30));
const BORDER_STYLE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 30));
const PREVIEW_STYLE: CellStyle = CellStyle::new(Rgb::new(170, 170, 170), Rgb::new(0, 0, 30));

/// Draws the field, the active piece, the side panel and phase overlays.
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell roughly squares up terminal glyphs.
        Self { cell_w: 2 }
    }
}

/// Top-left corner of the bordered field frame.
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        resources: &ResourceCache,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);

        let frame_w = self.field_cols(snap) + 2;
        let frame_h = snap.height as u16 + 2;
        let panel_w = 20;
        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w + panel_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
        };

        self.draw_border(fb, origin, frame_w, frame_h);

        for y in 0..snap.height {
            for x in 0..snap.width {
                let color = snap.cell(x, y);
                let (glyph, style) = match resources.tile(color) {
                    Some(tile) if color != EMPTY_CELL => (tile.glyph, tile.style),
                    _ => ('·', EMPTY_STYLE),
                };
                self.draw_cell(fb, origin, x as u16, y as u16, glyph, style);
            }
        }

        if snap.phase.shows_piece() {
            if let Some(tile) = resources.tile(snap.color) {
                for p in visible_cells(&snap.current, snap.width, snap.height) {
                    self.draw_cell(fb, origin, p.0, p.1, tile.glyph, tile.style);
                }
            }
        }

        self.draw_side_panel(fb, snap, resources, origin.x + frame_w + 2, origin.y);

        let overlay = match snap.phase {
            GamePhase::MainMenu => Some(LABEL_NEW_GAME),
            GamePhase::Paused => Some(LABEL_PAUSE),
            GamePhase::GameOver => Some(LABEL_GAME_OVER),
            GamePhase::Playing => None,
        };
        if let Some(label) = overlay.and_then(|id| resources.label(id)) {
            self.draw_overlay(fb, origin, frame_w, frame_h, &label.text, label.style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        resources: &ResourceCache,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, resources, viewport, &mut fb);
        fb
    }

    fn field_cols(&self, snap: &GameSnapshot) -> u16 {
        (snap.width as u16).saturating_mul(self.cell_w)
    }

    fn draw_border(&self, fb: &mut FrameBuffer, o: Origin, w: u16, h: u16) {
        fb.put_char(o.x, o.y, '┌', BORDER_STYLE);
        fb.put_char(o.x + w - 1, o.y, '┐', BORDER_STYLE);
        fb.put_char(o.x, o.y + h - 1, '└', BORDER_STYLE);
        fb.put_char(o.x + w - 1, o.y + h - 1, '┘', BORDER_STYLE);
        for dx in 1..w - 1 {
            fb.put_char(o.x + dx, o.y, '─', BORDER_STYLE);
            fb.put_char(o.x + dx, o.y + h - 1, '─', BORDER_STYLE);
        }
        for dy in 1..h - 1 {
            fb.put_char(o.x, o.y + dy, '│', BORDER_STYLE);
            fb.put_char(o.x + w - 1, o.y + dy, '│', BORDER_STYLE);
        }
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        o: Origin,
        x: u16,
        y: u16,
        glyph: char,
        style: CellStyle,
    ) {
        let px = o.x + 1 + x * self.cell_w;
        fb.fill_rect(px, o.y + 1 + y, self.cell_w, 1, glyph, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        resources: &ResourceCache,
        x: u16,
        y: u16,
    ) {
        if let Some(label) = resources.label(LABEL_SCORE) {
            fb.put_str(x, y, &label.text, label.style);
        }
        fb.put_str(x, y + 1, &snap.score.to_string(), CellStyle::default().bold());

        if !snap.phase.shows_piece() {
            return;
        }
        if let Some(label) = resources.label(LABEL_NEXT_PIECE) {
            fb.put_str(x, y + 3, &label.text, label.style);
        }
        let preview = Origin { x, y: y + 3 };
        for p in visible_cells(&snap.next, 2, 4) {
            self.draw_cell(fb, preview, p.0, p.1, '█', PREVIEW_STYLE);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        o: Origin,
        frame_w: u16,
        frame_h: u16,
        text: &str,
        style: CellStyle,
    ) {
        let lines: Vec<&str> = text.lines().collect();
        let top = o.y + frame_h.saturating_sub(lines.len() as u16) / 2;
        for (i, line) in lines.iter().enumerate() {
            let w = line.chars().count() as u16;
            let x = o.x + frame_w.saturating_sub(w) / 2;
            fb.put_str(x, top + i as u16, line, style);
        }
    }
}

/// Piece cells that fall inside a `width x height` grid, as unsigned coordinates.
fn visible_cells(
    cells: &[Point],
    width: usize,
    height: usize,
) -> impl Iterator<Item = (u16, u16)> + '_ {
    cells.iter().filter_map(move |p| {
        let x = usize::try_from(p.x).ok().filter(|&x| x < width)?;
        let y = usize::try_from(p.y).ok().filter(|&y| y < height)?;
        Some((x as u16, y as u16))
    })
}
