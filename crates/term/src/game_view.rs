//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use blockfall_core::{ActiveSnapshot, GameSnapshot, PieceMatrix};
use blockfall_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, PIECE_MATRIX_SIZE};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

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

/// A lightweight terminal view of one game frame.
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
        Self { cell_w, cell_h }
    }

    /// Render one frame into a fresh framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer of the viewport's size.
    ///
    /// Callers can reuse a framebuffer across frames; everything is
    /// overwritten, so no clearing between frames is needed beyond the
    /// `clear` done here.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.clear(CellStyle::default().cell(' '));

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        // Background for play area.
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);

        // Border.
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked board cells.
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                let cell = snap.board[y as usize][x as usize];
                if let Some(kind) = PieceKind::from_color_id(cell) {
                    self.draw_board_cell(fb, start_x, start_y, x, y, kind);
                } else {
                    self.draw_empty_cell(fb, start_x, start_y, x, y);
                }
            }
        }

        // Ghost piece. Suppressed when the piece already rests on its
        // landing row, otherwise it would overdraw the piece itself.
        if let (Some(active), Some(ghost_y)) = (snap.active, snap.ghost_y) {
            if ghost_y != active.y {
                let ghost_style = CellStyle {
                    fg: Rgb::new(140, 140, 140),
                    bg: Rgb::new(30, 30, 40),
                    bold: false,
                    dim: true,
                };
                self.for_each_piece_cell(&active.matrix, active.x, ghost_y, |x, y| {
                    self.fill_cell_rect(fb, start_x, start_y, x, y, '░', ghost_style);
                });
            }
        }

        // Active piece.
        if let Some(active) = snap.active {
            self.for_each_piece_cell(&active.matrix, active.x, active.y, |x, y| {
                self.draw_board_cell(fb, start_x, start_y, x, y, active.kind);
            });
        }

        // Side panel (score/level/lines/next/controls).
        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_game_over(fb, snap, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Visit the on-board cells a piece matrix occupies at `(px, py)`.
    fn for_each_piece_cell(
        &self,
        matrix: &PieceMatrix,
        px: i8,
        py: i8,
        mut f: impl FnMut(u16, u16),
    ) {
        for (i, row) in matrix.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                if cell.is_none() {
                    continue;
                }
                let x = px + j as i8;
                let y = py + i as i8;
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    f(x as u16, y as u16);
                }
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = CellStyle {
            fg: piece_color(kind),
            bg: Rgb::new(30, 30, 40),
            bold: true,
            dim: false,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
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
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let help = CellStyle {
            fg: Rgb::new(140, 140, 140),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: true,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.level, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.lines, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_next_preview(fb, snap.next, panel_x, y);
        y = y.saturating_add(PIECE_MATRIX_SIZE as u16 + 1);

        for line in [
            "←/→ a/d  move",
            "↑   w    rotate",
            "↓   s    drop",
            "q   esc  quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    /// Draw the lookahead piece's spawn matrix as a small 4x4 grid.
    fn draw_next_preview(&self, fb: &mut FrameBuffer, kind: PieceKind, x: u16, y: u16) {
        let matrix = blockfall_core::spawn_matrix(kind);
        let style = CellStyle {
            fg: piece_color(kind),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        for (i, row) in matrix.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                let ch = if cell.is_some() { '█' } else { ' ' };
                fb.put_char(x + j as u16, y + i as u16, ch, style);
            }
        }
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let title = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let detail = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mid_y = start_y.saturating_add(frame_h / 2).saturating_sub(1);
        self.put_centered(fb, start_x, mid_y, frame_w, "GAME OVER", title);

        let score_label = "SCORE ";
        let score_w = score_label.len() as u16 + digit_count(snap.score);
        let sx = start_x.saturating_add(frame_w.saturating_sub(score_w) / 2);
        fb.put_str(sx, mid_y + 1, score_label, detail);
        fb.put_u32(sx + score_label.len() as u16, mid_y + 1, snap.score, detail);

        self.put_centered(fb, start_x, mid_y + 2, frame_w, "press any key", detail);
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        y: u16,
        frame_w: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}

fn digit_count(v: u32) -> u16 {
    let mut n = 1;
    let mut v = v / 10;
    while v > 0 {
        n += 1;
        v /= 10;
    }
    n
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_core::spawn_matrix;

    fn count_chars(fb: &FrameBuffer, ch: char) -> usize {
        let mut n = 0;
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get(x, y).map(|c| c.ch) == Some(ch) {
                    n += 1;
                }
            }
        }
        n
    }

    fn find_str(fb: &FrameBuffer, s: &str) -> bool {
        let want: Vec<char> = s.chars().collect();
        for y in 0..fb.height() {
            'cols: for x in 0..fb.width() {
                for (i, &ch) in want.iter().enumerate() {
                    if fb.get(x + i as u16, y).map(|c| c.ch) != Some(ch) {
                        continue 'cols;
                    }
                }
                return true;
            }
        }
        false
    }

    fn active(kind: PieceKind, x: i8, y: i8) -> ActiveSnapshot {
        ActiveSnapshot {
            kind,
            matrix: spawn_matrix(kind),
            x,
            y,
        }
    }

    #[test]
    fn empty_board_draws_border_and_labels() {
        let view = GameView::default();
        let fb = view.render(&GameSnapshot::default(), Viewport::new(80, 24));

        assert_eq!(count_chars(&fb, '┌'), 1);
        assert_eq!(count_chars(&fb, '┘'), 1);
        assert!(find_str(&fb, "SCORE"));
        assert!(find_str(&fb, "LEVEL"));
        assert!(find_str(&fb, "LINES"));
        assert!(find_str(&fb, "NEXT"));
        assert!(!find_str(&fb, "GAME OVER"));
    }

    #[test]
    fn active_piece_and_distinct_ghost_both_draw() {
        let mut snap = GameSnapshot::default();
        snap.active = Some(active(PieceKind::O, 4, 0));
        snap.ghost_y = Some(17);

        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(80, 24));

        // O occupies 4 board cells, 2 columns wide each: 8 solid glyphs
        // for the active piece plus 8 shaded ones for the ghost.
        assert_eq!(count_chars(&fb, '█'), 8 + 4);
        assert_eq!(count_chars(&fb, '░'), 8);
    }

    #[test]
    fn ghost_is_suppressed_when_piece_rests() {
        let mut snap = GameSnapshot::default();
        snap.active = Some(active(PieceKind::O, 4, 17));
        snap.ghost_y = Some(17);

        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(80, 24));
        assert_eq!(count_chars(&fb, '░'), 0);
    }

    #[test]
    fn locked_cells_render_from_color_ids() {
        let mut snap = GameSnapshot::default();
        snap.board[19][0] = PieceKind::I.color_id();
        snap.board[19][9] = PieceKind::L.color_id();

        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(80, 24));
        // 2 board cells at 2 columns each, plus the 4-cell next preview.
        assert_eq!(count_chars(&fb, '█'), 4 + 4);
    }

    #[test]
    fn game_over_overlay_shows_final_score() {
        let mut snap = GameSnapshot::default();
        snap.score = 1600;
        snap.game_over = true;

        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(80, 24));
        assert!(find_str(&fb, "GAME OVER"));
        assert!(find_str(&fb, "SCORE 1600"));
        assert!(find_str(&fb, "press any key"));
    }

    #[test]
    fn tiny_viewport_renders_without_panicking() {
        let mut snap = GameSnapshot::default();
        snap.active = Some(active(PieceKind::T, 3, 0));
        snap.ghost_y = Some(18);

        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(10, 5));
        assert_eq!(fb.width(), 10);
        assert_eq!(fb.height(), 5);
    }
}
