use crate::model::{Bubble, Particle, Rgba, BACKGROUND, HUD_TEXT, STAR_INNER_RATIO, STAR_POINTS};
use crate::sim::Game;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use std::f32::consts::TAU;
use std::io::{self, Write};

// The simulation runs in logical pixels, a space where tuning values like
// bubble diameters of 50..200 make sense. Each braille subpixel covers a
// 4x4 logical patch; a cell is 2x4 subpixels, so cells span 8x16 logical
// pixels and discs stay round on 1:2 terminal glyphs.
pub const PX_PER_SUB: f32 = 4.0;
pub const CELL_PX_X: f32 = 2.0 * PX_PER_SUB;
pub const CELL_PX_Y: f32 = 4.0 * PX_PER_SUB;

/// Logical position of a clicked cell's center.
pub fn cell_to_logical(col: u16, row: u16) -> (f32, f32) {
    (
        (col as f32 + 0.5) * CELL_PX_X,
        (row as f32 + 0.5) * CELL_PX_Y,
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    pub fn blank(bg: Color) -> Self {
        Self { ch: ' ', fg: bg, bg }
    }
}

pub struct CellBuffer {
    pub w: u16,
    pub h: u16,
    pub cells: Vec<Cell>,
}

impl CellBuffer {
    pub fn new(w: u16, h: u16) -> Self {
        Self {
            w,
            h,
            cells: vec![Cell::blank(Color::Reset); (w as usize) * (h as usize)],
        }
    }
    pub fn idx(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.w as usize) + (x as usize)
    }
    pub fn set(&mut self, x: u16, y: u16, c: Cell) {
        if x < self.w && y < self.h {
            let i = self.idx(x, y);
            self.cells[i] = c;
        }
    }
    pub fn clear(&mut self, bg: Color) {
        self.cells.fill(Cell::blank(bg));
    }
}

/// RGBA canvas at braille-subpixel resolution. Cleared to transparent each
/// frame; entities blend src-over, and the cell pass mixes whatever ink
/// remains over the background color.
pub struct PixelCanvas {
    pub w: u32,
    pub h: u32,
    pub px: Vec<Rgba>,
}

impl PixelCanvas {
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            w,
            h,
            px: vec![Rgba::TRANSPARENT; (w as usize) * (h as usize)],
        }
    }

    pub fn idx(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.w as usize) + (x as usize)
    }

    pub fn clear(&mut self) {
        self.px.fill(Rgba::TRANSPARENT);
    }

    pub fn blend_over(&mut self, x: i32, y: i32, src: Rgba) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.w || y >= self.h {
            return;
        }
        let i = self.idx(x, y);
        let dst = self.px[i];

        let sa = src.a as f32 / 255.0;
        let da = dst.a as f32 / 255.0;

        let out_a = sa + da * (1.0 - sa);
        if out_a <= 1e-6 {
            self.px[i] = Rgba::TRANSPARENT;
            return;
        }

        let blend = |sc: u8, dc: u8| -> u8 {
            let sc = sc as f32 / 255.0;
            let dc = dc as f32 / 255.0;
            let out = (sc * sa + dc * da * (1.0 - sa)) / out_a;
            (out.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
        };

        self.px[i] = Rgba {
            r: blend(src.r, dst.r),
            g: blend(src.g, dst.g),
            b: blend(src.b, dst.b),
            a: (out_a.clamp(0.0, 1.0) * 255.0 + 0.5) as u8,
        };
    }
}

/* -----------------------------
   Shape rasterizers (subpixel space)
------------------------------ */

pub fn fill_disc(canvas: &mut PixelCanvas, cx: f32, cy: f32, r: f32, color: Rgba) {
    if r <= 0.0 || color.a == 0 {
        return;
    }
    let x0 = (cx - r).floor() as i32;
    let x1 = (cx + r).ceil() as i32;
    let y0 = (cy - r).floor() as i32;
    let y1 = (cy + r).ceil() as i32;
    let r2 = r * r;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= r2 {
                canvas.blend_over(x, y, color);
            }
        }
    }
}

// Alternating outer/inner vertices, inner radius at 0.4 of the outer.
fn star_vertices(cx: f32, cy: f32, r: f32) -> [(f32, f32); 2 * STAR_POINTS as usize] {
    let step = TAU / STAR_POINTS as f32;
    let half = step / 2.0;
    let inner = r * STAR_INNER_RATIO;
    let mut v = [(0.0f32, 0.0f32); 2 * STAR_POINTS as usize];
    for k in 0..STAR_POINTS as usize {
        let a = k as f32 * step;
        v[2 * k] = (cx + a.cos() * r, cy + a.sin() * r);
        v[2 * k + 1] = (cx + (a + half).cos() * inner, cy + (a + half).sin() * inner);
    }
    v
}

// Even-odd crossing test.
fn point_in_polygon(px: f32, py: f32, poly: &[(f32, f32)]) -> bool {
    let mut inside = false;
    let mut j = poly.len() - 1;
    for i in 0..poly.len() {
        let (xi, yi) = poly[i];
        let (xj, yj) = poly[j];
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

pub fn fill_star(canvas: &mut PixelCanvas, cx: f32, cy: f32, r: f32, color: Rgba) {
    if r <= 0.0 || color.a == 0 {
        return;
    }
    let poly = star_vertices(cx, cy, r);
    let x0 = (cx - r).floor() as i32;
    let x1 = (cx + r).ceil() as i32;
    let y0 = (cy - r).floor() as i32;
    let y1 = (cy + r).ceil() as i32;
    let mut inked = false;
    for y in y0..=y1 {
        for x in x0..=x1 {
            if point_in_polygon(x as f32 + 0.5, y as f32 + 0.5, &poly) {
                canvas.blend_over(x, y, color);
                inked = true;
            }
        }
    }
    // The smallest particles fall between sample points; keep them visible
    // as a single dot.
    if !inked {
        canvas.blend_over(cx.floor() as i32, cy.floor() as i32, color);
    }
}

/* -----------------------------
   Scene drawing (logical -> subpixel)
------------------------------ */

pub fn draw_scene(canvas: &mut PixelCanvas, game: &Game) {
    canvas.clear();
    // Insertion order, so the newest bubble paints on top; that is also the
    // one a click consumes.
    for b in game.bubbles() {
        draw_bubble(canvas, b);
    }
    for p in game.particles() {
        draw_particle(canvas, p);
    }
}

fn draw_bubble(canvas: &mut PixelCanvas, b: &Bubble) {
    let r = b.radius();
    fill_disc(
        canvas,
        b.x / PX_PER_SUB,
        b.y / PX_PER_SUB,
        r / PX_PER_SUB,
        b.fill,
    );
    // Star accent on the upper-right shoulder, a tenth of the diameter.
    fill_star(
        canvas,
        (b.x + r * 0.5) / PX_PER_SUB,
        (b.y - r * 0.5) / PX_PER_SUB,
        (b.diameter / 10.0) / PX_PER_SUB,
        b.star,
    );
}

fn draw_particle(canvas: &mut PixelCanvas, p: &Particle) {
    fill_star(
        canvas,
        p.pos.x / PX_PER_SUB,
        p.pos.y / PX_PER_SUB,
        p.radius / PX_PER_SUB,
        p.fill.with_alpha(p.alpha()),
    );
}

/* -----------------------------
   Braille encoding: 2x4 pixels -> U+2800..U+28FF
------------------------------ */

fn braille_bit(dx: u32, dy: u32) -> u8 {
    // Dot mapping:
    // (0,0)=1 (0,1)=2 (0,2)=4 (0,3)=64
    // (1,0)=8 (1,1)=16 (1,2)=32 (1,3)=128
    match (dx, dy) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0x00,
    }
}

const INK_THRESHOLD: u8 = 32;

pub fn canvas_to_cells(canvas: &PixelCanvas, out: &mut CellBuffer, enable_color: bool) {
    let cols = out.w as u32;
    let rows = out.h as u32;
    let bg = screen_bg(enable_color);

    for cy in 0..rows {
        for cx in 0..cols {
            let px0 = cx * 2;
            let py0 = cy * 4;

            let mut mask: u8 = 0;
            let mut sum_r: u32 = 0;
            let mut sum_g: u32 = 0;
            let mut sum_b: u32 = 0;
            let mut ink_count: u32 = 0;

            for dy in 0..4 {
                for dx in 0..2 {
                    let x = px0 + dx;
                    let y = py0 + dy;
                    if x >= canvas.w || y >= canvas.h {
                        continue;
                    }
                    let p = canvas.px[canvas.idx(x, y)];
                    if p.a >= INK_THRESHOLD {
                        mask |= braille_bit(dx, dy);
                        // Mix the translucent ink over the backdrop before
                        // averaging, so pale fills read as pale.
                        let c = BACKGROUND.lerp(p, p.a as f32 / 255.0);
                        sum_r += c.r as u32;
                        sum_g += c.g as u32;
                        sum_b += c.b as u32;
                        ink_count += 1;
                    }
                }
            }

            let ch = if mask == 0 {
                ' '
            } else {
                char::from_u32(0x2800 + mask as u32).unwrap_or(' ')
            };

            let fg = if ink_count == 0 {
                bg
            } else if enable_color {
                Color::Rgb {
                    r: (sum_r / ink_count) as u8,
                    g: (sum_g / ink_count) as u8,
                    b: (sum_b / ink_count) as u8,
                }
            } else {
                Color::White
            };

            out.set(cx as u16, cy as u16, Cell { ch, fg, bg });
        }
    }
}

fn rgb(c: Rgba) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

fn screen_bg(enable_color: bool) -> Color {
    if enable_color {
        rgb(BACKGROUND)
    } else {
        Color::Reset
    }
}

/* -----------------------------
   HUD text overlay
------------------------------ */

pub fn draw_text(buf: &mut CellBuffer, x: u16, y: u16, s: &str, fg: Color, bg: Color) {
    for (i, ch) in s.chars().enumerate() {
        let xx = x.saturating_add(i as u16);
        if xx >= buf.w || y >= buf.h {
            break;
        }
        buf.set(xx, y, Cell { ch, fg, bg });
    }
}

pub fn draw_hud(buf: &mut CellBuffer, game: &Game, paused: bool, enable_color: bool) {
    let bg = screen_bg(enable_color);
    let fg = if enable_color { rgb(HUD_TEXT) } else { Color::White };

    // Fixed label top left, score top right.
    draw_text(buf, 1, 0, "bubblepop", fg, bg);
    if paused {
        draw_text(buf, 11, 0, "[paused]", fg, bg);
    }

    let score = format!("score: {}", game.score());
    let sx = (buf.w as usize).saturating_sub(score.chars().count() + 1);
    draw_text(buf, sx as u16, 0, &score, fg, bg);

    if !game.audio_enabled() {
        let prompt = "click to enable sound";
        let px = (buf.w as usize).saturating_sub(prompt.len()) / 2;
        draw_text(buf, px as u16, buf.h / 2, prompt, fg, bg);
    }

    let hint = "q quit  p pause  r restart  h help";
    draw_text(buf, 1, buf.h.saturating_sub(1), hint, fg, bg);
}

pub fn draw_center_box(buf: &mut CellBuffer, title: &str, body: &str, enable_color: bool) {
    let bg = screen_bg(enable_color);
    let fg = if enable_color { rgb(HUD_TEXT) } else { Color::White };

    let body_lines: Vec<&str> = body.lines().collect();
    let widest = body_lines
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0);

    let bw = ((widest + 4).min(buf.w.saturating_sub(2) as usize)).max(8) as u16;
    let bh = ((body_lines.len() + 4).min(buf.h.saturating_sub(2) as usize)).max(5) as u16;
    let x0 = (buf.w.saturating_sub(bw)) / 2;
    let y0 = (buf.h.saturating_sub(bh)) / 2;

    for y in 0..bh {
        for x in 0..bw {
            let is_border = x == 0 || x == bw - 1 || y == 0 || y == bh - 1;
            let ch = match (is_border, x, y) {
                (true, 0, 0) => '┌',
                (true, x, 0) if x == bw - 1 => '┐',
                (true, 0, y) if y == bh - 1 => '└',
                (true, x, y) if x == bw - 1 && y == bh - 1 => '┘',
                (true, _, y) if y == 0 || y == bh - 1 => '─',
                (true, _, _) => '│',
                (false, _, _) => ' ',
            };
            buf.set(x0 + x, y0 + y, Cell { ch, fg, bg });
        }
    }

    draw_text(buf, x0 + 2, y0 + 1, title, fg, bg);
    for (i, line) in body_lines.iter().enumerate() {
        let y = y0 + 3 + i as u16;
        if y >= y0 + bh - 1 {
            break;
        }
        draw_text(buf, x0 + 2, y, line, fg, bg);
    }
}

/* -----------------------------
   Terminal plumbing
------------------------------ */

pub struct Terminal {
    pub out: io::Stdout,
    pub cols: u16,
    pub rows: u16,
    pub prev: CellBuffer,
    pub cur: CellBuffer,
    pub canvas: PixelCanvas,
}

impl Terminal {
    pub fn begin() -> anyhow::Result<Self> {
        let mut out = io::stdout();
        execute!(
            out,
            EnterAlternateScreen,
            cursor::Hide,
            DisableLineWrap,
            EnableMouseCapture,
            Clear(ClearType::All)
        )?;
        terminal::enable_raw_mode()?;

        let (cols, rows) = terminal::size()?;
        Ok(Self {
            out,
            cols,
            rows,
            prev: CellBuffer::new(cols, rows),
            cur: CellBuffer::new(cols, rows),
            canvas: PixelCanvas::new(cols as u32 * 2, rows as u32 * 4),
        })
    }

    pub fn resize_to(&mut self, cols: u16, rows: u16) {
        if cols == self.cols && rows == self.rows {
            return;
        }
        self.cols = cols;
        self.rows = rows;
        self.prev = CellBuffer::new(cols, rows);
        self.cur = CellBuffer::new(cols, rows);
        self.canvas = PixelCanvas::new(cols as u32 * 2, rows as u32 * 4);
    }

    pub fn resize_if_needed(&mut self) -> anyhow::Result<bool> {
        let (c, r) = terminal::size()?;
        if c == self.cols && r == self.rows {
            return Ok(false);
        }
        self.resize_to(c, r);
        Ok(true)
    }

    /// Bounds of the playfield in logical pixels.
    pub fn logical_size(&self) -> (f32, f32) {
        (
            self.cols as f32 * CELL_PX_X,
            self.rows as f32 * CELL_PX_Y,
        )
    }

    pub fn present(&mut self, diff_only: bool) -> anyhow::Result<()> {
        queue!(self.out, BeginSynchronizedUpdate)?;

        let mut last_fg = None;
        let mut last_bg = None;

        for y in 0..self.rows {
            for x in 0..self.cols {
                let i = self.cur.idx(x, y);
                let c = self.cur.cells[i];
                if diff_only && c == self.prev.cells[i] {
                    continue;
                }

                queue!(self.out, cursor::MoveTo(x, y))?;

                if last_fg != Some(c.fg) {
                    queue!(self.out, SetForegroundColor(c.fg))?;
                    last_fg = Some(c.fg);
                }
                if last_bg != Some(c.bg) {
                    queue!(self.out, SetBackgroundColor(c.bg))?;
                    last_bg = Some(c.bg);
                }

                queue!(self.out, Print(c.ch))?;
            }
        }

        queue!(self.out, ResetColor, EndSynchronizedUpdate)?;
        self.out.flush()?;
        self.prev.cells.copy_from_slice(&self.cur.cells);
        Ok(())
    }
}

/// Put the terminal back the way we found it. Called from the cleanup
/// guard so it also runs while unwinding.
pub fn restore_terminal() {
    let mut out = io::stdout();
    let _ = execute!(
        out,
        DisableMouseCapture,
        ResetColor,
        Clear(ClearType::All),
        cursor::Show,
        EnableLineWrap,
        LeaveAlternateScreen
    );
    let _ = out.flush();
    let _ = terminal::disable_raw_mode();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColorId;

    #[test]
    fn click_translation_round_trips_within_one_cell() {
        for col in [0u16, 1, 7, 39, 119] {
            for row in [0u16, 1, 12, 29] {
                let (x, y) = cell_to_logical(col, row);
                assert_eq!((x / CELL_PX_X).floor() as u16, col);
                assert_eq!((y / CELL_PX_Y).floor() as u16, row);
            }
        }
    }

    #[test]
    fn disc_fill_stays_inside_its_radius() {
        let mut canvas = PixelCanvas::new(40, 40);
        let ink = Rgba::opaque(200, 10, 10);
        fill_disc(&mut canvas, 20.0, 20.0, 8.0, ink);

        assert!(canvas.px[canvas.idx(20, 20)].a > 0, "center must be inked");
        for y in 0..40u32 {
            for x in 0..40u32 {
                if canvas.px[canvas.idx(x, y)].a == 0 {
                    continue;
                }
                let dx = x as f32 + 0.5 - 20.0;
                let dy = y as f32 + 0.5 - 20.0;
                assert!(dx * dx + dy * dy <= 8.0 * 8.0 + 1e-3);
            }
        }
    }

    #[test]
    fn star_fill_covers_center_and_respects_bbox() {
        let mut canvas = PixelCanvas::new(40, 40);
        let ink = Rgba::opaque(10, 200, 10);
        fill_star(&mut canvas, 20.0, 20.0, 6.0, ink);

        assert!(canvas.px[canvas.idx(20, 20)].a > 0, "kernel must be inked");
        for y in 0..40u32 {
            for x in 0..40u32 {
                if canvas.px[canvas.idx(x, y)].a == 0 {
                    continue;
                }
                let dx = (x as f32 + 0.5 - 20.0).abs();
                let dy = (y as f32 + 0.5 - 20.0).abs();
                assert!(dx <= 7.0 && dy <= 7.0);
            }
        }
    }

    #[test]
    fn tiny_star_still_leaves_a_dot() {
        let mut canvas = PixelCanvas::new(8, 8);
        fill_star(&mut canvas, 4.2, 4.2, 0.3, Rgba::opaque(1, 2, 3));
        let total: u32 = canvas.px.iter().map(|p| p.a as u32).sum();
        assert!(total > 0);
    }

    #[test]
    fn blend_over_replaces_with_opaque_and_skips_transparent() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.blend_over(1, 1, Rgba::opaque(10, 20, 30));
        assert_eq!(canvas.px[canvas.idx(1, 1)], Rgba::opaque(10, 20, 30));

        canvas.blend_over(1, 1, Rgba::TRANSPARENT);
        assert_eq!(canvas.px[canvas.idx(1, 1)], Rgba::opaque(10, 20, 30));

        // off-canvas writes are dropped, not panicked on
        canvas.blend_over(-1, 0, Rgba::opaque(1, 1, 1));
        canvas.blend_over(0, 99, Rgba::opaque(1, 1, 1));
    }

    #[test]
    fn translucent_ink_mixes_toward_the_source() {
        let mut canvas = PixelCanvas::new(2, 2);
        canvas.blend_over(0, 0, Rgba::opaque(0, 0, 0));
        canvas.blend_over(0, 0, Rgba::opaque(255, 255, 255).with_alpha(128));
        let p = canvas.px[0];
        assert!(p.r > 100 && p.r < 160, "half-mix expected, got {}", p.r);
        assert_eq!(p.a, 255);
    }

    #[test]
    fn one_pixel_becomes_dot_one() {
        let mut canvas = PixelCanvas::new(2, 4);
        canvas.blend_over(0, 0, Rgba::opaque(10, 20, 30));
        let mut buf = CellBuffer::new(1, 1);
        canvas_to_cells(&canvas, &mut buf, true);
        assert_eq!(buf.cells[0].ch, char::from_u32(0x2801).unwrap());
        // a lone opaque pixel keeps its own color
        assert_eq!(
            buf.cells[0].fg,
            Color::Rgb {
                r: 10,
                g: 20,
                b: 30
            }
        );
    }

    #[test]
    fn empty_cells_stay_blank_spaces() {
        let canvas = PixelCanvas::new(4, 8);
        let mut buf = CellBuffer::new(2, 2);
        canvas_to_cells(&canvas, &mut buf, true);
        for c in &buf.cells {
            assert_eq!(c.ch, ' ');
        }
    }

    #[test]
    fn faint_ink_is_left_out_of_the_mask() {
        let mut canvas = PixelCanvas::new(2, 4);
        canvas.blend_over(0, 0, Rgba::opaque(9, 9, 9).with_alpha(INK_THRESHOLD - 1));
        let mut buf = CellBuffer::new(1, 1);
        canvas_to_cells(&canvas, &mut buf, true);
        assert_eq!(buf.cells[0].ch, ' ');
    }

    #[test]
    fn text_clips_at_the_right_edge() {
        let mut buf = CellBuffer::new(5, 2);
        draw_text(&mut buf, 3, 0, "abcdef", Color::White, Color::Reset);
        assert_eq!(buf.cells[buf.idx(3, 0)].ch, 'a');
        assert_eq!(buf.cells[buf.idx(4, 0)].ch, 'b');
        // nothing wraps onto the next row
        assert_eq!(buf.cells[buf.idx(0, 1)].ch, ' ');
    }

    fn row_string(buf: &CellBuffer, y: u16) -> String {
        (0..buf.w).map(|x| buf.cells[buf.idx(x, y)].ch).collect()
    }

    #[test]
    fn hud_shows_label_score_and_prompt_until_audio_is_on() {
        let mut game = Game::new(640.0, 384.0, 5);
        let mut buf = CellBuffer::new(80, 24);

        draw_hud(&mut buf, &game, false, true);
        let top = row_string(&buf, 0);
        assert!(top.contains("bubblepop"));
        assert!(top.trim_end().ends_with("score: 0"));
        assert!(row_string(&buf, 12).contains("click to enable sound"));
        assert!(row_string(&buf, 23).contains("q quit"));

        game.handle_click(-100.0, -100.0);
        buf.clear(Color::Reset);
        draw_hud(&mut buf, &game, false, true);
        assert!(!row_string(&buf, 12).contains("click to enable sound"));
    }

    #[test]
    fn hud_marks_paused_runs() {
        let game = Game::new(640.0, 384.0, 5);
        let mut buf = CellBuffer::new(60, 20);
        draw_hud(&mut buf, &game, true, true);
        assert!(row_string(&buf, 0).contains("[paused]"));
    }

    #[test]
    fn scene_draw_puts_ink_where_the_bubbles_are() {
        let mut game = Game::new(640.0, 384.0, 11);
        // pull one bubble into view
        for _ in 0..400 {
            game.tick();
            if game
                .bubbles()
                .iter()
                .any(|b| b.y > 100.0 && b.y < 300.0 && b.x > 100.0 && b.x < 500.0)
            {
                break;
            }
        }
        let mut canvas = PixelCanvas::new(160, 96);
        draw_scene(&mut canvas, &game);
        let inked = canvas.px.iter().filter(|p| p.a > 0).count();
        assert!(inked > 0, "an on-screen field must leave ink");

        let b = game
            .bubbles()
            .iter()
            .find(|b| b.y > 100.0 && b.y < 300.0 && b.x > 100.0 && b.x < 500.0)
            .expect("a bubble should be in view by now");
        let cx = (b.x / PX_PER_SUB) as u32;
        let cy = (b.y / PX_PER_SUB) as u32;
        if cx < canvas.w && cy < canvas.h {
            assert!(canvas.px[canvas.idx(cx, cy)].a > 0);
        }
    }

    #[test]
    fn center_box_draws_border_and_title() {
        let mut buf = CellBuffer::new(40, 12);
        draw_center_box(&mut buf, "how to play", "pop the pink ones", true);
        let all: String = (0..buf.h).map(|y| row_string(&buf, y)).collect();
        assert!(all.contains('┌') && all.contains('┘'));
        assert!(all.contains("how to play"));
        assert!(all.contains("pop the pink ones"));
    }

    #[test]
    fn color_identities_round_trip_through_rgb_helper() {
        let c = rgb(ColorId::Blossom.rgb());
        assert_eq!(
            c,
            Color::Rgb {
                r: 0xff,
                g: 0xc2,
                b: 0xd1
            }
        );
    }
}
