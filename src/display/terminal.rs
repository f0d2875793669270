/// Terminal back end for `Canvas`.
///
/// The logical surface is rasterised onto a grid of "pixels" two per
/// character cell: each cell prints `▀` with the upper pixel as foreground
/// and the lower one as background, in 24-bit colour.  Text goes to a
/// separate glyph layer that replaces whole cells when presented.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Colors, Print},
    QueueableCommand,
};

use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::entities::Rect;

use super::canvas::{Canvas, Point, Rgba};

const HALF_BLOCK: char = '▀';
const BLACK: Rgba = Rgba::rgb(0, 0, 0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Glyph {
    ch: char,
    color: Rgba,
}

#[derive(Clone, Debug)]
pub struct TerminalCanvas {
    cols: u16,
    rows: u16,
    /// `cols` x `rows * 2`, row-major, always opaque.
    pixels: Vec<Rgba>,
    /// `cols` x `rows`, row-major.
    glyphs: Vec<Option<Glyph>>,
}

impl TerminalCanvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        TerminalCanvas {
            cols,
            rows,
            pixels: vec![BLACK; cols as usize * rows as usize * 2],
            glyphs: vec![None; cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Rebuild for a new terminal size.  Returns `true` if anything changed.
    pub fn resize(&mut self, cols: u16, rows: u16) -> bool {
        if (cols.max(1), rows.max(1)) == (self.cols, self.rows) {
            return false;
        }
        *self = TerminalCanvas::new(cols, rows);
        true
    }

    fn pixel_w(&self) -> usize {
        self.cols as usize
    }

    fn pixel_h(&self) -> usize {
        self.rows as usize * 2
    }

    /// Logical x to fractional pixel column.
    fn to_px(&self, x: f32) -> f32 {
        x * self.pixel_w() as f32 / SCREEN_WIDTH as f32
    }

    /// Logical y to fractional pixel row.
    fn to_py(&self, y: f32) -> f32 {
        y * self.pixel_h() as f32 / SCREEN_HEIGHT as f32
    }

    /// Logical centre of pixel `(px, py)`.
    fn pixel_center(&self, px: usize, py: usize) -> Point {
        (
            (px as f32 + 0.5) * SCREEN_WIDTH as f32 / self.pixel_w() as f32,
            (py as f32 + 0.5) * SCREEN_HEIGHT as f32 / self.pixel_h() as f32,
        )
    }

    /// Half-open pixel ranges covering the logical box `(left, top, right, bottom)`.
    fn pixel_span(
        &self,
        (left, top, right, bottom): (f32, f32, f32, f32),
    ) -> (usize, usize, usize, usize) {
        let px0 = self.to_px(left).floor().max(0.0) as usize;
        let py0 = self.to_py(top).floor().max(0.0) as usize;
        let px1 = (self.to_px(right).ceil().max(0.0) as usize).min(self.pixel_w());
        let py1 = (self.to_py(bottom).ceil().max(0.0) as usize).min(self.pixel_h());
        (px0, py0, px1, py1)
    }

    /// Colour of pixel `(px, py)`; two pixel rows per terminal row.
    pub fn pixel(&self, px: usize, py: usize) -> Option<Rgba> {
        if px >= self.pixel_w() || py >= self.pixel_h() {
            return None;
        }
        Some(self.pixels[py * self.pixel_w() + px])
    }

    /// Character placed by `text` in cell `(col, row)`, if any.
    pub fn glyph(&self, col: u16, row: u16) -> Option<char> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.glyphs[row as usize * self.cols as usize + col as usize].map(|g| g.ch)
    }

    /// Pixel containing logical point `(x, y)`.
    pub fn pixel_at(&self, (x, y): Point) -> Option<(usize, usize)> {
        let (px, py) = (self.to_px(x).floor(), self.to_py(y).floor());
        if px < 0.0 || py < 0.0 {
            return None;
        }
        let (px, py) = (px as usize, py as usize);
        (px < self.pixel_w() && py < self.pixel_h()).then_some((px, py))
    }

    fn blend(&mut self, px: usize, py: usize, color: Rgba) {
        let w = self.pixel_w();
        if px < w && py < self.pixel_h() {
            let dst = &mut self.pixels[py * w + px];
            *dst = color.over(*dst);
        }
    }

    /// Paint every pixel whose centre lies inside a shape.  `bounds` is the
    /// shape's logical bounding box `(left, top, right, bottom)`.  Shapes
    /// smaller than a pixel still mark the pixel under `anchor`.
    fn fill_where(
        &mut self,
        bounds: (f32, f32, f32, f32),
        anchor: Point,
        color: Rgba,
        inside: impl Fn(f32, f32) -> bool,
    ) {
        let (px0, py0, px1, py1) = self.pixel_span(bounds);

        let mut painted = false;
        for py in py0..py1 {
            for px in px0..px1 {
                let (x, y) = self.pixel_center(px, py);
                if inside(x, y) {
                    self.blend(px, py, color);
                    painted = true;
                }
            }
        }

        if !painted {
            if let Some((px, py)) = self.pixel_at(anchor) {
                self.blend(px, py, color);
            }
        }
    }

    /// Queue the whole frame on `out` and flush it.
    pub fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let w = self.pixel_w();
        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, row))?;

            let mut run = String::new();
            let mut current: Option<(Rgba, Rgba)> = None;
            for col in 0..self.cols as usize {
                let top = self.pixels[row as usize * 2 * w + col];
                let bottom = self.pixels[(row as usize * 2 + 1) * w + col];
                let (ch, fg, bg) = match self.glyphs[row as usize * w + col] {
                    Some(glyph) => (glyph.ch, glyph.color, average(top, bottom)),
                    None => (HALF_BLOCK, top, bottom),
                };

                if current != Some((fg, bg)) {
                    if !run.is_empty() {
                        out.queue(Print(&run))?;
                        run.clear();
                    }
                    out.queue(style::SetColors(Colors::new(to_color(fg), to_color(bg))))?;
                    current = Some((fg, bg));
                }
                run.push(ch);
            }
            if !run.is_empty() {
                out.queue(Print(&run))?;
            }
        }

        out.queue(style::ResetColor)?;
        out.flush()
    }
}

fn to_color(c: Rgba) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

fn average(a: Rgba, b: Rgba) -> Rgba {
    let mid = |x: u8, y: u8| ((x as u16 + y as u16) / 2) as u8;
    Rgba::rgb(mid(a.r, b.r), mid(a.g, b.g), mid(a.b, b.b))
}

/// Even-odd rule.
fn point_in_polygon(points: &[Point], (x, y): Point) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

impl Canvas for TerminalCanvas {
    fn size(&self) -> (f32, f32) {
        (SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32)
    }

    fn clear(&mut self, color: Rgba) {
        let fill = color.over(BLACK);
        self.pixels.iter_mut().for_each(|p| *p = fill);
        self.glyphs.iter_mut().for_each(|g| *g = None);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        if rect.w <= 0 || rect.h <= 0 {
            return;
        }
        let (px0, py0, px1, py1) = self.pixel_span((
            rect.left() as f32,
            rect.top() as f32,
            rect.right() as f32,
            rect.bottom() as f32,
        ));
        for py in py0..py1 {
            for px in px0..px1 {
                self.blend(px, py, color);
            }
        }
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgba) {
        if points.len() < 3 {
            return;
        }
        let mut bounds = (f32::MAX, f32::MAX, f32::MIN, f32::MIN);
        let mut sum = (0.0, 0.0);
        for &(x, y) in points {
            bounds.0 = bounds.0.min(x);
            bounds.1 = bounds.1.min(y);
            bounds.2 = bounds.2.max(x);
            bounds.3 = bounds.3.max(y);
            sum.0 += x;
            sum.1 += y;
        }
        let n = points.len() as f32;
        let anchor = (sum.0 / n, sum.1 / n);
        self.fill_where(bounds, anchor, color, |x, y| point_in_polygon(points, (x, y)));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        if radius <= 0.0 {
            return;
        }
        let (cx, cy) = center;
        let bounds = (cx - radius, cy - radius, cx + radius, cy + radius);
        self.fill_where(bounds, center, color, |x, y| {
            (x - cx).powi(2) + (y - cy).powi(2) <= radius * radius
        });
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: Rgba) {
        if bounds.w <= 0 || bounds.h <= 0 {
            return;
        }
        let rx = bounds.w as f32 / 2.0;
        let ry = bounds.h as f32 / 2.0;
        let (cx, cy) = (bounds.x as f32 + rx, bounds.y as f32 + ry);
        let box_ = (
            bounds.left() as f32,
            bounds.top() as f32,
            bounds.right() as f32,
            bounds.bottom() as f32,
        );
        self.fill_where(box_, (cx, cy), color, |x, y| {
            ((x - cx) / rx).powi(2) + ((y - cy) / ry).powi(2) <= 1.0
        });
    }

    fn line(&mut self, from: Point, to: Point, color: Rgba) {
        let dx = self.to_px(to.0) - self.to_px(from.0);
        let dy = self.to_py(to.1) - self.to_py(from.1);
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;

        let mut last = None;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let point = (from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t);
            if let Some(pixel) = self.pixel_at(point) {
                // Each pixel once, so translucent lines blend evenly.
                if last != Some(pixel) {
                    self.blend(pixel.0, pixel.1, color);
                    last = Some(pixel);
                }
            }
        }
    }

    fn text(&mut self, (x, y): Point, text: &str, color: Rgba) {
        let col0 = self.to_px(x).floor();
        let row = (self.to_py(y) / 2.0).floor();
        if row < 0.0 || row >= self.rows as f32 {
            return;
        }
        let row = row as usize;
        let cols = self.cols as usize;
        let color = color.over(BLACK);

        for (i, ch) in text.chars().enumerate() {
            let col = col0 + i as f32;
            if col < 0.0 {
                continue;
            }
            let col = col as usize;
            if col >= cols {
                break;
            }
            self.glyphs[row * cols + col] = Some(Glyph { ch, color });
        }
    }

    fn text_extent(&self, text: &str) -> (f32, f32) {
        let cell_w = SCREEN_WIDTH as f32 / self.cols as f32;
        let cell_h = SCREEN_HEIGHT as f32 / self.rows as f32;
        (text.chars().count() as f32 * cell_w, cell_h)
    }
}
