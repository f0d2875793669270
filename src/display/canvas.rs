/// The drawing surface the scene is painted onto.
///
/// Coordinates are logical screen units (`SCREEN_WIDTH` x `SCREEN_HEIGHT`),
/// `f32` so rotated outlines keep their sub-unit precision.  Every primitive
/// alpha-blends its colour over what is already there.

use crate::entities::Rect;

pub type Point = (f32, f32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Rgba { a, ..self }
    }

    /// `self` composited over an opaque `below`.
    pub fn over(self, below: Rgba) -> Rgba {
        let a = self.a as u32;
        let mix = |top: u8, bottom: u8| ((top as u32 * a + bottom as u32 * (255 - a)) / 255) as u8;
        Rgba::rgb(mix(self.r, below.r), mix(self.g, below.g), mix(self.b, below.b))
    }
}

pub trait Canvas {
    /// Logical size of the surface.
    fn size(&self) -> (f32, f32);

    fn clear(&mut self, color: Rgba);

    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    fn fill_polygon(&mut self, points: &[Point], color: Rgba);

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba);

    /// Ellipse inscribed in `bounds`.
    fn fill_ellipse(&mut self, bounds: Rect, color: Rgba);

    fn line(&mut self, from: Point, to: Point, color: Rgba);

    /// Text with its top-left corner at `pos`.
    fn text(&mut self, pos: Point, text: &str, color: Rgba);

    /// Width and height `text` would occupy.
    fn text_extent(&self, text: &str) -> (f32, f32);
}
