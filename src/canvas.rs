//! The RGBA drawing surface.
//!
//! [`Canvas`] wraps a `tiny_skia` pixmap and exposes the handful of filled
//! shapes the icon needs. Shapes are drawn without anti-aliasing so flat
//! geometry lands on whole pixels; text is rasterized separately by the label
//! layer straight into [`Canvas::pixmap_mut`].

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use palette::Srgba;
use resvg::tiny_skia::{self, Color, FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::error::{IconError, Result};
use crate::layout::{Point, Rect};

/// Cubic Bezier handle length for a quarter circle of radius 1.
const KAPPA: f32 = 0.552_284_8;

/// A square RGBA surface that is drawn on in place and exported once.
pub struct Canvas {
    pixmap: Pixmap,
    background: Srgba<u8>,
}

impl Canvas {
    /// Allocates a `size` x `size` surface filled with `background`.
    pub fn new(size: u32, background: Srgba<u8>) -> Result<Self> {
        let mut pixmap = Pixmap::new(size, size).ok_or(IconError::Canvas {
            width: size,
            height: size,
        })?;
        pixmap.fill(skia_color(background));
        Ok(Self { pixmap, background })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// The color the canvas was cleared to.
    pub fn background(&self) -> Srgba<u8> {
        self.background
    }

    /// Fills an axis-aligned rectangle. Degenerate rectangles draw nothing.
    pub fn fill_rect(&mut self, rect: Rect, color: Srgba<u8>) {
        // tiny-skia accepts zero-sized rects and hairlines them without AA
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let Some(rect) = tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height)
        else {
            return;
        };
        self.pixmap
            .fill_rect(rect, &paint(color), Transform::identity(), None);
    }

    /// Fills a rectangle whose corners are rounded with `radius`.
    ///
    /// The radius is clamped to half the shorter side.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Srgba<u8>) {
        let Some(path) = rounded_rect_path(rect, radius) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Fills the closed polygon through `points`. Fewer than three points draw nothing.
    pub fn fill_polygon(&mut self, points: &[Point], color: Srgba<u8>) {
        let [first, rest @ ..] = points else {
            return;
        };
        if rest.len() < 2 {
            return;
        }

        let mut pb = PathBuilder::new();
        pb.move_to(first.x, first.y);
        for p in rest {
            pb.line_to(p.x, p.y);
        }
        pb.close();

        let Some(path) = pb.finish() else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Returns the unpremultiplied color at (x, y), or `None` out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgba([c.red(), c.green(), c.blue(), c.alpha()]))
    }

    /// Direct access to the pixmap, for renderers that draw onto it themselves.
    pub fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    /// Converts the surface to an `image` buffer.
    ///
    /// `tiny_skia` stores premultiplied alpha; the buffer is straight alpha.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let width = self.pixmap.width();
        let height = self.pixmap.height();
        let mut img = RgbaImage::new(width, height);

        for (dst, src) in img.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }

        img
    }

    /// Writes the surface to `path` in `format`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>, format: ImageFormat) -> Result<()> {
        self.to_rgba_image().save_with_format(path, format)?;
        Ok(())
    }
}

/// Converts an 8-bit color to a `tiny_skia` color.
fn skia_color(color: Srgba<u8>) -> Color {
    Color::from_rgba8(color.red, color.green, color.blue, color.alpha)
}

fn paint(color: Srgba<u8>) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(skia_color(color));
    paint.anti_alias = false;
    paint
}

fn rounded_rect_path(rect: Rect, radius: f32) -> Option<tiny_skia::Path> {
    let r = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
    let k = r * KAPPA;
    let (l, t, rt, b) = (rect.x, rect.y, rect.right(), rect.bottom());

    let mut pb = PathBuilder::new();
    pb.move_to(l + r, t);
    pb.line_to(rt - r, t);
    pb.cubic_to(rt - r + k, t, rt, t + r - k, rt, t + r);
    pb.line_to(rt, b - r);
    pb.cubic_to(rt, b - r + k, rt - r + k, b, rt - r, b);
    pb.line_to(l + r, b);
    pb.cubic_to(l + r - k, b, l, b - r + k, l, b - r);
    pb.line_to(l, t + r);
    pb.cubic_to(l, t + r - k, l + r - k, t, l + r, t);
    pb.close();
    pb.finish()
}
