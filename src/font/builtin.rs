//! Built-in 5x7 bitmap font.
//!
//! Used for the label when no font file can be loaded. It covers ASCII
//! letters (lowercase is drawn as uppercase), digits and a little
//! punctuation; anything else is drawn as `?`.

use palette::Srgba;

use crate::canvas::Canvas;
use crate::layout::Rect;

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
/// Glyph width plus one dot of spacing.
const ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Rows top to bottom; bit 4 is the leftmost column.
type Glyph = [u8; GLYPH_HEIGHT as usize];

#[rustfmt::skip]
const LETTERS: [Glyph; 26] = [
    [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // A
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110], // B
    [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110], // C
    [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110], // D
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111], // E
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000], // F
    [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111], // G
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // H
    [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // I
    [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100], // J
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001], // K
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111], // L
    [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001], // M
    [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001], // N
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // O
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000], // P
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101], // Q
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001], // R
    [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110], // S
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100], // T
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // U
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100], // V
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010], // W
    [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001], // X
    [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100], // Y
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111], // Z
];

#[rustfmt::skip]
const DIGITS: [Glyph; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111], // 2
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
];

const SPACE: Glyph = [0; 7];
const DASH: Glyph = [0, 0, 0, 0b11111, 0, 0, 0];
const DOT: Glyph = [0, 0, 0, 0, 0, 0b01100, 0b01100];
const BANG: Glyph = [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0, 0b00100];
const QUESTION: Glyph = [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0, 0b00100];

fn glyph(c: char) -> &'static Glyph {
    match c.to_ascii_uppercase() {
        c @ 'A'..='Z' => &LETTERS[(c as u8 - b'A') as usize],
        c @ '0'..='9' => &DIGITS[(c as u8 - b'0') as usize],
        ' ' => &SPACE,
        '-' => &DASH,
        '.' => &DOT,
        '!' => &BANG,
        _ => &QUESTION,
    }
}

/// A fixed-pitch bitmap font scaled by an integer dot size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFont {
    /// Side of one font dot in pixels.
    pub dot: u32,
}

impl BitmapFont {
    pub fn new(dot: u32) -> Self {
        Self { dot: dot.max(1) }
    }

    /// Picks a dot size so a line is roughly `font_size` pixels tall.
    pub fn for_size(font_size: f32) -> Self {
        Self::new((font_size / (GLYPH_HEIGHT + 2) as f32).round() as u32)
    }

    /// The smallest legible rendition, used for the unstyled fallback.
    pub fn unstyled() -> Self {
        Self::new(2)
    }

    /// Ink width of `text` in pixels, excluding trailing spacing.
    pub fn measure(&self, text: &str) -> u32 {
        match text.chars().count() as u32 {
            0 => 0,
            n => (n * ADVANCE - 1) * self.dot,
        }
    }

    /// Draws `text` with its top-left corner at (x, y).
    pub fn draw(&self, canvas: &mut Canvas, text: &str, x: f32, y: f32, color: Srgba<u8>) {
        let dot = self.dot as f32;

        for (i, c) in text.chars().enumerate() {
            let origin_x = x + (i as u32 * ADVANCE) as f32 * dot;
            for (row, bits) in glyph(c).iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                        continue;
                    }
                    let rect = Rect::new(
                        origin_x + col as f32 * dot,
                        y + row as f32 * dot,
                        dot,
                        dot,
                    );
                    canvas.fill_rect(rect, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Srgba<u8> = Srgba::new(240, 240, 240, 255);
    const INK: Srgba<u8> = Srgba::new(0, 0, 0, 255);

    #[test]
    fn dot_size_follows_font_size() {
        assert_eq!(BitmapFont::for_size(72.0).dot, 8);
        assert_eq!(BitmapFont::for_size(1.0).dot, 1);
        assert_eq!(BitmapFont::unstyled().dot, 2);
    }

    #[test]
    fn measure_excludes_trailing_gap() {
        let font = BitmapFont::new(8);
        assert_eq!(font.measure(""), 0);
        assert_eq!(font.measure("Q"), 40);
        assert_eq!(font.measure("QR FORGE"), (8 * 6 - 1) * 8);
    }

    #[test]
    fn lowercase_shares_uppercase_glyphs() {
        assert_eq!(glyph('q'), glyph('Q'));
        assert_eq!(glyph('~'), &QUESTION);
    }

    #[test]
    fn draw_sets_glyph_dots() {
        let mut canvas = Canvas::new(40, BG).unwrap();
        let font = BitmapFont::new(2);
        font.draw(&mut canvas, "T", 4.0, 4.0, INK);

        // Top bar of T spans the full glyph width
        assert_eq!(canvas.pixel(4, 4).unwrap().0, [0, 0, 0, 255]);
        assert_eq!(canvas.pixel(13, 5).unwrap().0, [0, 0, 0, 255]);
        // Stem is in the middle column only
        assert_eq!(canvas.pixel(8, 12).unwrap().0, [0, 0, 0, 255]);
        assert_eq!(canvas.pixel(4, 12).unwrap().0, [240, 240, 240, 255]);
        // Nothing right of the glyph
        assert_eq!(canvas.pixel(14, 4).unwrap().0, [240, 240, 240, 255]);
    }
}
