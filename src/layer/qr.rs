//! Decorative QR code: three finder patterns and a few data modules.
//!
//! Nothing here encodes data. The pattern only borrows the look of a QR
//! symbol, including the missing bottom-right finder.

use palette::Srgba;

use super::{LayerEffect, RenderContext};
use crate::canvas::Canvas;
use crate::layout::FinderPattern;

/// Configuration for the QR layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QrConfig {
    /// Color of the filled squares. Insets use the canvas background.
    pub ink: Srgba<u8>,
}

impl QrConfig {
    pub fn new(ink: Srgba<u8>) -> Self {
        Self { ink }
    }
}

impl LayerEffect for QrConfig {
    fn draw(&self, ctx: &mut RenderContext) {
        let qr = ctx.layout.qr;
        let background = ctx.canvas.background();

        for finder in qr.finders() {
            draw_finder(&mut ctx.canvas, &finder, self.ink, background);
        }

        for module in qr.data_modules() {
            ctx.canvas.fill_rect(module, self.ink);
        }
    }
}

/// Draws one finder pattern as three nested squares, outermost first.
pub fn draw_finder(
    canvas: &mut Canvas,
    finder: &FinderPattern,
    ink: Srgba<u8>,
    background: Srgba<u8>,
) {
    canvas.fill_rect(finder.outer, ink);
    canvas.fill_rect(finder.inset, background);
    canvas.fill_rect(finder.center, ink);
}
