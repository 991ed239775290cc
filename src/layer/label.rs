//! Label text under the anvil.
//!
//! The label degrades instead of failing:
//!
//! 1. a font file from the candidate list, centered by its measured ink width
//! 2. the built-in bitmap font, centered by its computed width
//! 3. if the vector text cannot be laid out or measured, the built-in font at
//!    its smallest size at a fixed offset left of center

use std::path::PathBuf;

use palette::Srgba;

use super::{LayerEffect, RenderContext};
use crate::font::{self, BitmapFont, LabelFont, VectorFont};

/// Configuration for the label layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelConfig {
    pub text: String,
    /// Font size in pixels.
    pub font_size: f32,
    pub color: Srgba<u8>,
    /// Font files tried in order before the built-in font.
    pub font_candidates: Vec<PathBuf>,
}

/// Which step of the fallback chain drew the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMethod {
    /// A font file, centered by measured width.
    Vector,
    /// The built-in font, centered by computed width.
    BuiltIn,
    /// The built-in font at an approximate offset.
    Approximate,
}

/// Where and how the label was drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    pub method: LabelMethod,
    /// Left edge of the text.
    pub x: f32,
    /// Top edge of the text.
    pub y: f32,
    /// Measured width, when it was available.
    pub width: Option<f32>,
    /// Family name of the font file that was used.
    pub family: Option<String>,
}

impl LabelConfig {
    fn draw_vector(&self, font: &VectorFont, ctx: &mut RenderContext) -> crate::Result<LabelPlacement> {
        let text = font.layout(&self.text, self.font_size, self.color)?;
        let x = ctx.layout.centered_x(text.width());
        let y = ctx.layout.label_y;
        text.draw(&mut ctx.canvas, x, y);

        Ok(LabelPlacement {
            method: LabelMethod::Vector,
            x,
            y,
            width: Some(text.width()),
            family: Some(font.family().to_string()),
        })
    }

    fn draw_builtin(&self, font: BitmapFont, ctx: &mut RenderContext) -> LabelPlacement {
        let width = font.measure(&self.text) as f32;
        let x = ctx.layout.centered_x(width);
        let y = ctx.layout.label_y;
        font.draw(&mut ctx.canvas, &self.text, x, y, self.color);

        LabelPlacement {
            method: LabelMethod::BuiltIn,
            x,
            y,
            width: Some(width),
            family: None,
        }
    }

    fn draw_unstyled(&self, ctx: &mut RenderContext) -> LabelPlacement {
        let x = ctx.layout.approximate_label_x();
        let y = ctx.layout.label_y;
        BitmapFont::unstyled().draw(&mut ctx.canvas, &self.text, x, y, self.color);

        LabelPlacement {
            method: LabelMethod::Approximate,
            x,
            y,
            width: None,
            family: None,
        }
    }

    /// Draws with an already resolved font, falling back as needed.
    pub fn draw_with(&self, font: &LabelFont, ctx: &mut RenderContext) {
        let placement = match font {
            // Blank text has no ink to measure; every tier reports it the same way
            _ if self.text.trim().is_empty() => {
                self.draw_builtin(BitmapFont::for_size(self.font_size), ctx)
            }
            LabelFont::Vector(font) => match self.draw_vector(font, ctx) {
                Ok(placement) => placement,
                Err(err) => {
                    log::debug!("cannot draw label with {}: {err}; drawing unstyled", font.family());
                    self.draw_unstyled(ctx)
                }
            },
            LabelFont::BuiltIn(font) => self.draw_builtin(*font, ctx),
        };

        log::debug!(
            "label {:?} drawn at ({}, {}) via {:?}",
            self.text,
            placement.x,
            placement.y,
            placement.method
        );
        ctx.set(placement);
    }
}

impl LayerEffect for LabelConfig {
    fn draw(&self, ctx: &mut RenderContext) {
        let font = font::resolve(&self.font_candidates, self.font_size);
        self.draw_with(&font, ctx);
    }
}
