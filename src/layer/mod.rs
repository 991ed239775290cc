//! Drawing layers.
//!
//! The icon is painted by a fixed sequence of layers, each owning one part of
//! the picture:
//!
//! 1. [`QrConfig`] - finder patterns and data modules
//! 2. [`AnvilConfig`] - body, horn and legs
//! 3. [`LabelConfig`] - the centered label text
//!
//! Layers draw into a shared [`RenderContext`], which also carries a typed
//! property bag so a layer can report what it did (e.g. [`LabelPlacement`])
//! without the pipeline knowing its details.

pub mod anvil;
pub mod label;
pub mod qr;

pub use anvil::AnvilConfig;
pub use label::{LabelConfig, LabelMethod, LabelPlacement};
pub use qr::QrConfig;

use std::any::{Any, TypeId};
use std::collections::HashMap;

use crate::canvas::Canvas;
use crate::error::Result;
use crate::layout::IconLayout;
use crate::profile::IconProfile;

// ============================================================================
// Render Context
// ============================================================================

/// State shared by the layers during one render.
///
/// # Example
///
/// ```ignore
/// // A layer records what it drew
/// ctx.set(LabelPlacement { .. });
///
/// // The renderer reads it back afterwards
/// if let Some(label) = ctx.get::<LabelPlacement>() {
///     // ...
/// }
/// ```
pub struct RenderContext {
    /// The surface being drawn on.
    pub canvas: Canvas,

    /// Geometry every layer positions itself from.
    pub layout: IconLayout,

    /// Typed property bag for reporting back to the renderer.
    properties: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl RenderContext {
    pub fn new(canvas: Canvas, layout: IconLayout) -> Self {
        Self {
            canvas,
            layout,
            properties: HashMap::new(),
        }
    }

    /// Sets a typed property, replacing any earlier value of the same type.
    pub fn set<T: Any + Send + Sync>(&mut self, value: T) {
        self.properties.insert(TypeId::of::<T>(), Box::new(value));
    }

    /// Gets a typed property set by a layer.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.properties
            .get(&TypeId::of::<T>())
            .and_then(|b| b.downcast_ref())
    }

    /// Consumes the context, returning the finished canvas.
    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }
}

// ============================================================================
// Layer Trait
// ============================================================================

/// A configured part of the icon that knows how to draw itself.
///
/// Drawing never fails: layers degrade instead of aborting the render.
pub trait LayerEffect {
    /// Draws onto `ctx.canvas`, reading positions from `ctx.layout`.
    fn draw(&self, ctx: &mut RenderContext);
}

// ============================================================================
// LayerPipeline
// ============================================================================

/// The layers of the icon, drawn back to front.
#[derive(Debug, Clone)]
pub struct LayerPipeline {
    pub qr: QrConfig,
    pub anvil: AnvilConfig,
    pub label: LabelConfig,
}

impl LayerPipeline {
    /// Builds the layers described by `profile`.
    ///
    /// Fails only if a profile color does not parse.
    pub fn from_profile(profile: &IconProfile) -> Result<Self> {
        let ink = profile.ink_color()?;
        Ok(Self {
            qr: QrConfig::new(ink),
            anvil: AnvilConfig::new(ink),
            label: LabelConfig {
                text: profile.label.clone(),
                font_size: profile.font_size,
                color: ink,
                font_candidates: profile.font_candidates.clone(),
            },
        })
    }

    /// Draws every layer in order.
    pub fn run(&self, ctx: &mut RenderContext) {
        self.qr.draw(ctx);
        self.anvil.draw(ctx);
        self.label.draw(ctx);
    }
}
