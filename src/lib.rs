//! forge-icon: procedural renderer for the QR Forge application icon.
//!
//! The icon is a decorative QR code (three finder patterns and a few data
//! modules) above an anvil, with a "QR FORGE" label underneath, drawn on a
//! fixed 1024x1024 canvas and written out as PNG. The QR code is purely
//! cosmetic and does not encode anything.
//!
//! # Example
//!
//! ```no_run
//! // Writes image.png in the working directory
//! let report = forge_icon::create_icon().unwrap();
//! println!("label drawn via {:?}", report.label.map(|l| l.method));
//! ```
//!
//! # Profiles
//!
//! Colors, label text, fonts and output path can be varied through an
//! [`IconProfile`]; the default profile reproduces the standard icon.
//!
//! ```
//! use forge_icon::{IconProfile, IconRenderer};
//!
//! let profile = IconProfile::new().with_font_candidates(Vec::new());
//! let icon = IconRenderer::new(profile).render().unwrap();
//! assert_eq!(icon.to_rgba_image().dimensions(), (1024, 1024));
//! ```

mod canvas;
mod error;
mod font;
mod layer;
mod layout;
mod profile;
mod renderer;

pub use canvas::Canvas;
pub use error::{IconError, Result};
pub use font::{BitmapFont, LabelFont, LabelText, VectorFont, resolve as resolve_font, standard_candidates};
pub use layer::{
    AnvilConfig, LabelConfig, LabelMethod, LabelPlacement, LayerEffect, LayerPipeline, QrConfig,
    RenderContext,
};
pub use layout::{
    AnvilLayout, CANVAS_SIZE, DATA_MODULES, FINDER_OFFSETS, FinderPattern, IconLayout, Point,
    QrLayout, Rect,
};
pub use profile::{DEFAULT_OUTPUT, IconProfile};
pub use renderer::{IconRenderer, RenderReport, RenderedIcon, ensure_encoder};

/// Renders the standard icon to `image.png` in the working directory.
///
/// Overwrites an existing file. Fails with [`IconError::MissingEncoder`],
/// before drawing anything, if this build cannot encode PNG.
pub fn create_icon() -> Result<RenderReport> {
    IconRenderer::new(IconProfile::default()).export()
}
