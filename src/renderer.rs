//! The icon renderer: canvas setup, layer pipeline and PNG export.

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::canvas::Canvas;
use crate::error::{IconError, Result};
use crate::layer::{LabelPlacement, LayerPipeline, RenderContext};
use crate::layout::IconLayout;
use crate::profile::IconProfile;

/// Fails unless `format` can be encoded by this build of `image`.
pub fn ensure_encoder(format: ImageFormat) -> Result<()> {
    if format.writing_enabled() {
        Ok(())
    } else {
        Err(IconError::MissingEncoder { format })
    }
}

/// A finished, not yet exported icon.
pub struct RenderedIcon {
    pub canvas: Canvas,
    /// How the label was drawn.
    pub label: Option<LabelPlacement>,
}

impl RenderedIcon {
    pub fn to_rgba_image(&self) -> RgbaImage {
        self.canvas.to_rgba_image()
    }
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub label: Option<LabelPlacement>,
}

/// Draws the icon described by an [`IconProfile`].
///
/// # Example
///
/// ```no_run
/// use forge_icon::{IconProfile, IconRenderer};
///
/// let renderer = IconRenderer::new(IconProfile::new().with_output("icon.png"));
/// let report = renderer.export().unwrap();
/// assert_eq!((report.width, report.height), (1024, 1024));
/// ```
pub struct IconRenderer {
    profile: IconProfile,
    layout: IconLayout,
}

impl IconRenderer {
    pub fn new(profile: IconProfile) -> Self {
        Self {
            profile,
            layout: IconLayout::standard(),
        }
    }

    /// Draws every layer onto a fresh canvas.
    pub fn render(&self) -> Result<RenderedIcon> {
        let pipeline = LayerPipeline::from_profile(&self.profile)?;
        let canvas = Canvas::new(self.layout.size, self.profile.background_color()?)?;

        let mut ctx = RenderContext::new(canvas, self.layout);
        pipeline.run(&mut ctx);

        let label = ctx.get::<LabelPlacement>().cloned();
        Ok(RenderedIcon {
            canvas: ctx.into_canvas(),
            label,
        })
    }

    /// Renders and writes the icon to the profile's output path as PNG.
    ///
    /// The encoder is checked before anything is drawn, so a build without
    /// PNG support leaves no file behind.
    pub fn export(&self) -> Result<RenderReport> {
        self.export_as(&self.profile.output, ImageFormat::Png)
    }

    pub(crate) fn export_as(&self, path: &Path, format: ImageFormat) -> Result<RenderReport> {
        ensure_encoder(format)?;

        let icon = self.render()?;
        icon.canvas.save(path, format)?;
        log::info!("wrote {}x{} icon to {}", icon.canvas.width(), icon.canvas.height(), path.display());

        Ok(RenderReport {
            path: path.to_path_buf(),
            width: icon.canvas.width(),
            height: icon.canvas.height(),
            label: icon.label,
        })
    }
}
