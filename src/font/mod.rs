//! Label font loading.
//!
//! Fonts are resolved through a fallback chain: each candidate file is tried
//! in order and the first one that yields a usable face wins. If none does,
//! the label is drawn with the [`BitmapFont`] compiled into the crate.
//!
//! Vector text is laid out by `usvg` against a private font database holding
//! only the resolved face, so the result does not depend on which other fonts
//! happen to be installed.

pub mod builtin;

pub use builtin::BitmapFont;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use palette::Srgba;
use resvg::tiny_skia::Transform;
use resvg::usvg::{self, Options, Tree, fontdb};

use crate::canvas::Canvas;
use crate::error::{IconError, Result};

/// Bold sans-serif font files checked in order, across platforms.
pub fn standard_candidates() -> Vec<PathBuf> {
    [
        "/System/Library/Fonts/Helvetica.ttc",
        "/Library/Fonts/Arial Bold.ttf",
        "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
        "C:\\Windows\\Fonts\\arialbd.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

// ============================================================================
// LabelFont
// ============================================================================

/// The font chosen for the label.
pub enum LabelFont {
    /// A face loaded from a font file.
    Vector(VectorFont),
    /// The built-in bitmap font.
    BuiltIn(BitmapFont),
}

/// Walks `candidates` in order and returns the first loadable font.
///
/// Falls back to the built-in font sized for `font_size`. Never fails.
pub fn resolve(candidates: &[PathBuf], font_size: f32) -> LabelFont {
    for path in candidates {
        match VectorFont::load(path) {
            Ok(font) => {
                log::debug!("label font: {} from {}", font.family(), path.display());
                return LabelFont::Vector(font);
            }
            Err(err) => log::debug!("skipping font candidate: {err}"),
        }
    }

    log::debug!(
        "none of {} font candidates could be loaded; using built-in font",
        candidates.len()
    );
    LabelFont::BuiltIn(BitmapFont::for_size(font_size))
}

// ============================================================================
// VectorFont
// ============================================================================

/// A font family backed by its own `fontdb` database.
pub struct VectorFont {
    db: Arc<fontdb::Database>,
    family: String,
}

impl VectorFont {
    /// Loads every face in the file at `path`.
    ///
    /// Collections (`.ttc`) contribute all their faces; the bold one is picked
    /// at layout time. Files that parse to no faces are rejected.
    pub fn load(path: &Path) -> Result<Self> {
        let mut db = fontdb::Database::new();
        db.load_font_file(path)
            .map_err(|err| IconError::FontUnavailable(format!("{}: {err}", path.display())))?;

        let family = db
            .faces()
            .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
            .ok_or_else(|| {
                IconError::FontUnavailable(format!("{}: no usable font faces", path.display()))
            })?;

        Ok(Self::from_database(db, family))
    }

    /// Wraps an existing database, laying text out in `family`.
    pub fn from_database(db: fontdb::Database, family: impl Into<String>) -> Self {
        Self {
            db: Arc::new(db),
            family: family.into(),
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Lays out `text` in bold at `size` pixels and measures its ink.
    ///
    /// Fails with [`IconError::TextMeasure`] when layout yields no glyphs,
    /// e.g. when the family is missing from the database.
    pub fn layout(&self, text: &str, size: f32, color: Srgba<u8>) -> Result<LabelText> {
        let svg = label_svg(&self.family, text, size, color);

        let mut opts = Options::default();
        opts.fontdb = Arc::clone(&self.db);

        let tree = Tree::from_str(&svg, &opts)
            .map_err(|err| IconError::FontUnavailable(format!("label layout failed: {err}")))?;

        if !tree.root().has_children() {
            return Err(IconError::TextMeasure);
        }
        let bounds = tree.root().abs_bounding_box();
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return Err(IconError::TextMeasure);
        }

        Ok(LabelText { tree, bounds })
    }
}

/// Laid-out vector text with its measured ink bounds.
pub struct LabelText {
    tree: Tree,
    bounds: usvg::Rect,
}

impl LabelText {
    /// Ink width in pixels.
    pub fn width(&self) -> f32 {
        self.bounds.width()
    }

    /// Draws the text so its ink box starts at (x, top).
    pub fn draw(&self, canvas: &mut Canvas, x: f32, top: f32) {
        let transform = Transform::from_translate(x - self.bounds.x(), top - self.bounds.y());
        resvg::render(&self.tree, transform, &mut canvas.pixmap_mut().as_mut());
    }
}

fn label_svg(family: &str, text: &str, size: f32, color: Srgba<u8>) -> String {
    let width = (size * text.chars().count().max(1) as f32).ceil();
    let height = (size * 2.0).ceil();
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}"><text x="0" y="{size}" font-family="{family}" font-weight="bold" font-size="{size}" fill="#{r:02x}{g:02x}{b:02x}" fill-opacity="{opacity}">{text}</text></svg>"##,
        family = escape_xml(family),
        text = escape_xml(text),
        r = color.red,
        g = color.green,
        b = color.blue,
        opacity = color.alpha as f32 / 255.0,
    )
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
