//! Serializable icon configuration.
//!
//! An [`IconProfile`] holds the few values the renderer lets callers vary:
//! colors, label text and font, and the output path. Every field has a
//! default, and [`IconProfile::default`] reproduces the standard icon
//! exactly, so the binary never needs to read any configuration.
//!
//! # Example
//!
//! ```
//! use forge_icon::IconProfile;
//!
//! let profile = IconProfile::new()
//!     .with_label("QR FORGE")
//!     .with_output("build/icon.png");
//!
//! let json = profile.to_json().unwrap();
//! let restored = IconProfile::from_json(&json).unwrap();
//! assert_eq!(restored, profile);
//! ```

use std::path::PathBuf;

use palette::{Srgb, Srgba, WithAlpha};
use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};
use crate::font;
use crate::layout::FONT_SIZE;

/// Name of the file written by a default run.
pub const DEFAULT_OUTPUT: &str = "image.png";

/// Settings for one icon render.
///
/// # JSON Format
///
/// ```json
/// {
///   "background": "#f0f0f0",
///   "ink": "#000000",
///   "label": "QR FORGE",
///   "fontSize": 72.0,
///   "fontCandidates": ["/System/Library/Fonts/Helvetica.ttc"],
///   "output": "image.png"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconProfile {
    /// Canvas color, `#rrggbb`.
    pub background: String,

    /// Color of every shape and the label, `#rrggbb`.
    pub ink: String,

    pub label: String,

    /// Label font size in pixels.
    pub font_size: f32,

    /// Font files tried in order for the label.
    pub font_candidates: Vec<PathBuf>,

    /// Where the PNG is written.
    pub output: PathBuf,
}

impl Default for IconProfile {
    fn default() -> Self {
        Self {
            background: "#f0f0f0".into(),
            ink: "#000000".into(),
            label: "QR FORGE".into(),
            font_size: FONT_SIZE,
            font_candidates: font::standard_candidates(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl IconProfile {
    /// Creates the standard profile.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = color.into();
        self
    }

    pub fn with_ink(mut self, color: impl Into<String>) -> Self {
        self.ink = color.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_font_candidates(mut self, candidates: Vec<PathBuf>) -> Self {
        self.font_candidates = candidates;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Parses [`background`](Self::background) as an opaque color.
    pub fn background_color(&self) -> Result<Srgba<u8>> {
        parse_color(&self.background)
    }

    /// Parses [`ink`](Self::ink) as an opaque color.
    pub fn ink_color(&self) -> Result<Srgba<u8>> {
        parse_color(&self.ink)
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a profile, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn parse_color(hex: &str) -> Result<Srgba<u8>> {
    let rgb: Srgb<u8> = hex
        .trim()
        .parse()
        .map_err(|_| IconError::Color(hex.to_string()))?;
    Ok(rgb.with_alpha(255))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_matches_standard_icon() {
        let profile = IconProfile::default();

        assert_eq!(profile.background_color().unwrap(), Srgba::new(240, 240, 240, 255));
        assert_eq!(profile.ink_color().unwrap(), Srgba::new(0, 0, 0, 255));
        assert_eq!(profile.label, "QR FORGE");
        assert_eq!(profile.font_size, 72.0);
        assert_eq!(profile.output, PathBuf::from("image.png"));
        assert_eq!(profile.font_candidates, font::standard_candidates());
    }

    #[test]
    fn json_uses_camel_case() {
        let json = IconProfile::default().to_json_pretty().unwrap();

        assert!(json.contains("\"fontSize\""));
        assert!(json.contains("\"fontCandidates\""));
        assert!(json.contains("\"output\": \"image.png\""));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let profile = IconProfile::from_json(r##"{ "label": "ANVIL", "ink": "#112233" }"##).unwrap();

        assert_eq!(profile.label, "ANVIL");
        assert_eq!(profile.ink_color().unwrap(), Srgba::new(0x11, 0x22, 0x33, 255));
        assert_eq!(profile.background, "#f0f0f0");
        assert_eq!(profile.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn empty_profile_deserializes() {
        assert_eq!(IconProfile::from_json("{}").unwrap(), IconProfile::default());
    }

    #[test]
    fn invalid_json_is_a_profile_error() {
        assert!(matches!(
            IconProfile::from_json("{ \"fontSize\": \"big\" }"),
            Err(IconError::Profile(_))
        ));
    }

    #[test]
    fn invalid_color_is_reported() {
        let profile = IconProfile::new().with_background("#zzzzzz");
        match profile.background_color() {
            Err(IconError::Color(value)) => assert_eq!(value, "#zzzzzz"),
            other => panic!("expected color error, got {other:?}"),
        }
    }

    #[test]
    fn short_hex_is_accepted() {
        let profile = IconProfile::new().with_ink("#fff");
        assert_eq!(profile.ink_color().unwrap(), Srgba::new(255, 255, 255, 255));
    }
}
