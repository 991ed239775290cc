//! Error type shared by every rendering stage.

use image::ImageFormat;
use thiserror::Error;

/// Errors produced while rendering or exporting the icon.
///
/// Only [`IconError::MissingEncoder`] aborts a default run. Font errors are
/// recovered inside the label layer by falling back to a simpler font.
#[derive(Debug, Error)]
pub enum IconError {
    /// The image encoder for the output format is not compiled in.
    #[error(
        "no {format:?} encoder available; rebuild with the `image` crate's \
         default features enabled (e.g. `image = \"0.25\"`)"
    )]
    MissingEncoder { format: ImageFormat },

    /// No usable font face could be loaded.
    #[error("font unavailable: {0}")]
    FontUnavailable(String),

    /// Vector text laid out to nothing, so it cannot be measured.
    #[error("label text produced no measurable glyphs")]
    TextMeasure,

    /// The drawing surface could not be allocated.
    #[error("cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },

    /// A profile color is not a valid hex string.
    #[error("invalid color {0:?}: expected #rrggbb")]
    Color(String),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid profile: {0}")]
    Profile(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_encoder_message_names_the_fix() {
        let err = IconError::MissingEncoder {
            format: ImageFormat::Png,
        };
        let msg = err.to_string();
        assert!(msg.contains("Png"));
        assert!(msg.contains("default features"));
    }
}
