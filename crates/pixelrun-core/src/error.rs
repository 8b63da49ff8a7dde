//! Error type shared by the quantization and encoding pipeline.

use thiserror::Error;

use crate::color::Rgb;

/// Errors that abort an encode.
///
/// None of these are recoverable for the same input and configuration; an
/// encode either returns all of its segments or fails with one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A pixel could not be reduced to three 0-255 channels.
    #[error("Invalid pixel: {0}")]
    InvalidPixel(String),

    /// Width or height is zero.
    #[error("Empty image: width ({width}) and height ({height}) must be non-zero")]
    EmptyImage { width: u32, height: u32 },

    /// Palette failed its construction checks.
    #[error("Palette misconfigured: {0}")]
    PaletteMisconfigured(String),

    /// A single run's serialized text is longer than the segment limit.
    #[error("Run text of {length} characters does not fit in a segment of at most {limit}")]
    SegmentOverflow { length: usize, limit: usize },

    /// Nearest-color fallback is disabled and a pixel has no exact palette match.
    #[error("Color {color} at ({x}, {y}) is not in the palette")]
    UnmatchedColor { x: u32, y: u32, color: Rgb },

    /// Pixel buffer length doesn't match the declared dimensions.
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// `width * height * channels` does not fit in memory addresses.
    #[error("Image of {width}x{height} pixels is too large")]
    ImageTooLarge { width: u32, height: u32 },

    /// Image bytes could not be decoded.
    #[error("Image decoding failed: {0}")]
    Decode(String),

    /// Preview image could not be written.
    #[error("Image export failed: {0}")]
    Export(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EncodeError::EmptyImage {
            width: 0,
            height: 4,
        };
        assert_eq!(
            err.to_string(),
            "Empty image: width (0) and height (4) must be non-zero"
        );

        let err = EncodeError::UnmatchedColor {
            x: 1,
            y: 2,
            color: Rgb::new(3, 4, 5),
        };
        assert_eq!(err.to_string(), "Color (3, 4, 5) at (1, 2) is not in the palette");

        let err = EncodeError::SegmentOverflow {
            length: 4,
            limit: 3,
        };
        assert_eq!(
            err.to_string(),
            "Run text of 4 characters does not fit in a segment of at most 3"
        );
    }
}
