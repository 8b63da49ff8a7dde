//! Segment text back to runs, symbols and pixels.
//!
//! The inverse of the encoder, used to verify imports and to preview what a
//! stored set of segments will paint. Image dimensions and scan order are not
//! part of the text and must be supplied by the caller.

use thiserror::Error;

use crate::color::Rgb;
use crate::palette::Palette;
use crate::raster::RasterImage;
use crate::rle::Run;
use crate::scan::ScanOrder;

/// Errors that can occur while decoding segment text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Text ends with a count that has no symbol after it.
    #[error("Count at character {offset} is not followed by a symbol")]
    DanglingCount { offset: usize },

    /// A run count of zero.
    #[error("Zero run count at character {offset}")]
    ZeroCount { offset: usize },

    /// A run count too large to represent.
    #[error("Run count at character {offset} is too large")]
    CountOverflow { offset: usize },

    /// A symbol that the palette does not define.
    #[error("Unknown symbol '{0}'")]
    UnknownSymbol(char),

    /// Runs cover a different number of pixels than the image has.
    #[error("Runs cover {actual} pixels, image has {expected}")]
    PixelCountMismatch { expected: usize, actual: usize },

    /// Width or height is zero.
    #[error("Empty image: width ({width}) and height ({height}) must be non-zero")]
    EmptyImage { width: u32, height: u32 },

    /// The pixel buffer for these dimensions cannot be allocated.
    #[error("Image of {width}x{height} pixels is too large")]
    ImageTooLarge { width: u32, height: u32 },
}

/// Parse serialized run text.
///
/// Offsets in errors are character positions of the first digit of the
/// offending count.
pub fn parse_runs(text: &str) -> Result<Vec<Run>, DecodeError> {
    let mut runs = Vec::new();
    let mut pending: Option<(usize, usize)> = None; // (count, start offset)

    for (offset, c) in text.chars().enumerate() {
        if let Some(digit) = c.to_digit(10) {
            let (count, start) = pending.unwrap_or((0, offset));
            let count = count
                .checked_mul(10)
                .and_then(|n| n.checked_add(digit as usize))
                .ok_or(DecodeError::CountOverflow { offset: start })?;
            pending = Some((count, start));
            continue;
        }

        let count = match pending.take() {
            Some((0, start)) => return Err(DecodeError::ZeroCount { offset: start }),
            Some((count, _)) => count,
            None => 1,
        };
        runs.push(Run::new(count, c));
    }

    match pending {
        Some((_, start)) => Err(DecodeError::DanglingCount { offset: start }),
        None => Ok(runs),
    }
}

/// Rebuild the quantized image from its segments.
///
/// Segments are concatenated in order before parsing, so a run split across
/// segments by hand-editing still decodes.
pub fn decode_segments<S: AsRef<str>>(
    segments: &[S],
    palette: &Palette,
    width: u32,
    height: u32,
    scan_order: ScanOrder,
) -> Result<RasterImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage { width, height });
    }

    let text: String = segments.iter().map(AsRef::as_ref).collect();
    let runs = parse_runs(&text)?;

    let expected = (width as usize)
        .checked_mul(height as usize)
        .filter(|n| n.checked_mul(3).is_some())
        .ok_or(DecodeError::ImageTooLarge { width, height })?;
    let actual = runs
        .iter()
        .try_fold(0usize, |acc, run| acc.checked_add(run.count))
        .unwrap_or(usize::MAX);
    if actual != expected {
        return Err(DecodeError::PixelCountMismatch { expected, actual });
    }

    let mut image = RasterImage::filled(width, height, Rgb::BLACK)
        .map_err(|_| DecodeError::ImageTooLarge { width, height })?;
    let mut positions = scan_order.positions(width, height);

    for run in &runs {
        let color = palette
            .color_for(run.symbol)
            .ok_or(DecodeError::UnknownSymbol(run.symbol))?;
        for (x, y) in positions.by_ref().take(run.count) {
            image.put_pixel(x, y, color);
        }
    }

    Ok(image)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
