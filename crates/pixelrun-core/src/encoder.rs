//! Image to segmented run-length text.
//!
//! # Pipeline
//!
//! 1. optional dithering onto the palette
//! 2. walk pixels in [`ScanOrder`], resolving each to a symbol (exact match,
//!    then nearest color unless fallback is disabled)
//! 3. compress the symbol stream into runs
//! 4. pack the serialized runs into segments
//!
//! An encode either returns every segment or fails; nothing partial is
//! returned.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::dither::dither_to_palette;
use crate::error::EncodeError;
use crate::palette::Palette;
use crate::quantize::{PaletteMapper, Resolution};
use crate::raster::RasterImage;
use crate::rle::RunBuilder;
use crate::scan::ScanOrder;
use crate::segment::{pack_segments, DEFAULT_MAX_SEGMENT_LENGTH};

/// Encoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EncodeOptions {
    /// Pixel traversal order.
    pub scan_order: ScanOrder,
    /// Replace off-palette pixels with their nearest color. When disabled,
    /// such pixels fail the encode.
    pub fallback: bool,
    /// Maximum characters per segment.
    pub max_segment_length: usize,
    /// Floyd-Steinberg dither the image onto the palette first.
    pub dither: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            scan_order: ScanOrder::RowMajor,
            fallback: true,
            max_segment_length: DEFAULT_MAX_SEGMENT_LENGTH,
            dither: false,
        }
    }
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scan_order(mut self, scan_order: ScanOrder) -> Self {
        self.scan_order = scan_order;
        self
    }

    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_max_segment_length(mut self, max_segment_length: usize) -> Self {
        self.max_segment_length = max_segment_length;
        self
    }

    pub fn with_dither(mut self, dither: bool) -> Self {
        self.dither = dither;
        self
    }
}

/// Receives progress and substitution events during an encode.
///
/// Observers see the encode but cannot influence it. Both methods default to
/// doing nothing.
pub trait EncodeObserver {
    /// Called after each completed scan line (row, or column for
    /// [`ScanOrder::Vertical`]).
    fn line_completed(&mut self, _completed: u32, _total: u32) {}

    /// Called when a pixel had no exact match and was replaced.
    fn color_substituted(&mut self, _x: u32, _y: u32, _original: Rgb, _matched: Rgb) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl EncodeObserver for NoopObserver {}

/// Result of a successful encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// Segments in order; each at most `max_segment_length` characters.
    pub segments: Vec<String>,
    /// Symbols before compression (one per pixel).
    pub symbol_count: usize,
    /// Runs after compression.
    pub run_count: usize,
    /// Pixels that were replaced by a nearest color.
    pub substitutions: usize,
    /// As-encoded colors, present when anything was substituted or dithered.
    pub preview: Option<RasterImage>,
}

impl Encoded {
    /// All segments joined, i.e. the full serialized run stream.
    pub fn text(&self) -> String {
        self.segments.concat()
    }
}

/// Encodes images against one palette.
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'p> {
    mapper: PaletteMapper<'p>,
    options: EncodeOptions,
}

impl<'p> Encoder<'p> {
    pub fn new(palette: &'p Palette, options: EncodeOptions) -> Self {
        Self {
            mapper: PaletteMapper::new(palette),
            options,
        }
    }

    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    pub fn encode(&self, image: &RasterImage) -> Result<Encoded, EncodeError> {
        self.encode_with(image, &mut NoopObserver)
    }

    /// Encode, reporting progress and substitutions to `observer`.
    pub fn encode_with(
        &self,
        image: &RasterImage,
        observer: &mut dyn EncodeObserver,
    ) -> Result<Encoded, EncodeError> {
        if image.is_empty() {
            return Err(EncodeError::EmptyImage {
                width: image.width(),
                height: image.height(),
            });
        }

        let dithered = if self.options.dither {
            Some(dither_to_palette(image, self.mapper.palette())?)
        } else {
            None
        };
        let source = dithered.as_ref().unwrap_or(image);

        let order = self.options.scan_order;
        let lines = order.line_count(image.width(), image.height());
        let line_length = order.line_length(image.width(), image.height());

        let mut builder = RunBuilder::new();
        // Created on the first substitution. Every pixel before it matched
        // exactly, so a copy of the source is already the as-encoded image.
        let mut preview: Option<RasterImage> = None;
        let mut substitutions = 0usize;

        for line in 0..lines {
            for step in 0..line_length {
                let (x, y) = order.position(line, step);
                let pixel = source.pixel(x, y)?;

                let resolution = self
                    .mapper
                    .resolve(pixel, self.options.fallback)
                    .ok_or(EncodeError::UnmatchedColor { x, y, color: pixel })?;

                if let Resolution::Substituted(entry) = resolution {
                    substitutions += 1;
                    observer.color_substituted(x, y, pixel, entry.color);

                    if preview.is_none() {
                        preview = Some(source.to_rgb()?);
                    }
                    if let Some(preview) = preview.as_mut() {
                        preview.put_pixel(x, y, entry.color);
                    }
                }

                builder.push(resolution.symbol());
            }

            observer.line_completed(line + 1, lines);
            tracing::trace!(line = line + 1, total = lines, "scan line encoded");
        }

        let symbol_count = builder.symbol_count();
        let runs = builder.finish();
        let segments = pack_segments(&runs, self.options.max_segment_length)?;

        tracing::debug!(
            symbols = symbol_count,
            runs = runs.len(),
            segments = segments.len(),
            substitutions,
            "compressed {} symbols into {} runs",
            symbol_count,
            runs.len()
        );

        Ok(Encoded {
            segments,
            symbol_count,
            run_count: runs.len(),
            substitutions,
            // A dithered image holds only palette colors, so it is its own preview.
            preview: preview.or(dithered),
        })
    }
}

/// Encode `image` against `palette` with `options`.
pub fn encode(
    image: &RasterImage,
    palette: &Palette,
    options: EncodeOptions,
) -> Result<Encoded, EncodeError> {
    Encoder::new(palette, options).encode(image)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::rle::{compress, serialize};
    use proptest::prelude::*;

    fn image_strategy() -> impl Strategy<Value = RasterImage> {
        (1u32..=16, 1u32..=16).prop_flat_map(|(w, h)| {
            prop::collection::vec(0usize..3, (w * h) as usize).prop_map(move |idx| {
                let colors = [Rgb::BLACK, Rgb::WHITE, Rgb::new(120, 10, 10)];
                let pixels: Vec<Rgb> = idx.into_iter().map(|i| colors[i]).collect();
                RasterImage::from_colors(w, h, &pixels).unwrap()
            })
        })
    }

    fn scan_strategy() -> impl Strategy<Value = ScanOrder> {
        prop::sample::select(vec![ScanOrder::RowMajor, ScanOrder::Vertical])
    }

    proptest! {
        /// Property: segments concatenate to the serialized runs of the scan.
        #[test]
        fn prop_segments_match_scan(img in image_strategy(), order in scan_strategy(), max_len in 4usize..=40) {
            let palette = Palette::new([
                (Rgb::BLACK, 'A'),
                (Rgb::WHITE, 'B'),
                (Rgb::new(120, 10, 10), 'C'),
            ]).unwrap();
            let options = EncodeOptions::new().with_scan_order(order).with_max_segment_length(max_len);
            let encoded = encode(&img, &palette, options).unwrap();

            let stream: Vec<char> = order
                .positions(img.width(), img.height())
                .map(|(x, y)| palette.symbol_for(img.pixel(x, y).unwrap()).unwrap())
                .collect();

            prop_assert_eq!(encoded.symbol_count, stream.len());
            prop_assert_eq!(encoded.run_count, compress(&stream).len());
            prop_assert_eq!(encoded.text(), serialize(&compress(&stream)));
            for segment in &encoded.segments {
                prop_assert!(segment.chars().count() <= max_len);
            }
        }

        /// Property: encoding is deterministic.
        #[test]
        fn prop_deterministic(img in image_strategy(), order in scan_strategy()) {
            let palette = Palette::rec_room();
            let options = EncodeOptions::new().with_scan_order(order);
            let a = encode(&img, &palette, options).unwrap();
            let b = encode(&img, &palette, options).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
