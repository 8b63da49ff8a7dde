//! Pixelrun Core - palette run-length encoding for pixel art imports
//!
//! This crate turns a raster image into short lines of text that an in-game
//! printer can paint back. Every pixel is mapped to one of a fixed set of
//! marker colors, each color has a one-character symbol, and repeated
//! symbols are run-length encoded (`"3AB"` is three `A` then one `B`). The
//! result is split into segments that fit a text-entry field.
//!
//! # Modules
//!
//! - `palette` - color-to-symbol tables, including the built-in marker palette
//! - `quantize` - exact and nearest-color palette mapping
//! - `encoder` - scan, compress and segment an image
//! - `decode` - parse segment text back into an image
//! - `dither` - optional Floyd-Steinberg pre-pass
//! - `transfer` - one-per-line storage, resume and list planning helpers
//!
//! # Example
//!
//! ```ignore
//! use pixelrun_core::{encode, EncodeOptions, Palette, RasterImage};
//!
//! let bytes = std::fs::read("shirt.png").unwrap();
//! let image = RasterImage::decode(&bytes).unwrap();
//! let encoded = encode(&image, &Palette::rec_room(), EncodeOptions::default()).unwrap();
//! println!("{} segments", encoded.segments.len());
//! ```

pub mod color;
pub mod decode;
pub mod dither;
pub mod encoder;
pub mod error;
pub mod palette;
pub mod quantize;
pub mod raster;
pub mod rle;
pub mod scan;
pub mod segment;
pub mod transfer;

pub use color::Rgb;
pub use decode::{decode_segments, parse_runs, DecodeError};
pub use dither::dither_to_palette;
pub use encoder::{encode, EncodeObserver, EncodeOptions, Encoded, Encoder, NoopObserver};
pub use error::EncodeError;
pub use palette::{Palette, PaletteEntry};
pub use quantize::{PaletteMapper, Resolution};
pub use raster::{encode_png, RasterImage};
pub use rle::{compress, expand, serialize, Run};
pub use scan::ScanOrder;
pub use segment::{pack_segments, DEFAULT_MAX_SEGMENT_LENGTH};
pub use transfer::{from_lines, resume_from, to_lines, ImportPlan, ImportTarget};
