//! Segment decoding WASM bindings.
//!
//! Lets the automation layer show what a stored segment file will paint
//! before an import starts.
//!
//! ```typescript
//! import { decode_segments } from '@pixelrun/wasm';
//!
//! const segments = (await file.text()).split('\n');
//! const png = decode_segments(segments, 128, 128, false);
//! preview.src = URL.createObjectURL(new Blob([png], { type: 'image/png' }));
//! ```

use crate::types::{strings_from_js, to_js_error};
use pixelrun_core::{decode_segments as decode_core, encode_png, Palette, ScanOrder};
use wasm_bindgen::prelude::*;

/// Decode segments back into a PNG image.
///
/// # Arguments
///
/// * `segments` - Array of segment strings, in import order
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `vertical` - `true` if the segments were encoded column by column
///
/// # Errors
///
/// Returns an error if a segment is malformed, uses a symbol outside the
/// built-in palette, or covers a different number of pixels than
/// `width * height`.
#[wasm_bindgen]
pub fn decode_segments(
    segments: JsValue,
    width: u32,
    height: u32,
    vertical: bool,
) -> Result<Vec<u8>, JsValue> {
    let segments = strings_from_js(segments)?;
    decode_to_png(&segments, width, height, ScanOrder::from_vertical(vertical))
        .map_err(to_js_error)
}

pub(crate) fn decode_to_png(
    segments: &[String],
    width: u32,
    height: u32,
    scan_order: ScanOrder,
) -> Result<Vec<u8>, String> {
    let palette = Palette::rec_room();
    let image = decode_core(segments, &palette, width, height, scan_order)
        .map_err(|e| e.to_string())?;
    encode_png(&image).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_raster;
    use pixelrun_core::{EncodeOptions, RasterImage, Rgb};

    #[test]
    fn test_decode_to_png_matches_encode() {
        let palette = Palette::rec_room();
        let colors: Vec<Rgb> = (0..12).map(|i| palette.entries()[i % 3].color).collect();
        let img = RasterImage::from_colors(4, 3, &colors).unwrap();

        let encoded = encode_raster(&img, EncodeOptions::default()).unwrap();
        let png = decode_to_png(encoded.segment_slice(), 4, 3, ScanOrder::RowMajor).unwrap();

        assert_eq!(RasterImage::decode(&png).unwrap(), img);
    }

    #[test]
    fn test_decode_to_png_wrong_size() {
        let segments = vec!["4]".to_string()];
        let err = decode_to_png(&segments, 3, 3, ScanOrder::RowMajor).unwrap_err();
        assert!(err.contains("9"), "{err}");
    }

    #[test]
    fn test_decode_to_png_unknown_symbol() {
        let segments = vec!["A".to_string()];
        assert!(decode_to_png(&segments, 1, 1, ScanOrder::RowMajor).is_err());
    }
}
