//! Image encoding WASM bindings.
//!
//! Exposes the core encoder to JavaScript. Options are passed as a plain
//! object and every field is optional:
//!
//! ```typescript
//! import { encode_image } from '@pixelrun/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const result = encode_image(bytes, { scanOrder: 'vertical', maxSegmentLength: 512 });
//! console.log(`${result.segment_count} segments, ${result.substitutions} substituted`);
//! ```
//!
//! # Functions
//!
//! - [`encode_image`] - Decode PNG/JPEG bytes and encode them
//! - [`encode_pixels`] - Encode raw interleaved RGB or RGBA pixels

use crate::types::{to_js_error, JsEncoded};
use pixelrun_core::{EncodeError, EncodeOptions, Encoder, Palette, RasterImage};
use wasm_bindgen::prelude::*;

/// Encode PNG or JPEG bytes with the built-in palette.
///
/// # Arguments
///
/// * `bytes` - Encoded image file contents
/// * `options` - `{ scanOrder, fallback, maxSegmentLength, dither }`, or
///   `undefined` for the defaults
///
/// # Errors
///
/// Returns an error if the bytes cannot be decoded, the options object is
/// malformed, or the encode itself fails (for example a run longer than
/// `maxSegmentLength`).
#[wasm_bindgen]
pub fn encode_image(bytes: &[u8], options: JsValue) -> Result<JsEncoded, JsValue> {
    let options = parse_options(options)?;
    let image = RasterImage::decode(bytes).map_err(to_js_error)?;
    let result = encode_raster(&image, options).map_err(to_js_error)?;
    log_summary(&result);
    Ok(result)
}

/// Encode raw pixel data with the built-in palette.
///
/// # Arguments
///
/// * `pixels` - Interleaved pixel data, row-major
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - Bytes per pixel (3 for RGB, 4 for RGBA; alpha is ignored)
/// * `options` - Same shape as for [`encode_image`]
///
/// # Example
///
/// ```typescript
/// const ctx = canvas.getContext('2d');
/// const data = ctx.getImageData(0, 0, canvas.width, canvas.height).data;
/// const result = encode_pixels(new Uint8Array(data.buffer), canvas.width, canvas.height, 4);
/// ```
#[wasm_bindgen]
pub fn encode_pixels(
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    options: JsValue,
) -> Result<JsEncoded, JsValue> {
    let options = parse_options(options)?;
    let image = RasterImage::new(width, height, channels, pixels).map_err(to_js_error)?;
    let result = encode_raster(&image, options).map_err(to_js_error)?;
    log_summary(&result);
    Ok(result)
}

pub(crate) fn encode_raster(
    image: &RasterImage,
    options: EncodeOptions,
) -> Result<JsEncoded, EncodeError> {
    let palette = Palette::rec_room();
    let encoded = Encoder::new(&palette, options).encode(image)?;
    JsEncoded::from_encoded(encoded)
}

fn parse_options(value: JsValue) -> Result<EncodeOptions, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(EncodeOptions::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid encode options: {}", e)))
}

fn log_summary(result: &JsEncoded) {
    let stats = result.summary();
    let message = format!(
        "pixelrun: {} symbols -> {} runs in {} segments ({} substituted)",
        stats.symbol_count, stats.run_count, stats.segment_count, stats.substitutions
    );
    web_sys::console::log_1(&JsValue::from_str(&message));
}

/// Tests for encode bindings.
///
/// Functions taking or returning `JsValue` only run on wasm32 targets, so
/// native tests go through `encode_raster`.
#[cfg(test)]
mod tests {
    use super::*;
    use pixelrun_core::{encode_png, Rgb, ScanOrder};

    #[test]
    fn test_encode_raster_defaults() {
        let img = RasterImage::filled(10, 10, Rgb::BLACK).unwrap();
        let result = encode_raster(&img, EncodeOptions::default()).unwrap();
        assert_eq!(result.segment_slice(), &["100]".to_string()]);
        assert_eq!(result.run_count(), 1);
    }

    #[test]
    fn test_encode_raster_from_png_bytes() {
        let img = RasterImage::from_colors(2, 2, &[Rgb::BLACK, Rgb::WHITE, Rgb::BLACK, Rgb::WHITE])
            .unwrap();
        let png = encode_png(&img).unwrap();
        let decoded = RasterImage::decode(&png).unwrap();

        let options = EncodeOptions::new().with_scan_order(ScanOrder::Vertical);
        let result = encode_raster(&decoded, options).unwrap();
        assert_eq!(result.run_count(), 2);
        assert_eq!(result.symbol_count(), 4);
    }

    #[test]
    fn test_encode_raster_strict_mode_error() {
        let img = RasterImage::filled(2, 2, Rgb::new(3, 3, 3)).unwrap();
        let options = EncodeOptions::new().with_fallback(false);
        assert!(matches!(
            encode_raster(&img, options),
            Err(EncodeError::UnmatchedColor { x: 0, y: 0, .. })
        ));
    }
}

/// WASM-specific tests that require JsValue.
///
/// Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use pixelrun_core::{encode_png, Rgb};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_pixels_default_options() {
        let pixels = vec![0u8; 4 * 4 * 3];
        let result = encode_pixels(pixels, 4, 4, 3, JsValue::UNDEFINED).unwrap();
        assert_eq!(result.segment_count(), 1);
        assert_eq!(result.symbol_count(), 16);
        assert_eq!(result.segments().get(0).as_string().unwrap(), "16]");
    }

    #[wasm_bindgen_test]
    fn test_encode_pixels_rgba() {
        let pixels = vec![0u8, 0, 0, 255, 0, 0, 0, 0];
        let result = encode_pixels(pixels, 2, 1, 4, JsValue::NULL).unwrap();
        assert_eq!(result.segments().get(0).as_string().unwrap(), "2]");
    }

    #[wasm_bindgen_test]
    fn test_encode_pixels_invalid_length() {
        let pixels = vec![0u8; 10];
        assert!(encode_pixels(pixels, 4, 4, 3, JsValue::UNDEFINED).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_image_with_options() {
        let img = RasterImage::filled(30, 1, Rgb::BLACK).unwrap();
        let png = encode_png(&img).unwrap();

        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"maxSegmentLength".into(), &JsValue::from(8)).unwrap();
        let result = encode_image(&png, options.into()).unwrap();
        assert_eq!(result.segments().get(0).as_string().unwrap(), "30]");
    }

    #[wasm_bindgen_test]
    fn test_encode_image_invalid_options() {
        let img = RasterImage::filled(1, 1, Rgb::BLACK).unwrap();
        let png = encode_png(&img).unwrap();
        let options = JsValue::from_str("vertical");
        assert!(encode_image(&png, options).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_image_garbage_bytes() {
        assert!(encode_image(&[1, 2, 3, 4], JsValue::UNDEFINED).is_err());
    }
}
