//! WASM-compatible wrapper types for encoder results.
//!
//! This module converts core results into shapes JavaScript can hold:
//! segment lists become `Array`s of strings and the preview raster becomes
//! PNG bytes that can be dropped straight into a `Blob`.

use pixelrun_core::{encode_png, EncodeError, Encoded};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Encode statistics handed to JavaScript as a plain object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeStats {
    pub segment_count: usize,
    pub symbol_count: usize,
    pub run_count: usize,
    pub substitutions: usize,
    pub has_preview: bool,
}

/// An encode result wrapper for JavaScript.
///
/// Holds the segments in order plus the statistics the automation layer
/// shows before starting an import.
///
/// # Memory Management
///
/// Segments and preview bytes live in WASM memory. `segments()` and
/// `preview_png()` copy them out on each call, so hold on to the returned
/// values rather than calling repeatedly in a loop.
#[wasm_bindgen]
pub struct JsEncoded {
    segments: Vec<String>,
    symbol_count: usize,
    run_count: usize,
    substitutions: usize,
    preview_png: Option<Vec<u8>>,
}

#[wasm_bindgen]
impl JsEncoded {
    /// Segments as an array of strings, in import order.
    pub fn segments(&self) -> js_sys::Array {
        strings_to_array(&self.segments)
    }

    /// Number of segments.
    #[wasm_bindgen(getter)]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Symbols before compression (one per pixel).
    #[wasm_bindgen(getter)]
    pub fn symbol_count(&self) -> usize {
        self.symbol_count
    }

    /// Runs after compression.
    #[wasm_bindgen(getter)]
    pub fn run_count(&self) -> usize {
        self.run_count
    }

    /// Pixels replaced by their nearest palette color.
    #[wasm_bindgen(getter)]
    pub fn substitutions(&self) -> usize {
        self.substitutions
    }

    #[wasm_bindgen(getter)]
    pub fn has_preview(&self) -> bool {
        self.preview_png.is_some()
    }

    /// PNG of the as-encoded colors, or `undefined` when the image was
    /// already palette-exact and not dithered.
    pub fn preview_png(&self) -> Option<Vec<u8>> {
        self.preview_png.clone()
    }

    /// All statistics as `{ segmentCount, symbolCount, runCount,
    /// substitutions, hasPreview }`.
    pub fn stats(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.summary()).map_err(to_js_error)
    }

    /// Every segment joined, one per line, ready to save as a text file.
    pub fn to_lines(&self) -> String {
        pixelrun_core::to_lines(&self.segments)
    }

    /// Explicitly free WASM memory.
    ///
    /// Optional; wasm-bindgen's finalizer handles cleanup as well.
    pub fn free(self) {}
}

impl JsEncoded {
    /// Wrap a core result, rendering the preview to PNG.
    pub(crate) fn from_encoded(encoded: Encoded) -> Result<Self, EncodeError> {
        let preview_png = encoded.preview.as_ref().map(encode_png).transpose()?;
        Ok(Self {
            segments: encoded.segments,
            symbol_count: encoded.symbol_count,
            run_count: encoded.run_count,
            substitutions: encoded.substitutions,
            preview_png,
        })
    }

    pub(crate) fn summary(&self) -> EncodeStats {
        EncodeStats {
            segment_count: self.segments.len(),
            symbol_count: self.symbol_count,
            run_count: self.run_count,
            substitutions: self.substitutions,
            has_preview: self.preview_png.is_some(),
        }
    }

    pub(crate) fn segment_slice(&self) -> &[String] {
        &self.segments
    }
}

/// Build a JS array of strings.
pub(crate) fn strings_to_array<S: AsRef<str>>(strings: &[S]) -> js_sys::Array {
    strings
        .iter()
        .map(|s| JsValue::from_str(s.as_ref()))
        .collect()
}

/// Read a JS array of strings.
pub(crate) fn strings_from_js(value: JsValue) -> Result<Vec<String>, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Expected an array of strings: {}", e)))
}

/// Convert a core error for JavaScript.
pub(crate) fn to_js_error<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use pixelrun_core::{encode, EncodeOptions, Palette, RasterImage, Rgb};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_stats_object() {
        let palette = Palette::rec_room();
        let img = RasterImage::filled(6, 1, Rgb::BLACK).unwrap();
        let encoded = encode(&img, &palette, EncodeOptions::default()).unwrap();
        let js = JsEncoded::from_encoded(encoded).unwrap();

        let stats: EncodeStats = serde_wasm_bindgen::from_value(js.stats().unwrap()).unwrap();
        assert_eq!(stats, js.summary());
        assert_eq!(stats.symbol_count, 6);
        assert!(!stats.has_preview);
    }
}
