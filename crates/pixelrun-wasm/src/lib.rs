//! Pixelrun WASM - WebAssembly bindings for Pixelrun
//!
//! This crate exposes the pixelrun-core encoder to the JavaScript layer that
//! drives the in-game import.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for encode results
//! - `encode` - Image and raw pixel encoding
//! - `decode` - Segment text back to a PNG preview
//! - `transfer` - Saved segment files, resume and list planning
//!
//! # Usage
//!
//! ```typescript
//! import init, { encode_image, palette_symbols } from '@pixelrun/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const result = encode_image(bytes, { dither: true });
//! await writeTextFile('segments.txt', result.to_lines());
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod transfer;
mod types;

pub use decode::decode_segments;
pub use encode::{encode_image, encode_pixels};
pub use transfer::{from_lines, import_plan, resume_from, to_lines};
pub use types::{EncodeStats, JsEncoded};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Symbols of the built-in palette, in definition order.
///
/// Pass `true` for the full extended table.
#[wasm_bindgen]
pub fn palette_symbols(extended: bool) -> String {
    if extended {
        pixelrun_core::Palette::rec_room_extended().symbols()
    } else {
        pixelrun_core::Palette::rec_room().symbols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_palette_symbols() {
        let symbols = palette_symbols(false);
        assert_eq!(symbols.chars().count(), 62);
        assert!(symbols.starts_with("!#$%&"));
        assert!(symbols.ends_with("ÀÈÌÐ"));

        assert_eq!(palette_symbols(true).chars().count(), 107);
    }
}
