//! Palette mapping: exact lookup with nearest-color fallback.
//!
//! # Nearest-color search
//!
//! The nearest entry is the one with the smallest Euclidean distance in RGB
//! space. The search is a linear scan in palette definition order and only
//! replaces the current best on a strictly smaller distance, so among
//! equidistant entries the one defined first wins. Encoded output depends on
//! this, so it is part of the contract.

use crate::color::Rgb;
use crate::error::EncodeError;
use crate::palette::{Palette, PaletteEntry};
use crate::raster::RasterImage;

/// How a pixel was resolved to a palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The pixel is a palette color.
    Exact(PaletteEntry),
    /// The pixel was replaced by its nearest palette color.
    Substituted(PaletteEntry),
}

impl Resolution {
    #[inline]
    pub fn entry(self) -> PaletteEntry {
        match self {
            Resolution::Exact(entry) | Resolution::Substituted(entry) => entry,
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        self.entry().symbol
    }

    #[inline]
    pub fn is_substituted(self) -> bool {
        matches!(self, Resolution::Substituted(_))
    }
}

/// Maps colors to palette symbols.
#[derive(Debug, Clone, Copy)]
pub struct PaletteMapper<'p> {
    palette: &'p Palette,
}

impl<'p> PaletteMapper<'p> {
    pub fn new(palette: &'p Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &'p Palette {
        self.palette
    }

    /// Symbol for an exact palette color, or `None`.
    #[inline]
    pub fn quantize_exact(&self, pixel: Rgb) -> Option<char> {
        self.palette.symbol_for(pixel)
    }

    /// Symbol of the nearest palette color. Always succeeds.
    #[inline]
    pub fn quantize_nearest(&self, pixel: Rgb) -> char {
        self.nearest_entry(pixel).symbol
    }

    /// The nearest palette entry; first one wins on ties.
    pub fn nearest_entry(&self, pixel: Rgb) -> PaletteEntry {
        let entries = self.palette.entries();
        let mut best = entries[0];
        let mut best_dist = pixel.distance_squared(best.color);

        for &entry in &entries[1..] {
            let dist = pixel.distance_squared(entry.color);
            if dist < best_dist {
                best_dist = dist;
                best = entry;
            }
        }

        best
    }

    /// Exact lookup first, then nearest color if `fallback` is enabled.
    ///
    /// Returns `None` only when `fallback` is disabled and the color is not
    /// in the palette.
    pub fn resolve(&self, pixel: Rgb, fallback: bool) -> Option<Resolution> {
        match self.quantize_exact(pixel) {
            Some(symbol) => Some(Resolution::Exact(PaletteEntry {
                color: pixel,
                symbol,
            })),
            None if fallback => Some(Resolution::Substituted(self.nearest_entry(pixel))),
            None => None,
        }
    }

    /// Replace every pixel with its palette color.
    ///
    /// The result is an RGB raster of the same size. Pixels that already
    /// hold a palette color are copied as-is.
    pub fn quantize_image(&self, image: &RasterImage) -> Result<RasterImage, EncodeError> {
        let mut out = RasterImage::filled(image.width(), image.height(), Rgb::BLACK)?;
        for y in 0..image.height() {
            for x in 0..image.width() {
                let pixel = image.pixel(x, y)?;
                let color = match self.quantize_exact(pixel) {
                    Some(_) => pixel,
                    None => self.nearest_entry(pixel).color,
                };
                out.put_pixel(x, y, color);
            }
        }
        Ok(out)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
