//! Raster input and preview output.
//!
//! [`RasterImage`] is the pixel grid handed to the encoder. It keeps the
//! channel count of its source (3 for RGB, 4 for RGBA) so that channel
//! normalization happens per pixel, exactly where the palette lookup needs it.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageReader};

use crate::color::Rgb;
use crate::error::EncodeError;

/// An interleaved, row-major pixel grid.
///
/// The buffer always holds exactly `width * height * channels` bytes; every
/// constructor checks this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    channels: u8,
    pixels: Vec<u8>,
}

/// Buffer length for the given dimensions, or `ImageTooLarge` if it does not
/// fit in `usize`.
fn buffer_len(width: u32, height: u32, channels: u8) -> Result<usize, EncodeError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels as usize))
        .ok_or(EncodeError::ImageTooLarge { width, height })
}

impl RasterImage {
    /// Create a raster from a raw pixel buffer.
    ///
    /// The channel count is not restricted here; pixels with an unsupported
    /// channel count are rejected when they are read.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidPixel`] for a zero channel count,
    /// [`EncodeError::ImageTooLarge`] if the buffer size overflows `usize`, and
    /// [`EncodeError::InvalidPixelData`] if the buffer length doesn't match
    /// the dimensions.
    pub fn new(width: u32, height: u32, channels: u8, pixels: Vec<u8>) -> Result<Self, EncodeError> {
        if channels == 0 {
            return Err(EncodeError::InvalidPixel(
                "pixels must have at least one channel".to_string(),
            ));
        }

        let expected = buffer_len(width, height, channels)?;
        if pixels.len() != expected {
            return Err(EncodeError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            pixels,
        })
    }

    /// Create an RGB raster filled with a single color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self, EncodeError> {
        let len = buffer_len(width, height, 3)?;
        let pixels = color.to_array().into_iter().cycle().take(len).collect();
        Ok(Self {
            width,
            height,
            channels: 3,
            pixels,
        })
    }

    /// Create an RGB raster from a row-major list of colors.
    pub fn from_colors(width: u32, height: u32, colors: &[Rgb]) -> Result<Self, EncodeError> {
        let pixels: Vec<u8> = colors.iter().flat_map(|c| c.to_array()).collect();
        Self::new(width, height, 3, pixels)
    }

    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            channels: 3,
            pixels: img.into_raw(),
        }
    }

    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            channels: 4,
            pixels: img.into_raw(),
        }
    }

    /// Convert any decoded image, keeping an alpha channel if it has one.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        if img.color().has_alpha() {
            Self::from_rgba_image(img.into_rgba8())
        } else {
            Self::from_rgb_image(img.into_rgb8())
        }
    }

    /// Decode PNG or JPEG bytes.
    ///
    /// Indexed and grayscale images are expanded to truecolor.
    pub fn decode(bytes: &[u8]) -> Result<Self, EncodeError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| EncodeError::Decode(e.to_string()))?;

        let img = reader
            .decode()
            .map_err(|e| EncodeError::Decode(e.to_string()))?;

        Ok(Self::from_dynamic(img))
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channels per pixel (3 = RGB, 4 = RGBA).
    #[inline]
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Interleaved pixel data, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get the total number of pixels.
    ///
    /// Cannot overflow: the buffer of `pixel_count() * channels` bytes exists.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Check if this image has zero area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * (self.channels as usize)
    }

    /// Raw channels of the pixel at `(x, y)`.
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn channels_at(&self, x: u32, y: u32) -> &[u8] {
        let start = self.offset(x, y);
        &self.pixels[start..start + self.channels as usize]
    }

    /// The pixel at `(x, y)` reduced to RGB.
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Result<Rgb, EncodeError> {
        Rgb::from_channels(self.channels_at(x, y))
    }

    /// Overwrite the color at `(x, y)`. Alpha, if present, is left untouched.
    ///
    /// Only meaningful for rasters with at least 3 channels.
    #[inline]
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        let start = self.offset(x, y);
        self.pixels[start..start + 3].copy_from_slice(&color.to_array());
    }

    /// Reduce every pixel to RGB, dropping alpha.
    pub fn to_rgb(&self) -> Result<Self, EncodeError> {
        let mut pixels = Vec::with_capacity(buffer_len(self.width, self.height, 3)?);
        for chunk in self.pixels.chunks_exact(self.channels as usize) {
            pixels.extend_from_slice(&Rgb::from_channels(chunk)?.to_array());
        }
        Ok(Self {
            width: self.width,
            height: self.height,
            channels: 3,
            pixels,
        })
    }
}

/// Encode a raster as PNG bytes, e.g. to show the as-encoded preview.
pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>, EncodeError> {
    if image.is_empty() {
        return Err(EncodeError::EmptyImage {
            width: image.width,
            height: image.height,
        });
    }

    let rgb = image.to_rgb()?;
    let mut buffer = Cursor::new(Vec::new());

    PngEncoder::new(&mut buffer)
        .write_image(&rgb.pixels, rgb.width, rgb.height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::Export(e.to_string()))?;

    Ok(buffer.into_inner())
}
