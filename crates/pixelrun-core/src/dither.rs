//! Floyd-Steinberg dithering onto a palette.
//!
//! Used as an optional pre-pass before encoding. Instead of snapping every
//! off-palette pixel to its nearest color independently, the quantization
//! error is diffused to unvisited neighbors:
//!
//! ```text
//!        X   7
//!    3   5   1
//! ```
//!
//! Weights are in sixteenths. Arithmetic happens in 8-bit RGB space with the
//! same nearest-color metric the encoder uses, so every output pixel is an
//! exact palette color.

use crate::color::Rgb;
use crate::error::EncodeError;
use crate::palette::Palette;
use crate::quantize::PaletteMapper;
use crate::raster::RasterImage;

/// Diffusion targets as `(dx, dy, weight / 16)`.
const FLOYD_STEINBERG: [(i64, i64, f32); 4] = [
    (1, 0, 7.0 / 16.0),
    (-1, 1, 3.0 / 16.0),
    (0, 1, 5.0 / 16.0),
    (1, 1, 1.0 / 16.0),
];

/// Dither `image` to `palette`.
///
/// Returns an RGB raster of the same size containing only palette colors.
pub fn dither_to_palette(image: &RasterImage, palette: &Palette) -> Result<RasterImage, EncodeError> {
    let width = image.width() as usize;
    let height = image.height() as usize;
    let mapper = PaletteMapper::new(palette);

    let mut work: Vec<[f32; 3]> = Vec::with_capacity(width * height);
    for y in 0..image.height() {
        for x in 0..image.width() {
            let px = image.pixel(x, y)?;
            work.push([px.r as f32, px.g as f32, px.b as f32]);
        }
    }

    let mut out = RasterImage::filled(image.width(), image.height(), Rgb::BLACK)?;

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let old = work[idx];
            let wanted = Rgb::new(clamp_u8(old[0]), clamp_u8(old[1]), clamp_u8(old[2]));
            let chosen = match mapper.quantize_exact(wanted) {
                Some(_) => wanted,
                None => mapper.nearest_entry(wanted).color,
            };
            out.put_pixel(x as u32, y as u32, chosen);

            let error = [
                old[0] - chosen.r as f32,
                old[1] - chosen.g as f32,
                old[2] - chosen.b as f32,
            ];

            for &(dx, dy, weight) in &FLOYD_STEINBERG {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || nx >= width as i64 || ny >= height as i64 {
                    continue;
                }
                let target = &mut work[ny as usize * width + nx as usize];
                for c in 0..3 {
                    target[c] += error[c] * weight;
                }
            }
        }
    }

    Ok(out)
}

#[inline]
fn clamp_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}


// ============================================================================
// Property-Based Tests
// ============================================================================
