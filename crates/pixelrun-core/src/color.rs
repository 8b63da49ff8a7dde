//! 8-bit RGB color type and channel normalization.
//!
//! Every pixel that reaches the palette is reduced to an [`Rgb`] triple first.
//! Sources may hand over 3 or 4 channels; the 4th (alpha) channel is dropped.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EncodeError;

/// A truecolor pixel with three 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a raw channel tuple.
    ///
    /// Accepts 3 channels (RGB) or 4 channels (RGBA, alpha discarded).
    /// Any integer type works so that callers holding wider values get a
    /// range check instead of a silent truncation.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidPixel`] if there are fewer than 3 or
    /// more than 4 channels, or if a channel lies outside 0-255.
    pub fn from_channels<T>(channels: &[T]) -> Result<Self, EncodeError>
    where
        T: Copy + Into<i64>,
    {
        let rgb = match channels.len() {
            3 | 4 => &channels[..3],
            n => {
                return Err(EncodeError::InvalidPixel(format!(
                    "expected 3 or 4 channels, got {n}"
                )))
            }
        };

        let mut out = [0u8; 3];
        for (slot, &value) in out.iter_mut().zip(rgb) {
            let value: i64 = value.into();
            *slot = u8::try_from(value).map_err(|_| {
                EncodeError::InvalidPixel(format!("channel value {value} is outside 0-255"))
            })?;
        }

        Ok(Self::new(out[0], out[1], out[2]))
    }

    /// Squared Euclidean distance in RGB space.
    ///
    /// Ordering by this value is the same as ordering by [`Rgb::distance`],
    /// without the square root.
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Euclidean distance in RGB space.
    #[inline]
    pub fn distance(self, other: Rgb) -> f64 {
        f64::from(self.distance_squared(other)).sqrt()
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(px: image::Rgb<u8>) -> Self {
        Self::from(px.0)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}
