//! 8-bit RGB color type

use std::fmt;
use std::str::FromStr;

use super::ParseColorError;

/// An 8-bit RGB color.
///
/// This is the unit of exchange for the whole pipeline: sampled grid cells,
/// final tile fills, checkmark colors and the canvas background are all
/// `Rgb` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Unweighted mean of the three channels, in `0.0..=255.0`.
    ///
    /// This is a fast luminance proxy, not a perceptual model. The tile
    /// thresholds are tuned against exactly this value.
    #[inline]
    pub fn brightness(self) -> f64 {
        (self.r as f64 + self.g as f64 + self.b as f64) / 3.0
    }

    /// Lower-case `#rrggbb` representation.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub(crate) fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, 255)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(pixel: image::Rgb<u8>) -> Self {
        Self::from_bytes(pixel.0)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from `#RRGGBB` or `RRGGBB`.
    ///
    /// Surrounding whitespace is ignored and digits are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidHex {
                value: s.to_string(),
            });
        }
        if digits.len() != 6 {
            return Err(ParseColorError::InvalidLength { len: digits.len() });
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ParseColorError::InvalidHex {
                value: s.to_string(),
            })
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// Parse a 6-digit hex color with optional leading `#`.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ParseColorError> {
    hex.parse()
}

/// Unweighted channel mean, see [`Rgb::brightness`].
#[inline]
pub fn brightness(rgb: Rgb) -> f64 {
    rgb.brightness()
}
