//! Color types and conversion utilities
//!
//! Tiles are recolored in two spaces:
//!
//! - [`Rgb`]: 8-bit channels as sampled from the source image and written to
//!   the canvas. Also the target of hex parsing for user-supplied colors.
//! - [`Hsv`]: hue/saturation/value, used to shift perceived lightness of a
//!   tile without touching its hue or saturation.
//!
//! # Example
//!
//! ```
//! use check_tiles::{Hsv, Rgb};
//!
//! let teal: Rgb = "#008080".parse().unwrap();
//! let hsv = Hsv::from(teal);
//! assert_eq!(hsv.to_rgb8(), teal);
//! ```

mod error;
mod hsv;
mod rgb;

pub use error::ParseColorError;
pub use hsv::Hsv;
pub use rgb::{brightness, hex_to_rgb, Rgb};
