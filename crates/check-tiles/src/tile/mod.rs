//! Per-tile color decisions and drawing.
//!
//! A tile is one grid cell rendered as a rounded square with a checkmark on
//! top. Color selection is pure and lives here; rasterization lives in
//! [`draw`].

mod draw;

pub use draw::{checkmark_points, draw_tile, fill_background};

use crate::color::{Hsv, Rgb};

/// Edge length of one tile slot in pixels.
pub const SLOT_SIZE: u32 = 50;
/// Inset of the rounded square inside its slot.
pub const PADDING: u32 = 6;
/// Corner radius of the rounded square.
pub const CORNER_RADIUS: f32 = 8.0;
/// Tiles whose source brightness is below this never animate.
pub const DARK_LOCK_THRESHOLD: f64 = 60.0;
/// Tiles whose final brightness is below this get [`CHECK_FALLBACK`].
pub const CHECK_CONTRAST_THRESHOLD: f64 = 40.0;
/// Checkmark color on near-black tiles.
pub const CHECK_FALLBACK: Rgb = Rgb::new(60, 60, 60);
/// Maximum change of the HSV value channel at wave value ±1.
pub const VALUE_INTENSITY: f64 = 0.4;
/// Checkmark scale relative to the usable tile size.
pub const CHECK_SCALE: f32 = 0.4;

/// Whether a source color is frozen against animation.
#[inline]
pub fn is_dark_locked(original: Rgb) -> bool {
    original.brightness() < DARK_LOCK_THRESHOLD
}

/// Final fill color of a tile for one frame.
///
/// Dark-locked tiles keep their source color. Others have their HSV value
/// shifted by `wave * VALUE_INTENSITY` (clamped), leaving hue and saturation
/// alone. If the clamped value ends up unchanged the source color is
/// returned as is, so a zero wave never drifts a color through the float
/// round trip.
pub fn tile_color(original: Rgb, wave: f64) -> Rgb {
    if is_dark_locked(original) {
        return original;
    }

    let hsv = Hsv::from(original);
    let shifted = hsv.shift_value(wave * VALUE_INTENSITY);
    if shifted.v == hsv.v {
        return original;
    }
    shifted.to_rgb8()
}

/// Checkmark color for a tile with the given final fill.
#[inline]
pub fn check_color(fill: Rgb, configured: Rgb) -> Rgb {
    if fill.brightness() < CHECK_CONTRAST_THRESHOLD {
        CHECK_FALLBACK
    } else {
        configured
    }
}

/// Stroke width in whole pixels for a thickness ratio, at least one.
#[inline]
pub fn check_thickness(ratio: f64) -> f32 {
    (SLOT_SIZE as f64 * ratio).floor().max(1.0) as f32
}
