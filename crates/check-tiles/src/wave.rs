//! Spatial wave patterns that drive tile animation.
//!
//! Each pattern maps a tile coordinate and animation phase to a scalar in
//! `[-1, 1]` via `sin(phase * speed - spatial_term)`. The per-cell
//! coefficients are deliberately small so a single wave front spans many
//! tiles.

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::GridSpec;

/// Phase offset per row for the vertical waves.
const ROW_STEP: f64 = 0.2;
/// Phase offset per unit of `c + r` for the diagonal waves.
const DIAGONAL_STEP: f64 = 0.15;
/// Phase offset per ring for the concentric wave.
const RING_STEP: f64 = 0.2;

/// Error returned for an unknown pattern name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pattern {0:?}")]
pub struct ParsePatternError(pub String);

/// Animation pattern selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WavePattern {
    /// No animation. The wave value is always zero.
    #[default]
    Static,
    /// Bands travel from top to bottom.
    VerticalDown,
    /// Bands travel from bottom to top.
    VerticalUp,
    /// Diagonal bands travel from the top-left corner.
    DiagonalTlBr,
    /// Diagonal bands travel from the top-right corner.
    DiagonalTrBl,
    /// Square rings travel outwards from the centre.
    Concentric,
}

impl WavePattern {
    pub const ALL: [WavePattern; 6] = [
        WavePattern::Static,
        WavePattern::VerticalDown,
        WavePattern::VerticalUp,
        WavePattern::DiagonalTlBr,
        WavePattern::DiagonalTrBl,
        WavePattern::Concentric,
    ];

    /// Stable machine name, as used in query strings and config files.
    pub fn name(self) -> &'static str {
        match self {
            WavePattern::Static => "static",
            WavePattern::VerticalDown => "vertical-down",
            WavePattern::VerticalUp => "vertical-up",
            WavePattern::DiagonalTlBr => "diagonal-tl-br",
            WavePattern::DiagonalTrBl => "diagonal-tr-bl",
            WavePattern::Concentric => "concentric",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            WavePattern::Static => "Static (No Animation)",
            WavePattern::VerticalDown => "Vertical Wave (Moving Down)",
            WavePattern::VerticalUp => "Vertical Wave (Moving Up)",
            WavePattern::DiagonalTlBr => "Diagonal (Top-Left to Bottom-Right)",
            WavePattern::DiagonalTrBl => "Diagonal (Top-Right to Bottom-Left)",
            WavePattern::Concentric => "Concentric Box (Center Out)",
        }
    }

    /// Whether this pattern produces more than one frame.
    #[inline]
    pub fn is_animated(self) -> bool {
        self != WavePattern::Static
    }

    /// Wave value for tile `(c, r)` at `phase` radians, in `[-1, 1]`.
    pub fn value(self, c: u32, r: u32, grid: GridSpec, phase: f64, speed: f64) -> f64 {
        let c = c as f64;
        let r = r as f64;
        let t = phase * speed;

        match self {
            WavePattern::Static => 0.0,
            WavePattern::VerticalDown => (t - r * ROW_STEP).sin(),
            WavePattern::VerticalUp => (t + r * ROW_STEP).sin(),
            WavePattern::DiagonalTlBr => (t - (c + r) * DIAGONAL_STEP).sin(),
            WavePattern::DiagonalTrBl => {
                (t - ((grid.columns as f64 - c) + r) * DIAGONAL_STEP).sin()
            }
            WavePattern::Concentric => {
                // Centre tile on the integer grid, so odd grids have a
                // tile sitting exactly on it.
                let cx = (grid.columns / 2) as f64;
                let cy = (grid.rows / 2) as f64;
                let dist = (c - cx).abs().max((r - cy).abs());
                (t - dist * RING_STEP).sin()
            }
        }
    }
}

impl fmt::Display for WavePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WavePattern {
    type Err = ParsePatternError;

    /// Accepts the machine name or the label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        WavePattern::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s) || p.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParsePatternError(s.to_string()))
    }
}

/// Animation phase for `frame_index` out of `total_frames`, in `[0, 2π)`.
///
/// Single-frame renders always use phase zero.
#[inline]
pub fn phase_for(frame_index: u32, total_frames: u32) -> f64 {
    if total_frames > 1 {
        frame_index as f64 / total_frames as f64 * TAU
    } else {
        0.0
    }
}
