//! Immutable per-render configuration.

use thiserror::Error;

use crate::color::Rgb;
use crate::wave::WavePattern;

pub const COLUMNS_RANGE: std::ops::RangeInclusive<u32> = 10..=64;
pub const THICKNESS_RANGE: std::ops::RangeInclusive<f64> = 0.01..=0.25;
pub const SPEED_RANGE: std::ops::RangeInclusive<f64> = 1.0..=10.0;
pub const FPS_RANGE: std::ops::RangeInclusive<u32> = 5..=30;
pub const FRAMES_RANGE: std::ops::RangeInclusive<u32> = 10..=60;

/// A render parameter outside its accepted range.
///
/// Speed, fps and frame count are only checked for animated patterns; a
/// static render ignores them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("columns must be in {min}..={max}, got {value}")]
    Columns { value: u32, min: u32, max: u32 },

    #[error("thickness ratio must be in {min}..={max}, got {value}")]
    Thickness { value: f64, min: f64, max: f64 },

    #[error("wave speed must be in {min}..={max}, got {value}")]
    Speed { value: f64, min: f64, max: f64 },

    #[error("fps must be in {min}..={max}, got {value}")]
    Fps { value: u32, min: u32, max: u32 },

    #[error("total frames must be in {min}..={max}, got {value}")]
    Frames { value: u32, min: u32, max: u32 },
}

/// Everything one render needs besides the source image.
///
/// Built with chained setters from [`RenderConfig::default`], which holds the
/// studio defaults (24 columns, thickness 0.10, static, black on black).
///
/// ```
/// use check_tiles::{RenderConfig, Rgb, WavePattern};
///
/// let config = RenderConfig::default()
///     .columns(32)
///     .pattern(WavePattern::Concentric)
///     .check_color(Rgb::WHITE);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.effective_frames(), 30);
/// assert_eq!(config.frame_delay_ms(), 66);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub columns: u32,
    pub thickness_ratio: f64,
    pub pattern: WavePattern,
    pub speed: f64,
    pub fps: u32,
    pub total_frames: u32,
    pub background: Rgb,
    pub check_color: Rgb,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            columns: 24,
            thickness_ratio: 0.10,
            pattern: WavePattern::Static,
            speed: 3.0,
            fps: 15,
            total_frames: 30,
            background: Rgb::BLACK,
            check_color: Rgb::BLACK,
        }
    }
}

impl RenderConfig {
    #[inline]
    pub fn columns(mut self, columns: u32) -> Self {
        self.columns = columns;
        self
    }

    #[inline]
    pub fn thickness_ratio(mut self, ratio: f64) -> Self {
        self.thickness_ratio = ratio;
        self
    }

    #[inline]
    pub fn pattern(mut self, pattern: WavePattern) -> Self {
        self.pattern = pattern;
        self
    }

    #[inline]
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    #[inline]
    pub fn fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    #[inline]
    pub fn total_frames(mut self, frames: u32) -> Self {
        self.total_frames = frames;
        self
    }

    #[inline]
    pub fn background(mut self, color: Rgb) -> Self {
        self.background = color;
        self
    }

    #[inline]
    pub fn check_color(mut self, color: Rgb) -> Self {
        self.check_color = color;
        self
    }

    /// Check every parameter against its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !COLUMNS_RANGE.contains(&self.columns) {
            return Err(ConfigError::Columns {
                value: self.columns,
                min: *COLUMNS_RANGE.start(),
                max: *COLUMNS_RANGE.end(),
            });
        }
        if !THICKNESS_RANGE.contains(&self.thickness_ratio) {
            return Err(ConfigError::Thickness {
                value: self.thickness_ratio,
                min: *THICKNESS_RANGE.start(),
                max: *THICKNESS_RANGE.end(),
            });
        }
        if !self.pattern.is_animated() {
            return Ok(());
        }
        if !SPEED_RANGE.contains(&self.speed) {
            return Err(ConfigError::Speed {
                value: self.speed,
                min: *SPEED_RANGE.start(),
                max: *SPEED_RANGE.end(),
            });
        }
        if !FPS_RANGE.contains(&self.fps) {
            return Err(ConfigError::Fps {
                value: self.fps,
                min: *FPS_RANGE.start(),
                max: *FPS_RANGE.end(),
            });
        }
        if !FRAMES_RANGE.contains(&self.total_frames) {
            return Err(ConfigError::Frames {
                value: self.total_frames,
                min: *FRAMES_RANGE.start(),
                max: *FRAMES_RANGE.end(),
            });
        }
        Ok(())
    }

    /// Number of frames actually rendered: one for a static pattern.
    #[inline]
    pub fn effective_frames(&self) -> u32 {
        if self.pattern.is_animated() {
            self.total_frames.max(1)
        } else {
            1
        }
    }

    /// Display time per animation frame, `floor(1000 / fps)` milliseconds.
    #[inline]
    pub fn frame_delay_ms(&self) -> u32 {
        1000 / self.fps.max(1)
    }
}
