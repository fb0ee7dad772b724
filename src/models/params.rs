use check_tiles::{ConfigError, ParseColorError, ParsePatternError, RenderConfig, Rgb, WavePattern};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::IntoParams;

use super::config::DefaultsConfig;

/// Render parameters as they arrive from a query string or the CLI.
///
/// Every field is optional; missing ones fall back to the configured
/// defaults.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RenderParams {
    /// Tiles per row (10-64)
    pub columns: Option<u32>,
    /// Checkmark stroke width as a fraction of the tile (0.01-0.25)
    pub thickness: Option<f64>,
    /// Pattern name, e.g. `static`, `vertical-down`, `concentric`
    pub pattern: Option<String>,
    /// Wave speed (1-10)
    pub speed: Option<f64>,
    /// Frames per second (5-30)
    pub fps: Option<u32>,
    /// Frames in one animation loop (10-60)
    pub frames: Option<u32>,
    /// Canvas background as `#rrggbb`
    pub background: Option<String>,
    /// Checkmark color as `#rrggbb`
    pub check: Option<String>,
}

#[derive(Debug, Error)]
pub enum ParamError {
    #[error("invalid {field} color: {source}")]
    Color {
        field: &'static str,
        #[source]
        source: ParseColorError,
    },

    #[error(transparent)]
    Pattern(#[from] ParsePatternError),

    #[error(transparent)]
    Range(#[from] ConfigError),
}

impl RenderParams {
    /// Merge with `defaults` and validate.
    ///
    /// Colors and the pattern name are parsed before ranges are checked, so
    /// a malformed color is reported even if other values are also off.
    pub fn resolve(&self, defaults: &DefaultsConfig) -> Result<RenderConfig, ParamError> {
        let background = parse_color(
            "background",
            self.background.as_deref().unwrap_or(&defaults.background),
        )?;
        let check = parse_color("check", self.check.as_deref().unwrap_or(&defaults.check))?;
        let pattern = match self.pattern.as_deref() {
            Some(name) => name.parse::<WavePattern>()?,
            None => defaults.pattern,
        };

        let config = RenderConfig::default()
            .columns(self.columns.unwrap_or(defaults.columns))
            .thickness_ratio(self.thickness.unwrap_or(defaults.thickness))
            .pattern(pattern)
            .speed(self.speed.unwrap_or(defaults.speed))
            .fps(self.fps.unwrap_or(defaults.fps))
            .total_frames(self.frames.unwrap_or(defaults.frames))
            .background(background)
            .check_color(check);

        config.validate()?;
        Ok(config)
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<Rgb, ParamError> {
    value
        .parse()
        .map_err(|source| ParamError::Color { field, source })
}
