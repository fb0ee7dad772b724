//! Unified error type for the check-tiles public API.
//!
//! [`RenderError`] wraps every error the crate produces so applications
//! can propagate with `?`. Any error aborts the whole render: no partial
//! frame sequence is ever returned.

use thiserror::Error;

use crate::color::ParseColorError;
use crate::render::ConfigError;
use crate::source::InputError;
use crate::wave::ParsePatternError;

#[derive(Debug, Error)]
pub enum RenderError {
    /// Malformed color string
    #[error("color format error: {0}")]
    Format(#[from] ParseColorError),

    /// Unknown animation pattern name
    #[error("pattern error: {0}")]
    Pattern(#[from] ParsePatternError),

    /// Unusable source image or grid request
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// Parameter out of range
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to allocate {width}x{height} canvas")]
    PixmapAllocation { width: u32, height: u32 },

    #[error("encode error: {0}")]
    Encode(String),

    #[error("render cancelled")]
    Cancelled,
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        RenderError::Encode(err.to_string())
    }
}

impl From<png::EncodingError> for RenderError {
    fn from(err: png::EncodingError) -> Self {
        RenderError::Encode(err.to_string())
    }
}
