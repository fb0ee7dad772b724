//! check-tiles: render images as grids of rounded checkmark tiles
//!
//! A source image is reduced to one color per grid cell. Every cell becomes
//! a rounded square carrying a checkmark, and an optional wave pattern
//! breathes the lightness of the tiles over a looping animation.
//!
//! # Quick Start
//!
//! The [`CheckRenderer`] builder is the primary entry point:
//!
//! ```
//! use check_tiles::{CheckRenderer, RenderConfig, Rgb, SourceImage, WavePattern};
//!
//! let source = SourceImage::from_pixels(2, 1, &[Rgb::WHITE, Rgb::BLACK]).unwrap();
//! let config = RenderConfig::default()
//!     .columns(10)
//!     .pattern(WavePattern::Concentric)
//!     .total_frames(10);
//!
//! let gif = CheckRenderer::new(config).render(&source).unwrap();
//! assert_eq!(gif.filename(), "check_anim.gif");
//! assert_eq!(gif.frame_count, 10);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! SourceImage            (decoded once, RGB8)
//!     |
//!     v
//! SampledGrid            (nearest-neighbor, columns x rows)
//!     |
//!     v
//! FrameAssembler         (per frame: phase -> wave value per tile
//!     |                   -> tile color -> rounded square + checkmark)
//!     v
//! Animation              (1 frame for Static, N otherwise)
//!     |
//!     v
//! EncodedImage           (PNG still or looping GIF)
//! ```
//!
//! # Tile Colors
//!
//! Two thresholds on the unweighted mean of the RGB channels shape every
//! tile:
//!
//! - A source color darker than 60 is *dark-locked*: it keeps its exact
//!   color in every frame, so black backgrounds never flicker.
//! - A final tile color darker than 40 gets a `(60, 60, 60)` checkmark
//!   instead of the configured one, so the glyph stays visible.
//!
//! All other tiles have their HSV value channel shifted by up to ±0.4,
//! following the wave value of the selected [`WavePattern`].
//!
//! # Determinism
//!
//! Rendering uses no randomness, no clocks and no global state. The same
//! source and [`RenderConfig`] always produce byte-identical output.

pub mod api;
pub mod color;
pub mod grid;
pub mod output;
pub mod render;
pub mod source;
pub mod tile;
pub mod wave;


pub use api::{CheckRenderer, RenderError};
pub use color::{brightness, hex_to_rgb, Hsv, ParseColorError, Rgb};
pub use grid::{GridSpec, SampledGrid};
pub use output::{
    encode, encode_cancellable, EncodeOptions, EncodedImage, GifOptions, OutputFormat, PngOptions,
};
pub use render::{
    Animation, CancelToken, ConfigError, Frame, FrameAssembler, LogProgress, Progress,
    RenderConfig, TileColors,
};
pub use source::{InputError, SourceImage};
pub use wave::{phase_for, ParsePatternError, WavePattern};
