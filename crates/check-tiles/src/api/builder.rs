//! CheckRenderer builder -- the primary entry point for the crate.
//!
//! [`CheckRenderer`] wires validation, grid sampling, frame assembly and
//! encoding together behind a fluent configuration API.

use super::RenderError;
use crate::grid::SampledGrid;
use crate::output::{self, EncodeOptions, EncodedImage};
use crate::render::{Animation, CancelToken, FrameAssembler, LogProgress, Progress, RenderConfig};
use crate::source::SourceImage;

/// High-level renderer turning a source image into checkmark tiles.
///
/// # Design
///
/// - Constructor takes a complete [`RenderConfig`]; it is validated before
///   any sampling or drawing happens
/// - Configuration methods consume and return `self`
/// - Progress defaults to [`LogProgress`]; cancellation to a token nobody
///   else holds
///
/// # Example
///
/// ```
/// use check_tiles::{CheckRenderer, OutputFormat, RenderConfig, Rgb, SourceImage};
///
/// let source = SourceImage::from_pixels(20, 10, &vec![Rgb::new(200, 40, 90); 200]).unwrap();
/// let config = RenderConfig::default().columns(10);
///
/// let image = CheckRenderer::new(config).render(&source).unwrap();
///
/// assert_eq!(image.format, OutputFormat::Png);
/// assert_eq!((image.width, image.height), (500, 250));
/// ```
pub struct CheckRenderer<'a> {
    config: RenderConfig,
    encode: EncodeOptions,
    cancel: CancelToken,
    progress: Box<dyn Progress + 'a>,
}

impl<'a> CheckRenderer<'a> {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            encode: EncodeOptions::default(),
            cancel: CancelToken::new(),
            progress: Box::new(LogProgress),
        }
    }

    /// Receive a callback after each finished frame.
    pub fn progress(mut self, progress: impl Progress + 'a) -> Self {
        self.progress = Box::new(progress);
        self
    }

    /// Share a token that can stop the render between frames.
    #[inline]
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    #[inline]
    pub fn encode_options(mut self, options: EncodeOptions) -> Self {
        self.encode = options;
        self
    }

    /// Render all frames without encoding them.
    pub fn render_frames(&mut self, source: &SourceImage) -> Result<Animation, RenderError> {
        self.config.validate()?;

        let grid = SampledGrid::from_source(source, self.config.columns)?;
        let assembler = FrameAssembler::new(&self.config, &grid);
        let (width, height) = assembler.canvas_size();

        tracing::info!(
            columns = grid.columns(),
            rows = grid.rows(),
            width = width,
            height = height,
            pattern = %self.config.pattern,
            frames = assembler.frame_count(),
            "Rendering checkmark tiles"
        );

        assembler.render_all(self.progress.as_mut(), &self.cancel)
    }

    /// Render and encode: PNG for a still, looping GIF for an animation.
    pub fn render(mut self, source: &SourceImage) -> Result<EncodedImage, RenderError> {
        let animation = self.render_frames(source)?;
        let encoded = output::encode_cancellable(&animation, &self.encode, &self.cancel)?;

        tracing::info!(
            format = encoded.format.extension(),
            bytes = encoded.bytes.len(),
            frames = encoded.frame_count,
            "Render complete"
        );

        Ok(encoded)
    }
}
