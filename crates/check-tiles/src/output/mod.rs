//! Encoding of finished frames into a downloadable byte stream.
//!
//! A single frame becomes a PNG; several frames become a looping GIF.

mod gif;
mod png;

pub use self::gif::{encode_gif, encode_gif_cancellable, GifOptions};
pub use self::png::{encode_png, PngOptions};

use crate::api::RenderError;
use crate::render::{Animation, CancelToken};

/// Container format of an encoded render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Gif,
}

impl OutputFormat {
    /// Suggested download filename.
    pub fn filename(self) -> &'static str {
        match self {
            OutputFormat::Png => "check_static.png",
            OutputFormat::Gif => "check_anim.gif",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Gif => "image/gif",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Gif => "gif",
        }
    }
}

/// Options for both encoders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    pub png: PngOptions,
    pub gif: GifOptions,
}

/// The terminal artifact of a render.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub format: OutputFormat,
    pub width: u32,
    pub height: u32,
    pub frame_count: usize,
}

impl EncodedImage {
    #[inline]
    pub fn filename(&self) -> &'static str {
        self.format.filename()
    }

    #[inline]
    pub fn mime(&self) -> &'static str {
        self.format.mime()
    }
}

/// Encode a still as PNG or an animation as GIF.
pub fn encode(animation: &Animation, options: &EncodeOptions) -> Result<EncodedImage, RenderError> {
    encode_cancellable(animation, options, &CancelToken::new())
}

/// Like [`encode`]; a cancelled token stops GIF encoding between frames.
pub fn encode_cancellable(
    animation: &Animation,
    options: &EncodeOptions,
    cancel: &CancelToken,
) -> Result<EncodedImage, RenderError> {
    let (width, height) = animation.dimensions();
    let (format, bytes) = match animation.frames.as_slice() {
        [] => return Err(RenderError::Encode("no frames to encode".to_string())),
        [still] => (OutputFormat::Png, encode_png(still, &options.png)?),
        _ => (
            OutputFormat::Gif,
            encode_gif_cancellable(animation, &options.gif, cancel)?,
        ),
    };

    tracing::debug!(
        format = format.extension(),
        bytes = bytes.len(),
        frames = animation.frame_count(),
        "Encoded render"
    );

    Ok(EncodedImage {
        bytes,
        format,
        width,
        height,
        frame_count: animation.frame_count(),
    })
}
