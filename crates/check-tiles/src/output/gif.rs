//! Looping GIF encoding of a frame sequence.

use image::codecs::gif::{GifEncoder, Repeat};
use image::Delay;

use crate::api::RenderError;
use crate::render::{Animation, CancelToken};

/// GIF encoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GifOptions {
    /// Palette quantization speed, 1 (best) to 30 (fastest).
    pub speed: i32,
}

impl Default for GifOptions {
    fn default() -> Self {
        Self { speed: 10 }
    }
}

/// Encode all frames as an infinitely looping GIF.
pub fn encode_gif(animation: &Animation, options: &GifOptions) -> Result<Vec<u8>, RenderError> {
    encode_gif_cancellable(animation, options, &CancelToken::new())
}

/// Like [`encode_gif`], checking `cancel` after each quantized frame.
pub fn encode_gif_cancellable(
    animation: &Animation,
    options: &GifOptions,
    cancel: &CancelToken,
) -> Result<Vec<u8>, RenderError> {
    let delay = Delay::from_numer_denom_ms(animation.frame_delay_ms, 1);
    let mut bytes = Vec::new();
    {
        let mut encoder = GifEncoder::new_with_speed(&mut bytes, options.speed.clamp(1, 30));
        encoder.set_repeat(Repeat::Infinite)?;

        for frame in &animation.frames {
            let rgba = frame.to_rgba_image().ok_or_else(|| {
                RenderError::Encode(format!(
                    "frame buffer does not match {}x{}",
                    frame.width(),
                    frame.height()
                ))
            })?;
            encoder.encode_frame(image::Frame::from_parts(rgba, 0, 0, delay))?;

            if cancel.is_cancelled() {
                tracing::info!("GIF encoding cancelled");
                return Err(RenderError::Cancelled);
            }
        }
    }
    Ok(bytes)
}
