//! PNG encoding of a single frame.

use crate::api::RenderError;
use crate::render::Frame;

/// PNG encoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngOptions {
    /// Re-compress with oxipng after encoding.
    pub optimize: bool,
}

impl Default for PngOptions {
    fn default() -> Self {
        Self { optimize: true }
    }
}

/// Encode `frame` as an 8-bit RGB PNG.
pub fn encode_png(frame: &Frame, options: &PngOptions) -> Result<Vec<u8>, RenderError> {
    let rgb = frame.to_rgb_bytes();
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, frame.width(), frame.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(if options.optimize {
            png::Compression::Fast
        } else {
            png::Compression::Default
        });
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&rgb)?;
    }

    if !options.optimize {
        return Ok(buf);
    }

    // Fast settings above; oxipng picks filters and re-deflates.
    match oxipng::optimize_from_memory(
        &buf,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => Ok(optimized),
        Err(e) => {
            tracing::warn!(%e, "PNG optimization failed, keeping unoptimized output");
            Ok(buf)
        }
    }
}
