use check_tiles::tile::SLOT_SIZE;
use check_tiles::{
    CancelToken, CheckRenderer, EncodeOptions, GridSpec, RenderConfig, SampledGrid, SourceImage,
};
use sha2::{Digest, Sha256};
use std::time::Duration;

use crate::error::RenderError;
use crate::models::AppConfig;

/// A finished render, ready to be sent or written.
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub bytes: Vec<u8>,
    pub filename: &'static str,
    pub mime: &'static str,
    /// Quoted hex SHA-256 of `bytes`
    pub etag: String,
    pub frames: usize,
    pub grid: GridSpec,
}

/// Runs renders off the async runtime, bounded by the configured limits.
pub struct RenderService {
    encode: EncodeOptions,
    max_grid_rows: u32,
    max_render_pixels: u64,
    timeout: Duration,
}

impl RenderService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            encode: config.encode_options(),
            max_grid_rows: config.limits.max_grid_rows,
            max_render_pixels: config.limits.max_render_pixels,
            timeout: config.render_timeout(),
        }
    }

    /// Decode `upload` and render it with `config`.
    ///
    /// Uses spawn_blocking to avoid blocking the async runtime during
    /// CPU-intensive drawing and encoding. If the timeout passes, the render
    /// is cancelled after its current frame.
    pub async fn render(
        &self,
        upload: Vec<u8>,
        config: RenderConfig,
    ) -> Result<RenderedImage, RenderError> {
        let encode = self.encode;
        let max_rows = self.max_grid_rows;
        let max_pixels = self.max_render_pixels;
        let cancel = CancelToken::new();
        let task_cancel = cancel.clone();

        let task = tokio::task::spawn_blocking(move || -> Result<RenderedImage, RenderError> {
            let source = SourceImage::decode(&upload)?;
            let grid = checked_spec(&source, config.columns, max_rows)?;
            check_pixel_budget(grid, config.effective_frames(), max_pixels)?;
            let image = CheckRenderer::new(config)
                .encode_options(encode)
                .cancel_token(task_cancel)
                .render(&source)?;
            Ok(RenderedImage {
                etag: etag(&image.bytes),
                filename: image.filename(),
                mime: image.mime(),
                frames: image.frame_count,
                grid,
                bytes: image.bytes,
            })
        });

        match tokio::time::timeout(self.timeout, task).await {
            Ok(joined) => joined.map_err(|e| RenderError::Task(e.to_string()))?,
            Err(_) => {
                cancel.cancel();
                tracing::warn!(timeout_secs = self.timeout.as_secs(), "Render timed out");
                Err(RenderError::Timeout {
                    secs: self.timeout.as_secs(),
                })
            }
        }
    }

    /// Decode `upload` and sample its grid without drawing anything.
    pub async fn sample(&self, upload: Vec<u8>, columns: u32) -> Result<SampledGrid, RenderError> {
        let max_rows = self.max_grid_rows;

        tokio::task::spawn_blocking(move || -> Result<SampledGrid, RenderError> {
            let source = SourceImage::decode(&upload)?;
            let spec = checked_spec(&source, columns, max_rows)?;
            Ok(SampledGrid::sample(&source, spec))
        })
        .await
        .map_err(|e| RenderError::Task(e.to_string()))?
    }
}

fn checked_spec(source: &SourceImage, columns: u32, max_rows: u32) -> Result<GridSpec, RenderError> {
    let spec = GridSpec::for_source(source.width(), source.height(), columns)?;
    if spec.rows > max_rows {
        return Err(RenderError::TooManyRows {
            rows: spec.rows,
            max: max_rows,
        });
    }
    Ok(spec)
}

fn check_pixel_budget(spec: GridSpec, frames: u32, max_pixels: u64) -> Result<(), RenderError> {
    let slot = u64::from(SLOT_SIZE);
    let pixels = u64::from(spec.columns) * slot * u64::from(spec.rows) * slot * u64::from(frames);
    if pixels > max_pixels {
        return Err(RenderError::TooManyPixels {
            pixels,
            max: max_pixels,
        });
    }
    Ok(())
}

fn etag(bytes: &[u8]) -> String {
    format!("\"{}\"", hex::encode(Sha256::digest(bytes)))
}
