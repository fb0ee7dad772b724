//! Frame assembly: run the tile renderer over the whole grid, once per frame.

use tiny_skia::Pixmap;

use super::frame::{Animation, Frame, TileColors};
use super::progress::{CancelToken, Progress};
use super::RenderConfig;
use crate::api::RenderError;
use crate::grid::SampledGrid;
use crate::tile::{self, SLOT_SIZE};
use crate::wave::phase_for;

/// Draws frames for one sampled grid under one configuration.
///
/// Frames are independent of each other: any frame can be rendered on its
/// own and the result only depends on its index.
pub struct FrameAssembler<'a> {
    config: &'a RenderConfig,
    grid: &'a SampledGrid,
    thickness: f32,
}

impl<'a> FrameAssembler<'a> {
    pub fn new(config: &'a RenderConfig, grid: &'a SampledGrid) -> Self {
        Self {
            config,
            grid,
            thickness: tile::check_thickness(config.thickness_ratio),
        }
    }

    /// Frames this assembler produces: one for a static pattern.
    #[inline]
    pub fn frame_count(&self) -> u32 {
        self.config.effective_frames()
    }

    /// Canvas size in pixels.
    #[inline]
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            self.grid.columns() * SLOT_SIZE,
            self.grid.rows() * SLOT_SIZE,
        )
    }

    /// Render frame `index` of [`frame_count`](Self::frame_count).
    pub fn render_frame(&self, index: u32) -> Result<Frame, RenderError> {
        let (width, height) = self.canvas_size();
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::PixmapAllocation { width, height })?;
        tile::fill_background(&mut pixmap, self.config.background);

        let phase = phase_for(index, self.frame_count());
        let spec = self.grid.spec();
        let mut tiles = Vec::with_capacity(self.grid.len());

        for ((c, r), original) in self.grid.iter() {
            let wave = self
                .config
                .pattern
                .value(c, r, spec, phase, self.config.speed);
            let fill = tile::tile_color(original, wave);
            let check = tile::check_color(fill, self.config.check_color);
            tile::draw_tile(&mut pixmap, c, r, fill, check, self.thickness);
            tiles.push(TileColors { fill, check });
        }

        Ok(Frame {
            pixmap,
            tiles,
            columns: spec.columns,
        })
    }

    /// Render every frame in order.
    ///
    /// `cancel` is checked after each completed frame. On cancellation or
    /// any error the frames rendered so far are dropped.
    pub fn render_all(
        &self,
        progress: &mut dyn Progress,
        cancel: &CancelToken,
    ) -> Result<Animation, RenderError> {
        let total = self.frame_count();
        let mut frames = Vec::with_capacity(total as usize);

        for index in 0..total {
            frames.push(self.render_frame(index)?);
            progress.frame_rendered(index + 1, total);

            if cancel.is_cancelled() {
                tracing::info!(frame = index + 1, total = total, "Render cancelled");
                return Err(RenderError::Cancelled);
            }
        }

        Ok(Animation {
            frames,
            frame_delay_ms: self.config.frame_delay_ms(),
        })
    }
}
