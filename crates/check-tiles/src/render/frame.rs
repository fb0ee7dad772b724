//! Rendered frames and the assembled animation.

use image::RgbaImage;
use tiny_skia::Pixmap;

use crate::color::Rgb;

/// Colors chosen for one tile in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileColors {
    pub fill: Rgb,
    pub check: Rgb,
}

/// One finished canvas, `columns * 50` by `rows * 50` pixels.
///
/// Every pixel is opaque, so the premultiplied RGBA data of the underlying
/// pixmap is also plain RGBA.
#[derive(Debug, Clone)]
pub struct Frame {
    pub(crate) pixmap: Pixmap,
    pub(crate) tiles: Vec<TileColors>,
    pub(crate) columns: u32,
}

impl Frame {
    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Canvas color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        // Pixmap::pixel only bounds-checks the linear index.
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixmap
            .pixel(x, y)
            .map(|p| Rgb::new(p.red(), p.green(), p.blue()))
    }

    /// Colors used for tile `(c, r)`.
    pub fn tile(&self, c: u32, r: u32) -> Option<TileColors> {
        if c >= self.columns {
            return None;
        }
        self.tiles
            .get(r as usize * self.columns as usize + c as usize)
            .copied()
    }

    /// Colors of all tiles in row-major order.
    #[inline]
    pub fn tiles(&self) -> &[TileColors] {
        &self.tiles
    }

    /// RGB bytes with the alpha channel dropped.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixmap
            .data()
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect()
    }

    /// Copy into an `image` buffer for encoding.
    pub fn to_rgba_image(&self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width(), self.height(), self.pixmap.data().to_vec())
    }
}

/// Ordered frames plus timing. One frame for a still image.
#[derive(Debug, Clone)]
pub struct Animation {
    pub frames: Vec<Frame>,
    /// Display time of each frame in milliseconds; loops forever.
    pub frame_delay_ms: u32,
}

impl Animation {
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Canvas size shared by all frames.
    pub fn dimensions(&self) -> (u32, u32) {
        self.frames
            .first()
            .map(|f| (f.width(), f.height()))
            .unwrap_or((0, 0))
    }
}
