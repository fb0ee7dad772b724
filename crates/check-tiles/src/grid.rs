//! Grid sampling: reduce the source to one representative color per tile.
//!
//! Sampling is nearest-neighbor on purpose. Each cell takes the color of
//! the source pixel under its centre, so the output keeps a hard mosaic
//! look instead of an averaged, smoothed one.

use crate::color::Rgb;
use crate::source::{InputError, SourceImage};

/// Grid dimensions in tiles.
///
/// Invariant: `columns >= 1` and `rows >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub columns: u32,
    pub rows: u32,
}

impl GridSpec {
    /// Derive the row count for a source of `width x height` pixels.
    ///
    /// `rows = floor(columns * height / width)`, clamped to at least one row
    /// so very wide sources still produce a single strip of tiles.
    pub fn for_source(width: u32, height: u32, columns: u32) -> Result<Self, InputError> {
        if width == 0 || height == 0 {
            return Err(InputError::EmptyImage { width, height });
        }
        if columns == 0 {
            return Err(InputError::NoColumns);
        }
        let aspect = height as f64 / width as f64;
        let rows = ((columns as f64 * aspect) as u32).max(1);
        Ok(Self { columns, rows })
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

/// A `columns x rows` table of representative colors.
///
/// Built once per render and shared read-only by every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledGrid {
    spec: GridSpec,
    cells: Vec<Rgb>,
}

impl SampledGrid {
    /// Sample `source` down to `spec` with nearest-neighbor lookup.
    pub fn sample(source: &SourceImage, spec: GridSpec) -> Self {
        let xs = nearest_indices(source.width(), spec.columns);
        let ys = nearest_indices(source.height(), spec.rows);

        let mut cells = Vec::with_capacity(spec.cell_count());
        for &y in &ys {
            for &x in &xs {
                cells.push(source.pixel(x, y));
            }
        }

        tracing::debug!(
            columns = spec.columns,
            rows = spec.rows,
            source_width = source.width(),
            source_height = source.height(),
            "Sampled grid"
        );

        Self { spec, cells }
    }

    /// Convenience: derive the [`GridSpec`] from the source aspect ratio and
    /// sample in one step.
    pub fn from_source(source: &SourceImage, columns: u32) -> Result<Self, InputError> {
        let spec = GridSpec::for_source(source.width(), source.height(), columns)?;
        Ok(Self::sample(source, spec))
    }

    #[inline]
    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.spec.columns
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.spec.rows
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Color of cell `(c, r)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, c: u32, r: u32) -> Option<Rgb> {
        if c >= self.spec.columns || r >= self.spec.rows {
            return None;
        }
        self.cells
            .get(r as usize * self.spec.columns as usize + c as usize)
            .copied()
    }

    /// Cells in row-major order, with their `(c, r)` coordinate.
    pub fn iter(&self) -> impl Iterator<Item = ((u32, u32), Rgb)> + '_ {
        let columns = self.spec.columns;
        self.cells.iter().enumerate().map(move |(i, &rgb)| {
            let i = i as u32;
            ((i % columns, i / columns), rgb)
        })
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Rgb] {
        &self.cells
    }
}

/// Source index under the centre of each of `dst_len` destination cells.
fn nearest_indices(src_len: u32, dst_len: u32) -> Vec<u32> {
    let scale = src_len as f64 / dst_len as f64;
    (0..dst_len)
        .map(|i| {
            let centre = (i as f64 + 0.5) * scale;
            (centre as u32).min(src_len - 1)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> SourceImage {
        let pixels: Vec<Rgb> = (0..height)
            .flat_map(|y| (0..width).map(move |x| Rgb::new(x as u8, y as u8, 0)))
            .collect();
        SourceImage::from_pixels(width, height, &pixels).unwrap()
    }

    #[test]
    fn test_rows_follow_aspect_ratio() {
        let spec = GridSpec::for_source(400, 300, 24).unwrap();
        assert_eq!(spec, GridSpec { columns: 24, rows: 18 });
    }

    #[test]
    fn test_rows_truncate() {
        // 10 * 199/200 = 9.95 -> 9
        let spec = GridSpec::for_source(200, 199, 10).unwrap();
        assert_eq!(spec.rows, 9);
    }

    #[test]
    fn test_rows_clamped_to_one() {
        let spec = GridSpec::for_source(1000, 10, 10).unwrap();
        assert_eq!(spec.rows, 1);
    }

    #[test]
    fn test_zero_columns_rejected() {
        assert!(matches!(
            GridSpec::for_source(10, 10, 0),
            Err(InputError::NoColumns)
        ));
    }

    #[test]
    fn test_sample_has_columns_times_rows_cells() {
        let source = gradient(37, 23);
        let grid = SampledGrid::from_source(&source, 12).unwrap();
        assert_eq!(grid.rows(), (12.0 * 23.0 / 37.0) as u32);
        assert_eq!(grid.len(), 12 * grid.rows() as usize);
    }

    #[test]
    fn test_identity_sampling() {
        let source = gradient(4, 4);
        let grid = SampledGrid::from_source(&source, 4).unwrap();
        for ((c, r), rgb) in grid.iter() {
            assert_eq!(rgb, Rgb::new(c as u8, r as u8, 0));
        }
    }

    #[test]
    fn test_nearest_uses_pixel_centres() {
        // 10 px -> 4 cells: centres at 1.25, 3.75, 6.25, 8.75
        assert_eq!(nearest_indices(10, 4), vec![1, 3, 6, 8]);
        // upscale repeats pixels
        assert_eq!(nearest_indices(2, 4), vec![0, 0, 1, 1]);
        assert_eq!(nearest_indices(1, 3), vec![0, 0, 0]);
    }

    #[test]
    fn test_get_out_of_range() {
        let grid = SampledGrid::from_source(&gradient(4, 2), 4).unwrap();
        assert_eq!(grid.get(3, 1), Some(Rgb::new(3, 1, 0)));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let source = gradient(50, 30);
        let a = SampledGrid::from_source(&source, 16).unwrap();
        let b = SampledGrid::from_source(&source, 16).unwrap();
        assert_eq!(a, b);
    }
}
