//! Decoded source raster.
//!
//! The pipeline reads the source exactly once, when the grid is sampled.
//! Everything downstream works on the [`SampledGrid`](crate::SampledGrid).

use std::path::Path;

use image::RgbImage;
use thiserror::Error;

use crate::color::Rgb;

/// Errors for unusable source images or grid requests.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("source image has zero size ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("could not decode source image: {0}")]
    Decode(String),

    #[error("pixel buffer holds {actual} bytes, expected {expected} for {width}x{height} RGB")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("grid needs at least one column")]
    NoColumns,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// An immutable RGB raster loaded from user input.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: RgbImage,
}

impl SourceImage {
    /// Decode PNG, JPEG or GIF bytes.
    ///
    /// Any color type is converted to 8-bit RGB; alpha is discarded. For
    /// animated input only the first frame is used.
    pub fn decode(bytes: &[u8]) -> Result<Self, InputError> {
        let decoded =
            image::load_from_memory(bytes).map_err(|e| InputError::Decode(e.to_string()))?;
        Self::from_image(decoded.to_rgb8())
    }

    /// Read and decode an image file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::decode(&bytes)
    }

    /// Wrap a tightly packed RGB8 buffer (`width * height * 3` bytes).
    pub fn from_rgb8(width: u32, height: u32, data: Vec<u8>) -> Result<Self, InputError> {
        let expected = width as usize * height as usize * 3;
        let actual = data.len();
        let pixels = RgbImage::from_raw(width, height, data).ok_or(InputError::BufferSize {
            width,
            height,
            expected,
            actual,
        })?;
        Self::from_image(pixels)
    }

    /// Build a source from individual pixels in row-major order.
    pub fn from_pixels(width: u32, height: u32, pixels: &[Rgb]) -> Result<Self, InputError> {
        let data = pixels.iter().flat_map(|p| p.to_bytes()).collect();
        Self::from_rgb8(width, height, data)
    }

    fn from_image(pixels: RgbImage) -> Result<Self, InputError> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(InputError::EmptyImage { width, height });
        }
        Ok(Self { pixels })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Color at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        Rgb::from(*self.pixels.get_pixel(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(img: &RgbImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let mut img = RgbImage::new(3, 2);
        img.put_pixel(2, 1, image::Rgb([10, 20, 30]));
        let source = SourceImage::decode(&png_bytes(&img)).unwrap();

        assert_eq!(source.width(), 3);
        assert_eq!(source.height(), 2);
        assert_eq!(source.pixel(2, 1), Rgb::new(10, 20, 30));
        assert_eq!(source.pixel(0, 0), Rgb::BLACK);
    }

    #[test]
    fn test_decode_drops_alpha() {
        let mut img = image::RgbaImage::new(1, 1);
        img.put_pixel(0, 0, image::Rgba([200, 100, 50, 0]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();

        let source = SourceImage::decode(buf.get_ref()).unwrap();
        assert_eq!(source.pixel(0, 0), Rgb::new(200, 100, 50));
    }

    #[test]
    fn test_decode_garbage_is_input_error() {
        let err = SourceImage::decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, InputError::Decode(_)));
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = SourceImage::from_rgb8(0, 5, Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            InputError::EmptyImage {
                width: 0,
                height: 5
            }
        ));
    }

    #[test]
    fn test_buffer_size_mismatch() {
        let err = SourceImage::from_rgb8(2, 2, vec![0; 5]).unwrap_err();
        assert!(matches!(
            err,
            InputError::BufferSize {
                expected: 12,
                actual: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_from_pixels_row_major() {
        let source =
            SourceImage::from_pixels(2, 1, &[Rgb::WHITE, Rgb::new(1, 2, 3)]).unwrap();
        assert_eq!(source.pixel(0, 0), Rgb::WHITE);
        assert_eq!(source.pixel(1, 0), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_open_missing_file() {
        let err = SourceImage::open("/nonexistent/source.png").unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }
}
