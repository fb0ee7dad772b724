//! Test fixtures: small source images encoded in memory.

use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Encode an RGB image in the given format
pub fn encode(img: &RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, format).expect("Failed to encode fixture");
    out.into_inner()
}

/// Colorful gradient, bright enough that every tile animates
pub fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (80 + x * 170 / width.max(1)) as u8,
            (80 + y * 170 / height.max(1)) as u8,
            200,
        ])
    })
}

/// PNG upload of [`gradient`]
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    encode(&gradient(width, height), ImageFormat::Png)
}

/// JPEG upload of [`gradient`]
pub fn gradient_jpeg(width: u32, height: u32) -> Vec<u8> {
    encode(&gradient(width, height), ImageFormat::Jpeg)
}

/// Left half white, right half black
pub fn split_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb([255, 255, 255])
        } else {
            Rgb([0, 0, 0])
        }
    });
    encode(&img, ImageFormat::Png)
}
