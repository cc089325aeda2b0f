//! Shared test utilities for the darkroom test suite.
//!
//! Synthetic image constructors and in-memory encoders. The gradients use
//! co-prime channel steps so neighboring pixels differ in every channel;
//! convolution and interpolation bugs show up as concrete pixel mismatches
//! instead of cancelling out on flat test data.

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

/// RGB gradient with wrapping channel ramps.
pub fn gradient_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            ((x * 17) % 256) as u8,
            ((y * 13) % 256) as u8,
            (((x + y) * 7) % 256) as u8,
        ])
    })
}

/// RGBA gradient with wrapping channel ramps and opaque alpha.
pub fn gradient_rgba(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            ((x * 17) % 256) as u8,
            ((y * 13) % 256) as u8,
            (((x + y) * 7) % 256) as u8,
            255,
        ])
    })
}

/// Uniform RGBA image.
pub fn solid_rgba(width: u32, height: u32, pixel: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(pixel))
}

/// Encode an image to PNG bytes in memory.
pub fn png_bytes(img: &RgbImage) -> Vec<u8> {
    encode(img, ImageFormat::Png)
}

/// Encode an image to JPEG bytes in memory.
pub fn jpeg_bytes(img: &RgbImage) -> Vec<u8> {
    encode(img, ImageFormat::Jpeg)
}

fn encode(img: &RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format).unwrap();
    buf.into_inner()
}
