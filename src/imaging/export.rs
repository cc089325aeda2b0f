//! Saving results to disk.
//!
//! Export is the one side effect in the crate, and it is explicit: the
//! presentation layer calls [`export`] only on the user's save action. The
//! file name is fixed by the operation family (`enhanced_image.jpg`,
//! `filtered_image.jpg`, `resized_image.jpg`, or `cropped_image.jpg`),
//! always JPEG regardless of the input format, overwriting any existing
//! file of that name without confirmation. The image written is the
//! transformed result the user is looking at.

use super::request::OperationTag;
use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("encode failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// JPEG quality setting (1-100). Clamped on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u8);

impl Quality {
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// Where and how to write exported files.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory the tagged file is written into.
    pub dir: PathBuf,
    pub quality: Quality,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            quality: Quality::default(),
        }
    }
}

/// Write `image` as `<tag>_image.jpg` under the configured directory.
///
/// Returns the path written. JPEG carries no alpha, so the image is
/// flattened to RGB8 before encoding.
pub fn export(
    image: &DynamicImage,
    tag: OperationTag,
    config: &ExportConfig,
) -> Result<PathBuf, ExportError> {
    let path = config.dir.join(format!("{tag}_image.jpg"));
    let file = File::create(&path)?;
    let writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(writer, config.quality.value());
    image.to_rgb8().write_with_encoder(encoder)?;
    Ok(path)
}

/// Write a preview image to an arbitrary path, format chosen by extension.
///
/// JPEG targets are flattened to RGB8 first; anything else (PNG) keeps its
/// channels.
pub fn write_preview(image: &DynamicImage, path: &Path) -> Result<(), ExportError> {
    let is_jpeg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg"));
    if is_jpeg {
        DynamicImage::ImageRgb8(image.to_rgb8()).save(path)?;
    } else {
        image.save(path)?;
    }
    Ok(())
}
