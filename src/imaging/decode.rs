//! Decoding uploaded bytes into an in-memory image.
//!
//! The decoder is the leaf of the pipeline: everything downstream consumes
//! its output. It takes an opaque byte buffer, sniffs the actual format from
//! the content (the claimed file extension is never trusted), and produces a
//! [`DynamicImage`]. Decode failures propagate as [`DecodeError`]; the
//! presentation layer is responsible for showing them to the user.

use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("could not determine image format: {0}")]
    UnknownFormat(#[from] std::io::Error),
    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("{0:?} input is not supported (expected JPEG or PNG)")]
    UnsupportedFormat(ImageFormat),
}

/// Formats with decoders compiled in. Kept in sync with the `image`
/// feature list in Cargo.toml.
const SUPPORTED_FORMATS: &[ImageFormat] = &[ImageFormat::Jpeg, ImageFormat::Png];

/// Decode a raw byte buffer into an image.
///
/// The format is sniffed from the magic bytes. Buffers that are not valid
/// JPEG or PNG fail with [`DecodeError`]; a successful decode always has
/// positive width and height.
pub fn decode(raw: &[u8]) -> Result<DynamicImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(raw)).with_guessed_format()?;
    match reader.format() {
        Some(format) if !SUPPORTED_FORMATS.contains(&format) => {
            Err(DecodeError::UnsupportedFormat(format))
        }
        // None: decode() reports the unrecognized content itself.
        _ => Ok(reader.decode()?),
    }
}

/// Sniff the format of a byte buffer without decoding pixel data.
pub fn sniff_format(raw: &[u8]) -> Option<ImageFormat> {
    image::guess_format(raw).ok()
}
