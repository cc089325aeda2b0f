//! Image decoding, transformation, and export — pure Rust.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode (JPEG, PNG)** | `image::ImageReader` with format sniffing |
//! | **Enhance** | per-channel interpolation toward a degenerate image |
//! | **Filter** | fixed kernels + row-parallel convolution (rayon) |
//! | **Resize** | `DynamicImage::resize_exact`, Lanczos3 |
//! | **Crop** | bounds-validated `DynamicImage::crop_imm` |
//! | **Export → JPEG** | `image::codecs::jpeg::JpegEncoder` |
//!
//! The module is split into:
//! - **Decode**: bytes → [`image::DynamicImage`], the handle every
//!   operation consumes
//! - **Request**: [`OperationRequest`] and its parameter types, the data
//!   describing *what* to do
//! - **Dispatch**: [`apply`], the one entry point mapping a request to a
//!   new image
//! - **Enhance** / **Filter**: the pixel work behind the two parameterized
//!   operation families
//! - **Export**: the explicit save-to-disk side effect

pub mod decode;
pub mod dispatch;
mod enhance;
pub mod export;
mod filter;
pub mod request;

pub use decode::{DecodeError, decode, sniff_format};
pub use dispatch::{OperationError, apply};
pub use export::{ExportConfig, ExportError, Quality, export, write_preview};
pub use request::{
    CropRect, EnhanceKind, FilterKind, OperationRequest, OperationTag, ParseRectError,
};
