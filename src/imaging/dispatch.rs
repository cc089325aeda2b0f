//! Operation dispatch: one request in, one new image out.
//!
//! [`apply`] is the single entry point for every transformation. Dispatch is
//! a pure function of the request variant: an exhaustive `match`, so an
//! unknown operation is unrepresentable rather than a runtime fallthrough.
//! The input image is never mutated; every arm builds a fresh image.
//!
//! Validation split:
//! - *Range* preconditions (enhancement factor in `[0.1, 2.0]`, resize size
//!   in `[10, 1000]`) belong to the presentation layer and are not
//!   re-checked here.
//! - *Structural* invalidity that would otherwise produce garbage (a zero
//!   resize, a crop rectangle that is inverted or falls outside the image)
//!   is rejected here with [`OperationError::InvalidParameter`], never
//!   silently clamped.

use super::enhance::enhance;
use super::filter::apply_filter;
use super::request::{CropRect, OperationRequest, ParseRectError};
use image::DynamicImage;
use image::imageops::FilterType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OperationError {
    #[error(transparent)]
    ParseRect(#[from] ParseRectError),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for dispatch operations.
pub type Result<T> = std::result::Result<T, OperationError>;

/// Apply a single operation request to an image, producing a new image.
pub fn apply(image: &DynamicImage, request: &OperationRequest) -> Result<DynamicImage> {
    match *request {
        OperationRequest::Enhance { kind, factor } => {
            Ok(enhance(&image.to_rgba8(), kind, factor).into())
        }
        OperationRequest::Filter { kind } => Ok(apply_filter(&image.to_rgba8(), kind).into()),
        OperationRequest::Resize { size } => resize_square(image, size),
        OperationRequest::Crop { rect } => crop(image, rect),
    }
}

/// Resize to exactly `size × size`. The square output is the tool's
/// contract; aspect ratio is not preserved.
fn resize_square(image: &DynamicImage, size: u32) -> Result<DynamicImage> {
    if size == 0 {
        return Err(OperationError::InvalidParameter(
            "resize size must be positive".into(),
        ));
    }
    Ok(image.resize_exact(size, size, FilterType::Lanczos3))
}

/// Crop to a rectangle, rejecting rectangles that leave the image bounds
/// or have non-positive extent.
fn crop(image: &DynamicImage, rect: CropRect) -> Result<DynamicImage> {
    let (width, height) = (i64::from(image.width()), i64::from(image.height()));
    let CropRect {
        left,
        top,
        right,
        bottom,
    } = rect;

    if left < 0 || top < 0 {
        return Err(OperationError::InvalidParameter(format!(
            "crop origin ({left},{top}) must not be negative"
        )));
    }
    if left >= right || top >= bottom {
        return Err(OperationError::InvalidParameter(format!(
            "crop rectangle ({left},{top})-({right},{bottom}) has no area"
        )));
    }
    if right > width || bottom > height {
        return Err(OperationError::InvalidParameter(format!(
            "crop rectangle ({left},{top})-({right},{bottom}) exceeds image bounds {width}x{height}"
        )));
    }

    Ok(image.crop_imm(
        left as u32,
        top as u32,
        (right - left) as u32,
        (bottom - top) as u32,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::request::{EnhanceKind, FilterKind};
    use crate::test_helpers::gradient_rgba;

    fn test_image(w: u32, h: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(gradient_rgba(w, h))
    }

    fn invalid_parameter(result: Result<DynamicImage>) -> String {
        match result {
            Err(OperationError::InvalidParameter(msg)) => msg,
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn enhance_dispatch_preserves_dimensions() {
        let img = test_image(50, 30);
        let out = apply(
            &img,
            &OperationRequest::Enhance {
                kind: EnhanceKind::Contrast,
                factor: 1.5,
            },
        )
        .unwrap();
        assert_eq!((out.width(), out.height()), (50, 30));
        assert_ne!(out.to_rgba8(), img.to_rgba8());
    }

    #[test]
    fn enhance_identity_round_trips_through_dispatch() {
        let img = test_image(20, 20);
        let out = apply(
            &img,
            &OperationRequest::Enhance {
                kind: EnhanceKind::Brightness,
                factor: 1.0,
            },
        )
        .unwrap();
        assert_eq!(out.to_rgba8(), img.to_rgba8());
    }

    #[test]
    fn filter_dispatch_preserves_dimensions() {
        let img = test_image(33, 21);
        for kind in [
            FilterKind::Blur,
            FilterKind::Contour,
            FilterKind::Detail,
            FilterKind::EdgeEnhance,
        ] {
            let out = apply(&img, &OperationRequest::Filter { kind }).unwrap();
            assert_eq!((out.width(), out.height()), (33, 21));
        }
    }

    #[test]
    fn resize_always_square() {
        // Wide, tall, and square inputs all land on size x size.
        for (w, h) in [(200, 50), (50, 200), (64, 64)] {
            let out = apply(&test_image(w, h), &OperationRequest::Resize { size: 120 }).unwrap();
            assert_eq!((out.width(), out.height()), (120, 120));
        }
    }

    #[test]
    fn resize_can_upscale() {
        let out = apply(&test_image(10, 10), &OperationRequest::Resize { size: 40 }).unwrap();
        assert_eq!((out.width(), out.height()), (40, 40));
    }

    #[test]
    fn resize_zero_is_rejected() {
        let msg = invalid_parameter(apply(&test_image(10, 10), &OperationRequest::Resize {
            size: 0,
        }));
        assert!(msg.contains("positive"), "unexpected message: {msg}");
    }

    #[test]
    fn crop_yields_rectangle_extent() {
        let rect = CropRect::parse("10,10,50,50").unwrap();
        let out = apply(&test_image(200, 200), &OperationRequest::Crop { rect }).unwrap();
        assert_eq!((out.width(), out.height()), (40, 40));
    }

    #[test]
    fn crop_copies_the_right_pixels() {
        let img = test_image(100, 100);
        let rect = CropRect::parse("20,30,40,50").unwrap();
        let out = apply(&img, &OperationRequest::Crop { rect }).unwrap();
        assert_eq!(
            out.to_rgba8().get_pixel(0, 0),
            img.to_rgba8().get_pixel(20, 30)
        );
    }

    #[test]
    fn crop_full_image_is_identity() {
        let img = test_image(60, 40);
        let rect = CropRect::parse("0,0,60,40").unwrap();
        let out = apply(&img, &OperationRequest::Crop { rect }).unwrap();
        assert_eq!(out.to_rgba8(), img.to_rgba8());
    }

    #[test]
    fn inverted_crop_is_rejected() {
        let rect = CropRect::parse("50,50,10,10").unwrap();
        let msg = invalid_parameter(apply(&test_image(200, 200), &OperationRequest::Crop {
            rect,
        }));
        assert!(msg.contains("no area"), "unexpected message: {msg}");
    }

    #[test]
    fn negative_crop_origin_is_rejected() {
        let rect = CropRect::parse("-10,0,50,50").unwrap();
        let msg = invalid_parameter(apply(&test_image(200, 200), &OperationRequest::Crop {
            rect,
        }));
        assert!(msg.contains("negative"), "unexpected message: {msg}");
    }

    #[test]
    fn out_of_bounds_crop_is_rejected() {
        let rect = CropRect::parse("0,0,300,300").unwrap();
        let msg = invalid_parameter(apply(&test_image(200, 200), &OperationRequest::Crop {
            rect,
        }));
        assert!(msg.contains("exceeds"), "unexpected message: {msg}");
    }

    #[test]
    fn zero_area_crop_is_rejected() {
        let rect = CropRect::parse("10,10,10,50").unwrap();
        invalid_parameter(apply(&test_image(200, 200), &OperationRequest::Crop { rect }));
    }

    #[test]
    fn apply_never_mutates_its_input() {
        let img = test_image(30, 30);
        let before = img.to_rgba8();
        let _ = apply(&img, &OperationRequest::Filter {
            kind: FilterKind::Blur,
        })
        .unwrap();
        assert_eq!(img.to_rgba8(), before);
    }

    #[test]
    fn parse_errors_convert_into_operation_errors() {
        let err = OperationError::from(ParseRectError::WrongCount(3));
        assert!(matches!(err, OperationError::ParseRect(_)));
        assert_eq!(
            err.to_string(),
            "expected 4 comma-separated values (left,top,right,bottom), got 3"
        );
    }
}
