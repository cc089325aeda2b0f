//! Brightness, contrast, and sharpness enhancement.
//!
//! Every enhancement kind is the same operation with a different anchor:
//! pick the kind's *degenerate* image (what factor 0 produces) and linearly
//! interpolate each color channel between the degenerate and the original:
//!
//! ```text
//! out = degenerate + factor × (original − degenerate)
//! ```
//!
//! | Kind | Degenerate (factor 0) | factor 2 |
//! |---|---|---|
//! | Brightness | black | twice as bright |
//! | Contrast | flat gray at the mean luminance | doubled deviation |
//! | Sharpness | smooth-kernel result | edge-amplified |
//!
//! Degenerate values are integral, so `factor = 1.0` reproduces the input
//! bit for bit, which is the round-trip property callers rely on. The factor range
//! `[0.1, 2.0]` is the presentation layer's contract and is not re-checked
//! here; any finite factor produces a defined (clamped) result.
//!
//! Alpha is passed through unchanged.

use super::filter::{SMOOTH, convolve};
use super::request::EnhanceKind;
use image::RgbaImage;
use rayon::prelude::*;

/// Apply one enhancement axis at the given factor.
pub fn enhance(src: &RgbaImage, kind: EnhanceKind, factor: f32) -> RgbaImage {
    match kind {
        EnhanceKind::Brightness => interpolate_toward(src, factor, |_| [0.0; 3]),
        EnhanceKind::Contrast => {
            let gray = mean_luminance(src);
            interpolate_toward(src, factor, move |_| [gray; 3])
        }
        EnhanceKind::Sharpness => {
            let smoothed = convolve(src, &SMOOTH);
            let raw = smoothed.as_raw();
            interpolate_toward(src, factor, |i| {
                [
                    raw[i * 4] as f32,
                    raw[i * 4 + 1] as f32,
                    raw[i * 4 + 2] as f32,
                ]
            })
        }
    }
}

/// Mean luminance of the image, ITU-R 601 weights, rounded to an integral
/// gray level.
fn mean_luminance(src: &RgbaImage) -> f32 {
    let pixels = (src.width() as u64 * src.height() as u64).max(1);
    let total: f64 = src
        .pixels()
        .map(|p| {
            let [r, g, b, _] = p.0;
            (299.0 * r as f64 + 587.0 * g as f64 + 114.0 * b as f64) / 1000.0
        })
        .sum();
    (total / pixels as f64).round() as f32
}

/// Per-channel linear interpolation between a degenerate image and `src`.
///
/// `degenerate` maps a pixel index (`y * width + x`) to the degenerate RGB
/// values for that pixel.
fn interpolate_toward<D>(src: &RgbaImage, factor: f32, degenerate: D) -> RgbaImage
where
    D: Fn(usize) -> [f32; 3] + Sync,
{
    let w = src.width() as usize;
    let h = src.height() as usize;
    if w == 0 || h == 0 {
        return src.clone();
    }

    let src_raw = src.as_raw();
    let stride = w * 4;
    let mut dst_raw = vec![0u8; w * h * 4];

    dst_raw
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row_out)| {
            let row_in = &src_raw[y * stride..(y + 1) * stride];
            for x in 0..w {
                let pi = x * 4;
                let anchor = degenerate(y * w + x);
                for c in 0..3 {
                    let v = row_in[pi + c] as f32;
                    let out = anchor[c] + factor * (v - anchor[c]);
                    row_out[pi + c] = out.round().clamp(0.0, 255.0) as u8;
                }
                row_out[pi + 3] = row_in[pi + 3];
            }
        });

    RgbaImage::from_raw(w as u32, h as u32, dst_raw).expect("buffer sized from dimensions")
}
