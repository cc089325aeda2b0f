//! Preset convolution filters.
//!
//! Each filter is a fixed, parameterless kernel applied to the whole image:
//! deterministic, stateless, output dimensions equal input dimensions.
//! Kernels carry a divisor and an offset in addition to their weights, so
//! edge-extraction presets can bias their output into the visible range
//! (Contour sums to zero on flat regions and offsets to white).
//!
//! Border pixels are handled by clamping sample coordinates to the image
//! edge, so corners and edges receive a full kernel's worth of samples.
//!
//! Filters are intentionally not idempotent: applying Blur twice blurs
//! more. The identity-preserving operation in this crate is enhancement at
//! factor 1.0, not filtering.

use super::request::FilterKind;
use image::RgbaImage;
use rayon::prelude::*;

/// A square convolution kernel with divisor and offset.
///
/// The output channel value is `sum(weights * samples) / scale + offset`,
/// rounded and clamped to `[0, 255]`. Alpha is passed through unchanged.
pub(crate) struct Kernel {
    /// Edge length; always odd.
    size: usize,
    weights: &'static [f32],
    scale: f32,
    offset: f32,
}

/// 5×5 low-pass box ring.
#[rustfmt::skip]
const BLUR: Kernel = Kernel {
    size: 5,
    weights: &[
        1.0, 1.0, 1.0, 1.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
    ],
    scale: 16.0,
    offset: 0.0,
};

/// Laplacian edge extraction, biased to white on flat regions.
#[rustfmt::skip]
const CONTOUR: Kernel = Kernel {
    size: 3,
    weights: &[
        -1.0, -1.0, -1.0,
        -1.0,  8.0, -1.0,
        -1.0, -1.0, -1.0,
    ],
    scale: 1.0,
    offset: 255.0,
};

/// High-frequency emphasis on the 4-neighborhood.
#[rustfmt::skip]
const DETAIL: Kernel = Kernel {
    size: 3,
    weights: &[
         0.0, -1.0,  0.0,
        -1.0, 10.0, -1.0,
         0.0, -1.0,  0.0,
    ],
    scale: 6.0,
    offset: 0.0,
};

/// Moderate sharpening across the full 8-neighborhood.
#[rustfmt::skip]
const EDGE_ENHANCE: Kernel = Kernel {
    size: 3,
    weights: &[
        -1.0, -1.0, -1.0,
        -1.0, 10.0, -1.0,
        -1.0, -1.0, -1.0,
    ],
    scale: 2.0,
    offset: 0.0,
};

/// Gentle low-pass; the degenerate image the sharpness enhancer
/// interpolates against. Not exposed as a user-selectable preset.
#[rustfmt::skip]
pub(crate) const SMOOTH: Kernel = Kernel {
    size: 3,
    weights: &[
        1.0, 1.0, 1.0,
        1.0, 5.0, 1.0,
        1.0, 1.0, 1.0,
    ],
    scale: 13.0,
    offset: 0.0,
};

/// Apply a preset filter, producing a new image of identical dimensions.
pub fn apply_filter(src: &RgbaImage, kind: FilterKind) -> RgbaImage {
    let kernel = match kind {
        FilterKind::Blur => &BLUR,
        FilterKind::Contour => &CONTOUR,
        FilterKind::Detail => &DETAIL,
        FilterKind::EdgeEnhance => &EDGE_ENHANCE,
    };
    convolve(src, kernel)
}

/// Convolve the color channels of `src` with `kernel`, rows in parallel.
pub(crate) fn convolve(src: &RgbaImage, kernel: &Kernel) -> RgbaImage {
    let w = src.width() as usize;
    let h = src.height() as usize;
    if w == 0 || h == 0 {
        return src.clone();
    }

    let radius = kernel.size as isize / 2;
    let src_raw = src.as_raw();
    let stride = w * 4;
    let mut dst_raw = vec![0u8; w * h * 4];

    dst_raw
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row_out)| {
            for x in 0..w {
                let mut sum = [0.0f32; 3];
                for ky in 0..kernel.size {
                    // Clamp sample coordinates at the border.
                    let sy = (y as isize + ky as isize - radius).clamp(0, h as isize - 1) as usize;
                    for kx in 0..kernel.size {
                        let sx =
                            (x as isize + kx as isize - radius).clamp(0, w as isize - 1) as usize;
                        let weight = kernel.weights[ky * kernel.size + kx];
                        let idx = sy * stride + sx * 4;
                        sum[0] += src_raw[idx] as f32 * weight;
                        sum[1] += src_raw[idx + 1] as f32 * weight;
                        sum[2] += src_raw[idx + 2] as f32 * weight;
                    }
                }
                let pi = x * 4;
                for c in 0..3 {
                    let v = sum[c] / kernel.scale + kernel.offset;
                    row_out[pi + c] = v.round().clamp(0.0, 255.0) as u8;
                }
                row_out[pi + 3] = src_raw[y * stride + pi + 3];
            }
        });

    RgbaImage::from_raw(w as u32, h as u32, dst_raw).expect("buffer sized from dimensions")
}
