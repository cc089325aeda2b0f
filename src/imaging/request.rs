//! Operation requests: the data handed from the presentation layer to the
//! dispatcher.
//!
//! A request describes *what* to do, not *how* to do it. Exactly one
//! [`OperationRequest`] variant is built per invocation, and parameters
//! belong to their variant only: `factor` does not exist for a crop, and a
//! crop rectangle does not exist for a resize. The dispatcher consumes the
//! request with an exhaustive `match`, so an unknown operation cannot be
//! represented at all.
//!
//! ## Crop rectangles
//!
//! Crop coordinates arrive as a single free-text string of four
//! comma-separated integers, `"left,top,right,bottom"`, mirroring the text
//! field users type into. [`CropRect::parse`] is the one place that string
//! is interpreted:
//! - `"10,10,50,50"` → left=10, top=10, right=50, bottom=50
//! - `"0, 0, 200, 200"` → whitespace around tokens is tolerated
//! - `"10,10,50"` / `"10,10,50,50,0"` → wrong token count, parse error
//! - `"a,b,c,d"` → non-integer token, parse error
//!
//! Parsing accepts any integers (including negative or inverted
//! rectangles); *semantic* validation against the target image happens in
//! the dispatcher, which is the component that knows the image bounds.

use clap::ValueEnum;
use std::fmt;
use thiserror::Error;

/// Enhancement axis for the `Enhance` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EnhanceKind {
    /// Scale luminance. Factor 0 is black, 1 the original, 2 twice as bright.
    Brightness,
    /// Scale deviation from mean gray. Factor 0 is a flat gray image.
    Contrast,
    /// Scale high-frequency emphasis. Factor 0 is a smoothed image.
    Sharpness,
}

/// Preset filter for the `Filter` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterKind {
    /// Low-pass smoothing.
    Blur,
    /// Edge-outline extraction — a mostly-white line drawing.
    Contour,
    /// High-frequency emphasis.
    Detail,
    /// Moderate sharpening of edges only.
    EdgeEnhance,
}

/// A crop rectangle parsed from free text.
///
/// Coordinates are kept signed so a nonsensical rectangle survives parsing
/// and can be rejected with a precise message once the image bounds are
/// known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseRectError {
    #[error("expected 4 comma-separated values (left,top,right,bottom), got {0}")]
    WrongCount(usize),
    #[error("'{0}' is not an integer")]
    NotAnInteger(String),
}

impl CropRect {
    /// Parse `"left,top,right,bottom"` into a rectangle.
    pub fn parse(text: &str) -> Result<Self, ParseRectError> {
        let tokens: Vec<&str> = text.split(',').map(str::trim).collect();
        if tokens.len() != 4 {
            return Err(ParseRectError::WrongCount(tokens.len()));
        }
        let mut coords = [0i64; 4];
        for (slot, token) in coords.iter_mut().zip(&tokens) {
            *slot = token
                .parse()
                .map_err(|_| ParseRectError::NotAnInteger((*token).to_string()))?;
        }
        let [left, top, right, bottom] = coords;
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }
}

/// A single transformation plus its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationRequest {
    Enhance { kind: EnhanceKind, factor: f32 },
    Filter { kind: FilterKind },
    Resize { size: u32 },
    Crop { rect: CropRect },
}

/// Operation family name, used to tag exported files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationTag {
    Enhanced,
    Filtered,
    Resized,
    Cropped,
}

impl fmt::Display for OperationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Enhanced => "enhanced",
            Self::Filtered => "filtered",
            Self::Resized => "resized",
            Self::Cropped => "cropped",
        };
        f.write_str(tag)
    }
}

impl OperationRequest {
    /// Tag for the export filename pattern `<tag>_image.jpg`.
    pub fn tag(&self) -> OperationTag {
        match self {
            Self::Enhance { .. } => OperationTag::Enhanced,
            Self::Filter { .. } => OperationTag::Filtered,
            Self::Resize { .. } => OperationTag::Resized,
            Self::Crop { .. } => OperationTag::Cropped,
        }
    }

    /// Human-readable description of the request for CLI summaries.
    pub fn describe(&self) -> String {
        match self {
            Self::Enhance { kind, factor } => format!("enhance {kind:?} x {factor}"),
            Self::Filter { kind } => format!("filter {kind:?}"),
            Self::Resize { size } => format!("resize to {size}x{size}"),
            Self::Crop { rect } => format!(
                "crop to ({},{})-({},{})",
                rect.left, rect.top, rect.right, rect.bottom
            ),
        }
    }
}
