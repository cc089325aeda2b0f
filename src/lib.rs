//! # Darkroom
//!
//! A small image workbench: point it at a JPEG or PNG, apply one of a small
//! set of transformations — brightness/contrast/sharpness enhancement,
//! preset convolution filters, square resize, rectangular crop — inspect
//! the result, and optionally save it to disk.
//!
//! # Architecture: Decode → Dispatch → Export
//!
//! Every invocation is one stateless pass through three stages:
//!
//! ```text
//! 1. Decode    bytes           →  DynamicImage    (format sniffed, never trusted)
//! 2. Dispatch  image + request →  new image       (pure, input never mutated)
//! 3. Export    image + tag     →  <tag>_image.jpg (explicit, user-triggered)
//! ```
//!
//! The separation exists for three reasons:
//!
//! - **Purity**: dispatch is a function from (image, request) to image —
//!   no I/O, no ambient state, so every transform property is unit
//!   testable on synthetic pixels.
//! - **One side effect**: only the exporter touches the filesystem, and
//!   only on an explicit save. A failed save never corrupts a preview.
//! - **Thin presentation**: the CLI owns parameter collection and range
//!   checks; the core owns structural validation. Each layer's contract is
//!   documented where it lives.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging::decode`] | bytes → image, with format sniffing |
//! | [`imaging::request`] | [`imaging::OperationRequest`] and parameter types, crop-string parsing |
//! | [`imaging::dispatch`] | the single [`imaging::apply`] entry point |
//! | [`imaging::export`] | JPEG export under the `<tag>_image.jpg` pattern |
//! | [`output`] | CLI report formatting (pure `format_*`, `print_*` wrappers, `--json`) |
//!
//! # Design Decisions
//!
//! ## One Operation Per Invocation
//!
//! Operations are mutually exclusive, not composable: a request carries
//! exactly one variant, and there is no pipeline type. Users who want a
//! blur of a crop run the tool twice. This keeps the dispatch surface a
//! single exhaustive `match` and keeps every operation's contract
//! independently testable.
//!
//! ## Requests Are Data
//!
//! [`imaging::OperationRequest`] describes *what* to do, never *how*.
//! Parameters live in their variant only — a crop has no factor, a resize
//! has no rectangle — so invalid parameter combinations are
//! unrepresentable rather than runtime errors.
//!
//! ## Square Resize Is Deliberate
//!
//! Resize produces exactly `size × size`, ignoring aspect ratio. That is
//! the tool's contract (matching its preset-driven UI heritage), not a
//! missing feature; aspect-preserving scaling is out of scope.
//!
//! ## Fail Loud, Never Clamp
//!
//! A crop rectangle that is inverted, empty, or out of bounds is rejected
//! with a message naming the rectangle and the image bounds. Silently
//! clamping would "succeed" with an image the user didn't ask for.

pub mod imaging;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
