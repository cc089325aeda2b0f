//! CLI output formatting.
//!
//! Each command produces a small report struct; `format_*` functions turn
//! reports into lines (pure, no I/O), and `print_*` wrappers
//! write them to stdout. The same reports serialize to JSON with `--json`
//! for machine consumption.
//!
//! ```text
//! enhance Contrast x 1.5
//!     Input:  300x300
//!     Output: 300x300
//!     Saved: ./enhanced_image.jpg
//! ```

use serde::Serialize;

/// Image dimensions as reported to the user.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Dims {
    pub width: u32,
    pub height: u32,
}

impl Dims {
    pub fn of(image: &image::DynamicImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
        }
    }
}

/// Outcome of one transform invocation.
#[derive(Debug, Clone, Serialize)]
pub struct TransformReport {
    /// Human description of the request, e.g. `enhance Contrast x 1.5`.
    pub operation: String,
    /// Operation family tag used for the export filename.
    pub tag: String,
    pub input: Dims,
    pub output: Dims,
    /// Preview path, when `--out` was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    /// Export path, when `--save` was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exported: Option<String>,
}

/// Outcome of an `info` invocation.
#[derive(Debug, Clone, Serialize)]
pub struct InfoReport {
    pub source: String,
    pub format: String,
    #[serde(flatten)]
    pub dims: Dims,
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn dims_line(label: &str, dims: Dims) -> String {
    format!("{}{} {}x{}", indent(1), label, dims.width, dims.height)
}

pub fn format_transform(report: &TransformReport) -> Vec<String> {
    let mut lines = vec![
        report.operation.clone(),
        dims_line("Input: ", report.input),
        dims_line("Output:", report.output),
    ];
    if let Some(preview) = &report.preview {
        lines.push(format!("{}Preview: {preview}", indent(1)));
    }
    if let Some(exported) = &report.exported {
        lines.push(format!("{}Saved: {exported}", indent(1)));
    }
    lines
}

pub fn format_info(report: &InfoReport) -> Vec<String> {
    vec![
        report.source.clone(),
        format!("{}Format: {}", indent(1), report.format),
        dims_line("Size:  ", report.dims),
    ]
}

pub fn print_transform(report: &TransformReport, json: bool) {
    if json {
        print_json(report);
    } else {
        for line in format_transform(report) {
            println!("{line}");
        }
    }
}

pub fn print_info(report: &InfoReport, json: bool) {
    if json {
        print_json(report);
    } else {
        for line in format_info(report) {
            println!("{line}");
        }
    }
}

fn print_json<T: Serialize>(report: &T) {
    // Reports contain only strings and integers; serialization cannot fail.
    println!(
        "{}",
        serde_json::to_string_pretty(report).expect("report serializes")
    );
}
