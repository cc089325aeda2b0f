use clap::{Parser, Subcommand};
use darkroom::imaging::{
    self, CropRect, EnhanceKind, ExportConfig, FilterKind, OperationRequest, Quality,
};
use darkroom::output::{self, Dims, InfoReport, TransformReport};
use std::path::{Path, PathBuf};

/// Shared flags for commands that produce an image.
#[derive(clap::Args, Clone)]
struct SaveArgs {
    /// Write the result to this path (format from extension: .png, .jpg)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Save the result as <operation>_image.jpg, overwriting any existing file
    #[arg(long)]
    save: bool,

    /// Directory the --save file is written into
    #[arg(long, default_value = ".")]
    export_dir: PathBuf,

    /// JPEG quality for --save (1-100)
    #[arg(long, default_value_t = 90)]
    quality: u8,
}

fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup — trivial, called exactly once
        Box::leak(format!("{} ({hash})", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "darkroom")]
#[command(about = "Enhance, filter, resize, and crop raster images")]
#[command(long_about = "\
Enhance, filter, resize, and crop raster images

Each invocation reads one JPEG or PNG, applies exactly one operation, and
reports the result. Operations do not compose; run the tool again on its
own output to chain them.

  darkroom enhance photo.jpg --kind contrast --factor 1.5 --out preview.png
  darkroom filter photo.jpg --kind blur --save
  darkroom resize photo.jpg --size 300 --save --export-dir ./thumbs
  darkroom crop photo.jpg --rect '10, 10, 500, 400' --out cut.png
  darkroom info photo.jpg

--out writes a preview wherever you point it; --save writes the fixed
<operation>_image.jpg pattern (always JPEG) into --export-dir.")]
#[command(version = version_string())]
struct Cli {
    /// Emit reports as JSON instead of plain lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Adjust brightness, contrast, or sharpness
    Enhance {
        /// Image to transform
        image: PathBuf,

        /// Enhancement axis
        #[arg(long, value_enum)]
        kind: EnhanceKind,

        /// Enhancement strength; 1.0 leaves the image unchanged
        #[arg(long, default_value_t = 1.0, value_parser = parse_factor)]
        factor: f32,

        #[command(flatten)]
        save: SaveArgs,
    },
    /// Apply a preset filter
    Filter {
        /// Image to transform
        image: PathBuf,

        /// Filter preset
        #[arg(long, value_enum)]
        kind: FilterKind,

        #[command(flatten)]
        save: SaveArgs,
    },
    /// Resize to a square of the given edge length
    Resize {
        /// Image to transform
        image: PathBuf,

        /// Output edge length in pixels; output is always size x size
        #[arg(long, default_value_t = 300, value_parser = clap::value_parser!(u32).range(10..=1000))]
        size: u32,

        #[command(flatten)]
        save: SaveArgs,
    },
    /// Crop to a rectangle
    Crop {
        /// Image to transform
        image: PathBuf,

        /// Crop coordinates as "left,top,right,bottom"
        #[arg(long, default_value = "0, 0, 200, 200")]
        rect: String,

        #[command(flatten)]
        save: SaveArgs,
    },
    /// Show format and dimensions without transforming
    Info {
        /// Image to inspect
        image: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Enhance {
            image,
            kind,
            factor,
            save,
        } => run_transform(
            &image,
            OperationRequest::Enhance { kind, factor },
            &save,
            cli.json,
        ),
        Command::Filter { image, kind, save } => {
            run_transform(&image, OperationRequest::Filter { kind }, &save, cli.json)
        }
        Command::Resize { image, size, save } => {
            run_transform(&image, OperationRequest::Resize { size }, &save, cli.json)
        }
        Command::Crop { image, rect, save } => {
            let rect = CropRect::parse(&rect)?;
            run_transform(&image, OperationRequest::Crop { rect }, &save, cli.json)
        }
        Command::Info { image } => run_info(&image, cli.json),
    }
}

/// Decode → dispatch → report, with optional preview and export writes.
fn run_transform(
    path: &Path,
    request: OperationRequest,
    save: &SaveArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read(path)?;
    let original = imaging::decode(&raw)?;
    let result = imaging::apply(&original, &request)?;

    let preview = match &save.out {
        Some(out) => {
            imaging::write_preview(&result, out)?;
            Some(out.display().to_string())
        }
        None => None,
    };

    let exported = if save.save {
        let config = ExportConfig {
            dir: save.export_dir.clone(),
            quality: Quality::new(save.quality),
        };
        let written = imaging::export(&result, request.tag(), &config)?;
        Some(written.display().to_string())
    } else {
        None
    };

    output::print_transform(
        &TransformReport {
            operation: request.describe(),
            tag: request.tag().to_string(),
            input: Dims::of(&original),
            output: Dims::of(&result),
            preview,
            exported,
        },
        json,
    );
    Ok(())
}

fn run_info(path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read(path)?;
    let format = imaging::sniff_format(&raw)
        .map(|f| format!("{f:?}"))
        .unwrap_or_else(|| "unknown".to_string());
    let image = imaging::decode(&raw)?;

    output::print_info(
        &InfoReport {
            source: path.display().to_string(),
            format,
            dims: Dims::of(&image),
        },
        json,
    );
    Ok(())
}

/// Enhancement factors live in [0.1, 2.0]; the dispatcher trusts this
/// check and does not repeat it.
fn parse_factor(s: &str) -> Result<f32, String> {
    let factor: f32 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if (0.1..=2.0).contains(&factor) {
        Ok(factor)
    } else {
        Err(format!("factor must be in 0.1..=2.0, got {factor}"))
    }
}
