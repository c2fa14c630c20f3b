//! Marquee: preview images on a physical LED matrix sign.
//!
//! An LED marquee is a grid of discrete lights with a fixed size and
//! spacing. Marquee takes an image with one pixel per LED and produces a
//! self-contained HTML document that draws each pixel as an LED, sized and
//! spaced in the same proportions as the real board.
//!
//! # Modules
//!
//! - [`geometry`]: Physical LED size/pitch to integer cell geometry
//! - [`markup`]: HTML preview generation
//! - [`pixels`]: Pixel grid access and LED grid dimensions
//! - [`source`]: Image file decoding
//! - [`config`]: Board profiles
//! - [`error`]: Error types for marquee operations
//!
//! # Example
//!
//! ```
//! use marquee::config::BoardProfile;
//! use marquee::pixels::{PixelBuffer, Rgb};
//!
//! let board = BoardProfile {
//!     columns: 2,
//!     rows: 1,
//!     ..Default::default()
//! };
//! let pixels = PixelBuffer::new(2, 1, vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)]).unwrap();
//! let doc = marquee::render(&board, &pixels).unwrap();
//! assert!(doc.as_str().contains("#ff0000"));
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod markup;
pub mod pixels;
pub mod source;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;

pub use error::MarqueeError;

use config::BoardProfile;
use geometry::GeometryReport;
use markup::{LedStyle, MarkupDocument};
use pixels::PixelGrid;

/// Resolves a board's geometry and builds the preview for `pixels`.
///
/// Fails only on an invalid board; a pixel grid of the wrong size yields
/// the placeholder document.
pub fn render(
    board: &BoardProfile,
    pixels: &impl PixelGrid,
) -> Result<MarkupDocument, MarqueeError> {
    let geometry = board.physical_spec()?.resolve()?;
    let grid = board.grid_spec()?;
    let options = board.render_options()?;
    Ok(markup::build(grid, &geometry, pixels, &options))
}

/// The marquee CLI application.
#[derive(Parser)]
#[command(name = "marquee")]
#[command(version, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Render an image as an HTML preview of the LED board.
    Render(RenderArgs),
    /// Show the cell geometry resolved from the board's LED size and pitch.
    Geometry(GeometryArgs),
    /// Check an image's dimensions against the board without decoding it.
    Inspect(InspectArgs),
}

/// Board description shared by all subcommands.
///
/// Explicit values override the profile file, which overrides the
/// reference board.
#[derive(clap::Args)]
struct BoardArgs {
    /// Board profile file (.json, .yaml or .yml).
    #[arg(long, env = "MARQUEE_BOARD")]
    board: Option<PathBuf>,

    /// Number of LEDs per row.
    #[arg(long, env = "MARQUEE_COLUMNS")]
    columns: Option<u32>,

    /// Number of LED rows.
    #[arg(long, env = "MARQUEE_ROWS")]
    rows: Option<u32>,

    /// LED diameter.
    #[arg(long, env = "MARQUEE_LED_SIZE")]
    led_size: Option<f64>,

    /// Horizontal center-to-center LED spacing.
    #[arg(long, env = "MARQUEE_PITCH_H")]
    pitch_h: Option<f64>,

    /// Vertical center-to-center LED spacing.
    #[arg(long, env = "MARQUEE_PITCH_V")]
    pitch_v: Option<f64>,

    /// LED shape.
    #[arg(long, value_enum, env = "MARQUEE_STYLE")]
    style: Option<LedStyle>,

    /// CSS pixels per geometry unit.
    #[arg(long, env = "MARQUEE_SCALE")]
    scale: Option<u32>,
}

impl BoardArgs {
    fn into_profile(self) -> Result<BoardProfile, MarqueeError> {
        let mut profile = match &self.board {
            Some(path) => BoardProfile::load(path)?,
            None => BoardProfile::default(),
        };

        if let Some(columns) = self.columns {
            profile.columns = columns;
        }
        if let Some(rows) = self.rows {
            profile.rows = rows;
        }
        if let Some(led_size) = self.led_size {
            profile.led_size = led_size;
        }
        if let Some(pitch_h) = self.pitch_h {
            profile.pitch_h = pitch_h;
        }
        if let Some(pitch_v) = self.pitch_v {
            profile.pitch_v = pitch_v;
        }
        if let Some(style) = self.style {
            profile.style = style;
        }
        if let Some(scale) = self.scale {
            profile.scale = scale;
        }

        Ok(profile)
    }
}

/// Arguments for the render subcommand.
#[derive(clap::Args)]
struct RenderArgs {
    /// Image with one pixel per LED.
    input: PathBuf,

    #[command(flatten)]
    board: BoardArgs,

    /// Write the HTML here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Exit non-zero when the image size does not match the board
    /// (the placeholder document is still written).
    #[arg(long)]
    strict: bool,
}

/// Arguments for the geometry subcommand.
#[derive(clap::Args)]
struct GeometryArgs {
    #[command(flatten)]
    board: BoardArgs,

    /// Report format ('text' or 'json').
    #[arg(long, default_value = "text")]
    format: String,
}

/// Arguments for the inspect subcommand.
#[derive(clap::Args)]
struct InspectArgs {
    /// Image to check.
    input: PathBuf,

    #[command(flatten)]
    board: BoardArgs,

    /// Report format ('text' or 'json').
    #[arg(long, default_value = "text")]
    format: String,
}

/// Run the marquee CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), MarqueeError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render(args)) => run_render(args),
        Some(Commands::Geometry(args)) => run_geometry(args),
        Some(Commands::Inspect(args)) => run_inspect(args),
        None => {
            println!("marquee {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Preview images on a physical LED matrix sign.");
            println!();
            println!("Run 'marquee --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the render subcommand.
fn run_render(args: RenderArgs) -> Result<(), MarqueeError> {
    let board = args.board.into_profile()?;
    let grid = board.grid_spec()?;
    // Reject a bad board before spending time on decoding.
    let geometry = board.physical_spec()?.resolve()?;
    let options = board.render_options()?;

    let pixels = source::load_pixels(&args.input)?;
    let mismatch = markup::check_dimensions(grid, &pixels).err();
    let doc = markup::build(grid, &geometry, &pixels, &options);

    match &args.output {
        Some(path) => {
            fs::write(path, doc.as_str())?;
            info!("wrote {} preview to {}", grid, path.display());
        }
        None => print!("{}", doc),
    }

    match mismatch {
        Some(mismatch) if args.strict => Err(MarqueeError::DimensionMismatch(mismatch)),
        _ => Ok(()),
    }
}

/// Execute the geometry subcommand.
fn run_geometry(args: GeometryArgs) -> Result<(), MarqueeError> {
    let board = args.board.into_profile()?;
    let physical = board.physical_spec()?;
    let report = GeometryReport::new(physical, physical.resolve()?);

    match args.format.as_str() {
        "json" => print_json(&report),
        "text" => {
            print!("{}", report);
            Ok(())
        }
        other => Err(unsupported_report_format(other)),
    }
}

/// Result of checking an image file against a board.
#[derive(Serialize)]
struct InspectReport {
    image: PathBuf,
    image_width: u32,
    image_height: u32,
    columns: u32,
    rows: u32,
    matches: bool,
}

/// Execute the inspect subcommand.
fn run_inspect(args: InspectArgs) -> Result<(), MarqueeError> {
    let board = args.board.into_profile()?;
    let grid = board.grid_spec()?;
    let (image_width, image_height) = source::probe_dimensions(&args.input)?;
    let matches = (image_width, image_height) == (grid.columns(), grid.rows());

    let report = InspectReport {
        image: args.input,
        image_width,
        image_height,
        columns: grid.columns(),
        rows: grid.rows(),
        matches,
    };

    match args.format.as_str() {
        "json" => print_json(&report)?,
        "text" => {
            println!("Image: {}", report.image.display());
            println!("  Pixels: {}x{}", image_width, image_height);
            println!("  Board:  {} LEDs", grid);
            if matches {
                println!("Image matches the board");
            } else {
                println!("Image does not match the board");
            }
        }
        other => return Err(unsupported_report_format(other)),
    }

    if matches {
        Ok(())
    } else {
        Err(MarqueeError::DimensionMismatch(markup::DimensionMismatch {
            grid,
            image_width,
            image_height,
        }))
    }
}

fn print_json(report: &impl Serialize) -> Result<(), MarqueeError> {
    let json = serde_json::to_string_pretty(report).map_err(MarqueeError::ReportJson)?;
    println!("{}", json);
    Ok(())
}

fn unsupported_report_format(format: &str) -> MarqueeError {
    MarqueeError::UnsupportedFormat(format!("'{}' (supported: text, json)", format))
}
