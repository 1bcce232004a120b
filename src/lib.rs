//! Regionkit: region model and geometry for image annotation surfaces.
//!
//! An annotation surface draws regions (points, boxes, polygons, ellipses and
//! pixel masks) over an image and lets the user drag them around. Regionkit
//! holds the data model for those regions and the two geometric operations
//! the surface needs from it: the enclosing box of a region (for hit tests
//! and viewport fitting) and moving a region to a drag target.
//!
//! # Modules
//!
//! - [`region`]: Region types and their JSON interchange format
//! - [`geometry`]: Enclosing boxes and translation
//! - [`validation`]: Region set validation and error reporting
//! - [`error`]: Error types for regionkit operations

pub mod error;
pub mod geometry;
pub mod region;
pub mod validation;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

pub use error::RegionError;

use geometry::{CircleExtent, EnclosingBox, EnclosingBoxOptions};
use region::Region;

/// The regionkit CLI application.
#[derive(Parser)]
#[command(name = "regionkit")]
#[command(version, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print the enclosing box of every region in a file.
    Bounds(BoundsArgs),
    /// Move one region to a target point.
    Move(MoveArgs),
    /// Validate a region file for errors and warnings.
    Validate(ValidateArgs),
}

/// Arguments for the bounds subcommand.
#[derive(clap::Args)]
struct BoundsArgs {
    /// Region JSON file (an array of regions or a single region).
    input: PathBuf,

    /// Box convention for circles ('edges' or 'size').
    #[arg(long, default_value = "edges")]
    circle_extent: String,

    /// Output format ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the move subcommand.
#[derive(clap::Args)]
struct MoveArgs {
    /// Region JSON file.
    input: PathBuf,

    /// Id of the region to move.
    #[arg(long)]
    id: String,

    /// Target x coordinate.
    #[arg(long, allow_negative_numbers = true)]
    x: f64,

    /// Target y coordinate.
    #[arg(long, allow_negative_numbers = true)]
    y: f64,

    /// Write the updated regions here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

/// Arguments for the validate subcommand.
#[derive(clap::Args)]
struct ValidateArgs {
    /// Region JSON file to validate.
    input: PathBuf,

    /// Treat warnings as errors (exit non-zero if any warnings).
    #[arg(long)]
    strict: bool,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Run the regionkit CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), RegionError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Bounds(args)) => run_bounds(args),
        Some(Commands::Move(args)) => run_move(args),
        Some(Commands::Validate(args)) => run_validate(args),
        None => {
            println!("regionkit {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Region model and geometry for image annotation surfaces.");
            println!();
            println!("Run 'regionkit --help' for usage information.");
            Ok(())
        }
    }
}

/// One line of `bounds` output.
#[derive(Serialize)]
struct BoundsRow<'a> {
    id: String,
    #[serde(rename = "type")]
    kind: &'a str,
    #[serde(flatten)]
    bounds: EnclosingBox,
}

/// Execute the bounds subcommand.
fn run_bounds(args: BoundsArgs) -> Result<(), RegionError> {
    let circle_extent = match args.circle_extent.as_str() {
        "edges" => CircleExtent::EdgeCoordinates,
        "size" => CircleExtent::Size,
        other => {
            return Err(RegionError::UnsupportedFormat(format!(
                "circle extent '{}' (supported: edges, size)",
                other
            )));
        }
    };
    let opts = EnclosingBoxOptions { circle_extent };

    let regions = region::io_json::read_regions_json(&args.input)?;
    let boxes = geometry::enclosing_boxes(&regions, &opts)?;

    let rows: Vec<BoundsRow<'_>> = regions
        .iter()
        .zip(boxes)
        .map(|(region, bounds)| BoundsRow {
            id: region.id().to_string(),
            kind: region.kind().as_str(),
            bounds,
        })
        .collect();

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&rows)?),
        "text" => {
            for row in &rows {
                println!(
                    "{}\t{}\tx={} y={} w={} h={}",
                    row.id, row.kind, row.bounds.x, row.bounds.y, row.bounds.w, row.bounds.h
                );
            }
        }
        other => {
            return Err(RegionError::UnsupportedFormat(format!(
                "'{}' (supported: text, json)",
                other
            )));
        }
    }

    Ok(())
}

/// Execute the move subcommand.
fn run_move(args: MoveArgs) -> Result<(), RegionError> {
    let regions = region::io_json::read_regions_json(&args.input)?;

    let index = regions
        .iter()
        .position(|r| r.id().matches(&args.id))
        .ok_or_else(|| RegionError::RegionNotFound(args.id.clone()))?;

    if !regions[index].kind().supports_reposition() {
        eprintln!(
            "note: {} region {} has no anchor and was left unchanged",
            regions[index].kind(),
            args.id
        );
    }

    let updated: Vec<Region> = regions
        .iter()
        .enumerate()
        .map(|(i, r)| {
            if i == index {
                geometry::translate_region(r, args.x, args.y)
            } else {
                r.clone()
            }
        })
        .collect();

    match args.out {
        Some(path) => region::io_json::write_regions_json(&path, &updated)?,
        None => println!("{}", region::io_json::to_json_string(&updated)?),
    }

    Ok(())
}

/// Execute the validate subcommand.
fn run_validate(args: ValidateArgs) -> Result<(), RegionError> {
    let regions = region::io_json::read_regions_json(&args.input)?;

    let opts = validation::ValidateOptions {
        strict: args.strict,
    };
    let report = validation::validate_regions(&regions, &opts);

    match args.output.as_str() {
        "json" => {
            #[derive(Serialize)]
            struct JsonReport<'a> {
                error_count: usize,
                warning_count: usize,
                issues: &'a [validation::ValidationIssue],
            }
            let out = JsonReport {
                error_count: report.error_count(),
                warning_count: report.warning_count(),
                issues: &report.issues,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        _ => {
            print!("{}", report);
        }
    }

    let has_errors = report.error_count() > 0;
    let has_warnings = report.warning_count() > 0;

    if has_errors || (args.strict && has_warnings) {
        Err(RegionError::ValidationFailed {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            report,
        })
    } else {
        Ok(())
    }
}
