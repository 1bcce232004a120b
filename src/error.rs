use std::path::PathBuf;
use thiserror::Error;

use crate::geometry::GeometryError;
use crate::validation::ValidationReport;

/// The main error type for regionkit operations.
#[derive(Debug, Error)]
pub enum RegionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse regions JSON from {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write regions JSON to {path}: {source}")]
    JsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid region JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown region type '{0}' (expected point, pixel, box, polygon or circle)")]
    UnknownRegionType(String),

    #[error("Region is missing its 'type' field")]
    MissingRegionType,

    #[error("Malformed pixel region {id}: needs either sx/sy/w/h or points")]
    MalformedPixelRegion { id: String },

    #[error("Raster pixel region {id} has zero width or height and cannot be written")]
    DegenerateRaster { id: String },

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("No region with id {0}")]
    RegionNotFound(String),

    #[error("Validation failed with {error_count} error(s) and {warning_count} warning(s)")]
    ValidationFailed {
        error_count: usize,
        warning_count: usize,
        report: ValidationReport,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
