//! JSON reading and writing for region sets.
//!
//! A region file holds either a JSON array of regions or a single region
//! object. Each element's `type` tag is checked before typed decoding, so
//! that unknown kinds and malformed pixel regions surface as their own
//! errors instead of a generic serde message.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::model::Region;
use super::shape::{RawPixel, RegionKind, Shape};
use crate::error::RegionError;

/// Reads a region set from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or if any region
/// has an unknown `type`.
pub fn read_regions_json(path: &Path) -> Result<Vec<Region>, RegionError> {
    let file = File::open(path).map_err(RegionError::Io)?;
    let reader = BufReader::new(file);

    let value: Value =
        serde_json::from_reader(reader).map_err(|source| RegionError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?;
    regions_from_value(&value)
}

/// Writes a region set to a JSON file as a pretty-printed array.
///
/// # Errors
/// Returns [`RegionError::DegenerateRaster`] for a raster pixel region with
/// zero width or height (nothing is written), or an error if the file cannot
/// be written.
pub fn write_regions_json(path: &Path, regions: &[Region]) -> Result<(), RegionError> {
    check_writable(regions)?;
    let file = File::create(path).map_err(RegionError::Io)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, regions).map_err(|source| RegionError::JsonWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a region set from a JSON string.
pub fn from_json_str(json: &str) -> Result<Vec<Region>, RegionError> {
    let value: Value = serde_json::from_str(json)?;
    regions_from_value(&value)
}

/// Reads a region set from JSON bytes.
pub fn from_json_slice(bytes: &[u8]) -> Result<Vec<Region>, RegionError> {
    let value: Value = serde_json::from_slice(bytes)?;
    regions_from_value(&value)
}

/// Writes a region set to a pretty-printed JSON string.
///
/// # Errors
/// Returns [`RegionError::DegenerateRaster`] for a raster pixel region with
/// zero width or height.
pub fn to_json_string(regions: &[Region]) -> Result<String, RegionError> {
    check_writable(regions)?;
    Ok(serde_json::to_string_pretty(regions)?)
}

/// Decodes a region set from an already-parsed JSON value (an array of
/// regions, or a single region object).
pub fn regions_from_value(value: &Value) -> Result<Vec<Region>, RegionError> {
    match value {
        Value::Array(items) => items.iter().map(region_from_value).collect(),
        single => Ok(vec![region_from_value(single)?]),
    }
}

/// Decodes a single region from a JSON value.
///
/// # Errors
/// - [`RegionError::MissingRegionType`] if there is no string `type` field
/// - [`RegionError::UnknownRegionType`] if the tag is not one of the five kinds
/// - [`RegionError::MalformedPixelRegion`] if a pixel region has neither a
///   source rectangle nor a point list
pub fn region_from_value(value: &Value) -> Result<Region, RegionError> {
    let tag = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or(RegionError::MissingRegionType)?;
    let kind =
        RegionKind::from_tag(tag).ok_or_else(|| RegionError::UnknownRegionType(tag.to_string()))?;

    if kind == RegionKind::Pixel && RawPixel::deserialize(value)?.into_shape().is_none() {
        return Err(RegionError::MalformedPixelRegion {
            id: id_text(value),
        });
    }

    Ok(Region::deserialize(value)?)
}

/// Rejects regions whose JSON form would not decode back to the same region.
fn check_writable(regions: &[Region]) -> Result<(), RegionError> {
    let degenerate = regions
        .iter()
        .find(|r| matches!(&r.shape, Shape::Pixel(pixel) if pixel.is_degenerate_raster()));
    match degenerate {
        Some(region) => Err(RegionError::DegenerateRaster {
            id: region.id().to_string(),
        }),
        None => Ok(()),
    }
}

fn id_text(value: &Value) -> String {
    match value.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(other) => other.to_string(),
        None => "<no id>".to_string(),
    }
}
