//! Enclosing box computation.

use serde_json::Value;

use super::bbox::{CircleExtent, EnclosingBox, EnclosingBoxOptions};
use super::GeometryError;
use crate::error::RegionError;
use crate::region::io_json::region_from_value;
use crate::region::{PixelShape, Region, Shape, Vertex};

/// Computes the smallest axis-aligned box containing `region`.
///
/// - point: a zero-size box at the point
/// - box: the box itself
/// - polygon and pixel outline: min/max over all vertices
/// - pixel raster: the source rectangle `(sx, sy, w, h)`
/// - circle: `(x - xr, y - yr, x + xr, y + yr)`, i.e. right/bottom edges in
///   `w`/`h` (see [`CircleExtent`])
///
/// # Errors
/// Returns [`GeometryError::EmptyPointSet`] for a polygon or pixel outline
/// with no vertices.
pub fn compute_enclosing_box(region: &Region) -> Result<EnclosingBox, GeometryError> {
    compute_enclosing_box_with(region, &EnclosingBoxOptions::default())
}

/// Like [`compute_enclosing_box`], with an explicit circle convention.
pub fn compute_enclosing_box_with(
    region: &Region,
    opts: &EnclosingBoxOptions,
) -> Result<EnclosingBox, GeometryError> {
    match &region.shape {
        Shape::Point(p) => Ok(EnclosingBox::new(p.x, p.y, 0.0, 0.0)),
        Shape::Box(b) => Ok(EnclosingBox::new(b.x, b.y, b.w, b.h)),
        Shape::Polygon(poly) => vertex_extent(region, &poly.points),
        Shape::Pixel(PixelShape::Raster { sx, sy, w, h, .. }) => {
            Ok(EnclosingBox::new(*sx, *sy, *w, *h))
        }
        Shape::Pixel(PixelShape::Outline { points }) => vertex_extent(region, points),
        Shape::Circle(c) => Ok(match opts.circle_extent {
            CircleExtent::EdgeCoordinates => {
                EnclosingBox::new(c.x - c.xr, c.y - c.yr, c.x + c.xr, c.y + c.yr)
            }
            CircleExtent::Size => {
                EnclosingBox::new(c.x - c.xr, c.y - c.yr, 2.0 * c.xr, 2.0 * c.yr)
            }
        }),
    }
}

/// Decodes a region from untyped JSON and computes its enclosing box.
///
/// # Errors
/// Returns [`RegionError::UnknownRegionType`] when the `type` tag is not a
/// known kind, plus any decoding or geometry error.
pub fn compute_enclosing_box_of_value(value: &Value) -> Result<EnclosingBox, RegionError> {
    let region = region_from_value(value)?;
    Ok(compute_enclosing_box(&region)?)
}

/// Computes the enclosing box of every region, in order.
pub fn enclosing_boxes(
    regions: &[Region],
    opts: &EnclosingBoxOptions,
) -> Result<Vec<EnclosingBox>, GeometryError> {
    regions
        .iter()
        .map(|region| compute_enclosing_box_with(region, opts))
        .collect()
}

fn vertex_extent(region: &Region, points: &[Vertex]) -> Result<EnclosingBox, GeometryError> {
    let (first, rest) = points.split_first().ok_or_else(|| GeometryError::EmptyPointSet {
        kind: region.kind(),
        id: region.id().clone(),
    })?;

    let (xmin, ymin, xmax, ymax) = rest.iter().fold(
        (first.x, first.y, first.x, first.y),
        |(xmin, ymin, xmax, ymax), v| (xmin.min(v.x), ymin.min(v.y), xmax.max(v.x), ymax.max(v.y)),
    );
    Ok(EnclosingBox::from_xyxy(xmin, ymin, xmax, ymax))
}
