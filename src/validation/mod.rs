//! Region set validation.
//!
//! The geometry functions trust their input. This module is where a region
//! collection gets checked before it is handed to them:
//! - Collection integrity (unique ids)
//! - Metadata quality (non-empty colors and class labels)
//! - Geometric validity (finite coordinates, non-negative sizes and radii,
//!   non-empty point lists)

mod report;

pub use report::{IssueCode, IssueContext, Severity, ValidationIssue, ValidationReport};

use std::collections::HashMap;

use crate::region::{PixelShape, Region, RegionId, Shape, Vertex};

/// Options for validation behavior.
///
/// `validate_regions` reports every issue regardless of `strict`; callers
/// decide whether warnings fail the run (see the `validate` subcommand).
#[derive(Clone, Debug, Default)]
pub struct ValidateOptions {
    /// If true, treat warnings as errors.
    pub strict: bool,
}

/// Validates a region set and returns a report of all issues found.
pub fn validate_regions(regions: &[Region], _opts: &ValidateOptions) -> ValidationReport {
    let mut report = ValidationReport::new();
    let mut seen_ids: HashMap<&RegionId, usize> = HashMap::new();

    for (index, region) in regions.iter().enumerate() {
        let context = IssueContext::Region {
            id: region.id().to_string(),
            index,
        };

        if let Some(first_idx) = seen_ids.get(region.id()) {
            report.add(ValidationIssue::error(
                IssueCode::DuplicateRegionId,
                format!(
                    "Duplicate region id {} (first seen at index {})",
                    region.id(),
                    first_idx
                ),
                context.clone(),
            ));
        } else {
            seen_ids.insert(region.id(), index);
        }

        validate_metadata(region, &context, &mut report);
        validate_shape(&region.shape, &context, &mut report);
    }

    report
}

fn validate_metadata(region: &Region, context: &IssueContext, report: &mut ValidationReport) {
    if region.meta.color.trim().is_empty() {
        report.add(ValidationIssue::warning(
            IssueCode::EmptyColor,
            "Empty color",
            context.clone(),
        ));
    }

    if region.meta.cls.as_deref().is_some_and(|cls| cls.is_empty()) {
        report.add(ValidationIssue::warning(
            IssueCode::EmptyClassLabel,
            "Empty class label (omit 'cls' instead)",
            context.clone(),
        ));
    }
}

fn validate_shape(shape: &Shape, context: &IssueContext, report: &mut ValidationReport) {
    match shape {
        Shape::Point(p) => {
            if not_finite(&[p.x, p.y]) {
                report_not_finite(&[p.x, p.y], context, report);
            }
        }
        Shape::Box(b) => {
            let values = [b.x, b.y, b.w, b.h];
            if not_finite(&values) {
                report_not_finite(&values, context, report);
                return;
            }
            check_size(b.w, b.h, context, report);
            if b.w == 0.0 || b.h == 0.0 {
                report.add(ValidationIssue::warning(
                    IssueCode::ZeroSizeBox,
                    format!("Zero-size box {}x{}", b.w, b.h),
                    context.clone(),
                ));
            }
        }
        Shape::Circle(c) => {
            let values = [c.x, c.y, c.xr, c.yr];
            if not_finite(&values) {
                report_not_finite(&values, context, report);
                return;
            }
            if c.xr < 0.0 || c.yr < 0.0 {
                report.add(ValidationIssue::error(
                    IssueCode::NegativeRadius,
                    format!("Negative radius (xr {}, yr {})", c.xr, c.yr),
                    context.clone(),
                ));
            }
        }
        Shape::Polygon(poly) => {
            if check_points(&poly.points, context, report) && !poly.is_open() && poly.points.len() < 3
            {
                report.add(ValidationIssue::warning(
                    IssueCode::DegeneratePolygon,
                    format!(
                        "Closed polygon has only {} vertex/vertices",
                        poly.points.len()
                    ),
                    context.clone(),
                ));
            }
        }
        Shape::Pixel(PixelShape::Outline { points }) => {
            check_points(points, context, report);
        }
        Shape::Pixel(PixelShape::Raster { sx, sy, w, h, src }) => {
            let values = [*sx, *sy, *w, *h];
            if not_finite(&values) {
                report_not_finite(&values, context, report);
                return;
            }
            check_size(*w, *h, context, report);
            if *w == 0.0 || *h == 0.0 {
                report.add(ValidationIssue::error(
                    IssueCode::ZeroSizeRaster,
                    format!("Zero-size raster {}x{}", w, h),
                    context.clone(),
                ));
            }
            if src.is_empty() {
                report.add(ValidationIssue::warning(
                    IssueCode::EmptyPixelSource,
                    "Raster pixel region has no src",
                    context.clone(),
                ));
            }
        }
    }
}

fn not_finite(values: &[f64]) -> bool {
    values.iter().any(|v| !v.is_finite())
}

/// Returns true if the points are non-empty and all finite.
fn check_points(points: &[Vertex], context: &IssueContext, report: &mut ValidationReport) -> bool {
    if points.is_empty() {
        report.add(ValidationIssue::error(
            IssueCode::EmptyPointSet,
            "No points",
            context.clone(),
        ));
        return false;
    }

    if let Some((i, v)) = points.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        report.add(ValidationIssue::error(
            IssueCode::CoordinateNotFinite,
            format!("Non-finite vertex {} at position {}", format_vertex(v), i),
            context.clone(),
        ));
        return false;
    }

    true
}

fn check_size(w: f64, h: f64, context: &IssueContext, report: &mut ValidationReport) {
    if w < 0.0 || h < 0.0 {
        report.add(ValidationIssue::error(
            IssueCode::NegativeSize,
            format!("Negative size {}x{}", w, h),
            context.clone(),
        ));
    }
}

fn report_not_finite(values: &[f64], context: &IssueContext, report: &mut ValidationReport) {
    let joined = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    report.add(ValidationIssue::error(
        IssueCode::CoordinateNotFinite,
        format!("Non-finite coordinates ({})", joined),
        context.clone(),
    ));
}

fn format_vertex(v: &Vertex) -> String {
    format!("[{}, {}]", v.x, v.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::{BoxShape, CircleShape, PointShape, PolygonShape};

    fn valid_regions() -> Vec<Region> {
        vec![
            Region::new(1i64, "red", Shape::Point(PointShape { x: 1.0, y: 2.0 })),
            Region::new(
                2i64,
                "blue",
                Shape::Box(BoxShape {
                    x: 0.0,
                    y: 0.0,
                    w: 4.0,
                    h: 2.0,
                }),
            ),
            Region::new(
                "poly",
                "green",
                Shape::Polygon(PolygonShape::closed([
                    Vertex::new(1.0, 1.0),
                    Vertex::new(4.0, 2.0),
                    Vertex::new(2.0, 5.0),
                ])),
            ),
        ]
    }

    fn validate(regions: &[Region]) -> ValidationReport {
        validate_regions(regions, &ValidateOptions::default())
    }

    #[test]
    fn test_valid_regions() {
        let report = validate(&valid_regions());
        assert!(
            report.is_clean(),
            "Expected no issues, got: {:?}",
            report.issues
        );
    }

    #[test]
    fn test_duplicate_region_id() {
        let mut regions = valid_regions();
        regions.push(Region::new(
            1i64,
            "red",
            Shape::Point(PointShape { x: 0.0, y: 0.0 }),
        ));

        let report = validate(&regions);
        assert_eq!(report.error_count(), 1);
        assert!(report.has(IssueCode::DuplicateRegionId));
    }

    #[test]
    fn test_int_and_string_ids_are_distinct() {
        let mut regions = valid_regions();
        regions.push(Region::new(
            "1",
            "red",
            Shape::Point(PointShape { x: 0.0, y: 0.0 }),
        ));

        assert!(validate(&regions).is_clean());
    }

    #[test]
    fn test_empty_color_and_class() {
        let mut regions = valid_regions();
        regions[0].meta.color = String::new();
        regions[1].meta.cls = Some(String::new());

        let report = validate(&regions);
        assert_eq!(report.warning_count(), 2);
        assert!(report.has(IssueCode::EmptyColor));
        assert!(report.has(IssueCode::EmptyClassLabel));
    }

    #[test]
    fn test_non_finite_point() {
        let regions = vec![Region::new(
            1i64,
            "red",
            Shape::Point(PointShape {
                x: f64::NAN,
                y: 0.0,
            }),
        )];
        assert!(validate(&regions).has(IssueCode::CoordinateNotFinite));
    }

    #[test]
    fn test_negative_box_size() {
        let regions = vec![Region::new(
            1i64,
            "red",
            Shape::Box(BoxShape {
                x: 0.0,
                y: 0.0,
                w: -1.0,
                h: 2.0,
            }),
        )];
        let report = validate(&regions);
        assert!(report.has(IssueCode::NegativeSize));
        assert!(!report.has(IssueCode::ZeroSizeBox));
    }

    #[test]
    fn test_zero_size_box_is_warning() {
        let regions = vec![Region::new(
            1i64,
            "red",
            Shape::Box(BoxShape {
                x: 0.0,
                y: 0.0,
                w: 0.0,
                h: 2.0,
            }),
        )];
        let report = validate(&regions);
        assert!(report.is_ok());
        assert!(report.has(IssueCode::ZeroSizeBox));
    }

    #[test]
    fn test_negative_radius() {
        let regions = vec![Region::new(
            1i64,
            "red",
            Shape::Circle(CircleShape {
                x: 0.0,
                y: 0.0,
                xr: 1.0,
                yr: -1.0,
            }),
        )];
        assert!(validate(&regions).has(IssueCode::NegativeRadius));
    }

    #[test]
    fn test_empty_polygon() {
        let regions = vec![Region::new(
            1i64,
            "red",
            Shape::Polygon(PolygonShape::closed(Vec::new())),
        )];
        let report = validate(&regions);
        assert!(report.has(IssueCode::EmptyPointSet));
        assert!(!report.has(IssueCode::DegeneratePolygon));
    }

    #[test]
    fn test_two_vertex_closed_polygon_is_degenerate() {
        let closed = Region::new(
            1i64,
            "red",
            Shape::Polygon(PolygonShape::closed([
                Vertex::new(0.0, 0.0),
                Vertex::new(1.0, 1.0),
            ])),
        );
        assert!(validate(&[closed]).has(IssueCode::DegeneratePolygon));

        let open = Region::new(
            2i64,
            "red",
            Shape::Polygon(PolygonShape {
                open: Some(true),
                points: vec![Vertex::new(0.0, 0.0), Vertex::new(1.0, 1.0)],
            }),
        );
        assert!(validate(&[open]).is_clean());
    }

    #[test]
    fn test_outline_with_infinite_vertex() {
        let regions = vec![Region::new(
            1i64,
            "red",
            Shape::Pixel(PixelShape::Outline {
                points: vec![Vertex::new(0.0, 0.0), Vertex::new(f64::INFINITY, 1.0)],
            }),
        )];
        let report = validate(&regions);
        assert!(report.has(IssueCode::CoordinateNotFinite));
        assert!(report.issues[0].message.contains("position 1"));
    }

    #[test]
    fn test_zero_size_raster_is_error() {
        let regions = vec![Region::new(
            "m",
            "red",
            Shape::Pixel(PixelShape::Raster {
                sx: 1.0,
                sy: 2.0,
                w: 0.0,
                h: 5.0,
                src: "a.png".into(),
            }),
        )];
        let report = validate(&regions);
        assert_eq!(report.error_count(), 1);
        assert!(report.has(IssueCode::ZeroSizeRaster));
    }

    #[test]
    fn test_raster_without_src() {
        let regions = vec![Region::new(
            1i64,
            "red",
            Shape::Pixel(PixelShape::Raster {
                sx: 0.0,
                sy: 0.0,
                w: 10.0,
                h: 10.0,
                src: String::new(),
            }),
        )];
        let report = validate(&regions);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has(IssueCode::EmptyPixelSource));
    }
}
