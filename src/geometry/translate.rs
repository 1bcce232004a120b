//! Moving regions.
//!
//! Two operations live here:
//!
//! - [`translate_region`] moves a region's anchor to a drag target. Only
//!   point, box and circle regions have an anchor; the [`Reposition`] trait is
//!   implemented for exactly those shapes, and polygon and pixel regions come
//!   back unchanged.
//! - [`offset_region`] shifts any region by a delta.

use crate::region::{BoxShape, CircleShape, PixelShape, PointShape, PolygonShape, Region, Shape};

/// Shapes that can be moved to a target point.
pub trait Reposition: Sized {
    /// Returns this shape moved so that its anchor lands on `(x, y)`.
    fn reposition(&self, x: f64, y: f64) -> Self;
}

impl Reposition for PointShape {
    fn reposition(&self, x: f64, y: f64) -> Self {
        PointShape { x, y }
    }
}

/// The target is the new center of the box.
impl Reposition for BoxShape {
    fn reposition(&self, x: f64, y: f64) -> Self {
        BoxShape {
            x: x - self.w / 2.0,
            y: y - self.h / 2.0,
            ..*self
        }
    }
}

/// The target is the new center. Each radius grows by the distance the
/// center moved along its axis, so the edge on the far side of the move
/// stays put.
impl Reposition for CircleShape {
    fn reposition(&self, x: f64, y: f64) -> Self {
        CircleShape {
            x,
            y,
            xr: self.xr + (x - self.x),
            yr: self.yr + (y - self.y),
        }
    }
}

impl Region {
    /// Moves the region's anchor to `(x, y)`, or returns `None` if this kind
    /// of region has no anchor (polygon, pixel).
    pub fn try_reposition(&self, x: f64, y: f64) -> Option<Region> {
        let shape = match &self.shape {
            Shape::Point(p) => Shape::Point(p.reposition(x, y)),
            Shape::Box(b) => Shape::Box(b.reposition(x, y)),
            Shape::Circle(c) => Shape::Circle(c.reposition(x, y)),
            Shape::Polygon(_) | Shape::Pixel(_) => return None,
        };
        Some(self.with_shape(shape))
    }
}

/// Moves `region` to the drag target `(x, y)`.
///
/// - point: set to `(x, y)`
/// - box: `(x, y)` becomes the center, size unchanged
/// - circle: center set to `(x, y)`, radii grow by the distance moved
/// - polygon, pixel: returned unchanged
///
/// Metadata is always copied as-is. Use
/// [`RegionKind::supports_reposition`](crate::region::RegionKind::supports_reposition)
/// or [`Region::try_reposition`] to tell whether anything moved.
pub fn translate_region(region: &Region, x: f64, y: f64) -> Region {
    region
        .try_reposition(x, y)
        .unwrap_or_else(|| region.clone())
}

/// Shifts every coordinate of `region` by `(dx, dy)`.
///
/// Sizes and radii are unchanged. Works for every region kind.
pub fn offset_region(region: &Region, dx: f64, dy: f64) -> Region {
    let shape = match &region.shape {
        Shape::Point(p) => Shape::Point(PointShape {
            x: p.x + dx,
            y: p.y + dy,
        }),
        Shape::Box(b) => Shape::Box(BoxShape {
            x: b.x + dx,
            y: b.y + dy,
            ..*b
        }),
        Shape::Circle(c) => Shape::Circle(CircleShape {
            x: c.x + dx,
            y: c.y + dy,
            ..*c
        }),
        Shape::Polygon(poly) => Shape::Polygon(PolygonShape {
            open: poly.open,
            points: poly.points.iter().map(|v| v.offset(dx, dy)).collect(),
        }),
        Shape::Pixel(PixelShape::Raster { sx, sy, w, h, src }) => {
            Shape::Pixel(PixelShape::Raster {
                sx: sx + dx,
                sy: sy + dy,
                w: *w,
                h: *h,
                src: src.clone(),
            })
        }
        Shape::Pixel(PixelShape::Outline { points }) => Shape::Pixel(PixelShape::Outline {
            points: points.iter().map(|v| v.offset(dx, dy)).collect(),
        }),
    };
    region.with_shape(shape)
}
