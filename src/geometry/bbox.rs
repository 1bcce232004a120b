//! The axis-aligned enclosing box returned by the geometry functions.

use serde::{Deserialize, Serialize};

/// An axis-aligned box in XYWH form: `(x, y)` is the top-left corner and
/// `(w, h)` the size.
///
/// One exception exists for compatibility: an enclosing box computed for a
/// circle with [`CircleExtent::EdgeCoordinates`] carries the right and bottom
/// edge coordinates in `w` and `h`. See [`CircleExtent`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EnclosingBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl EnclosingBox {
    /// Creates a new box from its top-left corner and size.
    #[inline]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Creates a new box from its corner coordinates (xmin, ymin, xmax, ymax).
    #[inline]
    pub fn from_xyxy(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self::new(xmin, ymin, xmax - xmin, ymax - ymin)
    }

    /// Converts to corner form (xmin, ymin, xmax, ymax).
    #[inline]
    pub fn to_xyxy(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.right(), self.bottom())
    }

    /// Returns the right edge x coordinate.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Returns the bottom edge y coordinate.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Returns the area of the box.
    ///
    /// May be negative if the box is malformed.
    #[inline]
    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    /// Returns the center point.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Returns true if all fields are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()
    }

    /// Returns true if `(x, y)` lies inside the box or on its edge.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Returns the smallest box containing both `self` and `other`.
    pub fn union(&self, other: &EnclosingBox) -> EnclosingBox {
        EnclosingBox::from_xyxy(
            self.x.min(other.x),
            self.y.min(other.y),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }
}

/// How the enclosing box of a circle region is expressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CircleExtent {
    /// `(x - xr, y - yr, x + xr, y + yr)`: `w` and `h` hold the right and
    /// bottom edges, not a size. This is what existing callers expect.
    #[default]
    EdgeCoordinates,
    /// `(x - xr, y - yr, 2 * xr, 2 * yr)`: the same XYWH convention as every
    /// other region kind.
    Size,
}

/// Options for enclosing box computation.
#[derive(Clone, Debug, Default)]
pub struct EnclosingBoxOptions {
    /// Convention for circle regions.
    pub circle_extent: CircleExtent,
}
