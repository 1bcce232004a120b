//! Geometry over regions.
//!
//! Every function here is pure: it borrows a region and returns a fresh
//! value, and dispatches on the region's shape with an exhaustive `match`.
//!
//! # Example
//!
//! ```
//! use regionkit::geometry::{compute_enclosing_box, translate_region, EnclosingBox};
//! use regionkit::region::{Region, Shape, BoxShape};
//!
//! let region = Region::new(1i64, "red", Shape::Box(BoxShape { x: 0.0, y: 0.0, w: 4.0, h: 2.0 }));
//! let moved = translate_region(&region, 10.0, 10.0);
//!
//! assert_eq!(compute_enclosing_box(&moved).unwrap(), EnclosingBox::new(8.0, 9.0, 4.0, 2.0));
//! ```

mod bbox;
mod enclosing;
mod translate;

use thiserror::Error;

use crate::region::{RegionId, RegionKind};

pub use bbox::{CircleExtent, EnclosingBox, EnclosingBoxOptions};
pub use enclosing::{
    compute_enclosing_box, compute_enclosing_box_of_value, compute_enclosing_box_with,
    enclosing_boxes,
};
pub use translate::{offset_region, translate_region, Reposition};

/// Errors from geometry computations on well-typed regions.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GeometryError {
    #[error("{kind} region {id} has no points")]
    EmptyPointSet { kind: RegionKind, id: RegionId },
}
