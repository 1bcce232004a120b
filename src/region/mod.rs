//! The region data model.
//!
//! A [`Region`] is one annotation on an image: shared metadata (id, class,
//! color, tags, UI flags) plus a [`Shape`], which is one of five kinds:
//!
//! | kind | payload |
//! |---|---|
//! | `point` | [`PointShape`]: a single coordinate |
//! | `box` | [`BoxShape`]: top-left corner and size |
//! | `polygon` | [`PolygonShape`]: ordered vertices, optionally open |
//! | `circle` | [`CircleShape`]: center and independent x/y radii |
//! | `pixel` | [`PixelShape`]: a raster mask rectangle or a freehand outline |
//!
//! The JSON shape of a region (flat object, `type` tag, `[x, y]` vertex
//! pairs) is the interchange format used by [`io_json`].
//!
//! # Example
//!
//! ```
//! use regionkit::region::{Region, Shape, BoxShape};
//!
//! let region = Region::new(
//!     "r1",
//!     "#4caf50",
//!     Shape::Box(BoxShape { x: 10.0, y: 20.0, w: 30.0, h: 40.0 }),
//! )
//! .with_class("car");
//!
//! assert_eq!(region.kind().as_str(), "box");
//! ```

mod coord;
mod ids;
pub mod io_json;
mod model;
mod shape;

pub use coord::Vertex;
pub use ids::RegionId;
pub use model::{Region, RegionMeta};
pub use shape::{BoxShape, CircleShape, PixelShape, PointShape, PolygonShape, RegionKind, Shape};
