//! Shape payloads for the five region kinds.
//!
//! [`Shape`] is a closed sum type: every geometry function matches on it
//! exhaustively, so adding a sixth kind forces every function to handle it.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::coord::Vertex;

/// The geometry of a region, discriminated by the JSON `type` field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Point(PointShape),
    Pixel(PixelShape),
    Box(BoxShape),
    Polygon(PolygonShape),
    Circle(CircleShape),
}

impl Shape {
    /// Returns the discriminant of this shape.
    pub fn kind(&self) -> RegionKind {
        match self {
            Shape::Point(_) => RegionKind::Point,
            Shape::Pixel(_) => RegionKind::Pixel,
            Shape::Box(_) => RegionKind::Box,
            Shape::Polygon(_) => RegionKind::Polygon,
            Shape::Circle(_) => RegionKind::Circle,
        }
    }
}

/// A single coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointShape {
    pub x: f64,
    pub y: f64,
}

/// An axis-aligned box given by its top-left corner and size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxShape {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// A vertex list. `open` marks an unclosed polyline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolygonShape {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,
    pub points: Vec<Vertex>,
}

impl PolygonShape {
    /// Creates a closed polygon from its vertices.
    pub fn closed(points: impl IntoIterator<Item = Vertex>) -> Self {
        Self {
            open: None,
            points: points.into_iter().collect(),
        }
    }

    /// Returns true if this is an unclosed polyline.
    pub fn is_open(&self) -> bool {
        self.open.unwrap_or(false)
    }
}

/// An ellipse given by its center and independent x/y radii.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircleShape {
    pub x: f64,
    pub y: f64,
    pub xr: f64,
    pub yr: f64,
}

/// A pixel region: either a raster mask anchored by a source rectangle, or a
/// freehand selection outline.
#[derive(Clone, Debug, PartialEq)]
pub enum PixelShape {
    Raster {
        sx: f64,
        sy: f64,
        w: f64,
        h: f64,
        src: String,
    },
    Outline {
        points: Vec<Vertex>,
    },
}

impl PixelShape {
    /// Returns true for a raster whose width or height is zero or NaN.
    ///
    /// Such a raster has no wire form: on decoding, the source rectangle is
    /// ignored and the region is read as an outline (or rejected).
    pub fn is_degenerate_raster(&self) -> bool {
        match self {
            PixelShape::Raster { w, h, .. } => !has_extent(*w) || !has_extent(*h),
            PixelShape::Outline { .. } => false,
        }
    }
}

fn has_extent(v: f64) -> bool {
    v != 0.0 && !v.is_nan()
}

/// All fields a pixel region may carry on the wire, before resolving which
/// of the two forms it is.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawPixel {
    #[serde(default)]
    sx: Option<f64>,
    #[serde(default)]
    sy: Option<f64>,
    #[serde(default)]
    w: Option<f64>,
    #[serde(default)]
    h: Option<f64>,
    #[serde(default)]
    src: Option<String>,
    #[serde(default)]
    points: Option<Vec<Vertex>>,
}

impl RawPixel {
    /// Picks the raster form when `sx`/`sy` are present and `w`/`h` are
    /// non-zero, else the outline form when `points` is present.
    pub(crate) fn into_shape(self) -> Option<PixelShape> {
        fn nonzero(v: Option<f64>) -> Option<f64> {
            v.filter(|v| has_extent(*v))
        }

        if let (Some(sx), Some(sy), Some(w), Some(h)) =
            (self.sx, self.sy, nonzero(self.w), nonzero(self.h))
        {
            return Some(PixelShape::Raster {
                sx,
                sy,
                w,
                h,
                src: self.src.unwrap_or_default(),
            });
        }
        self.points.map(|points| PixelShape::Outline { points })
    }
}

impl Serialize for PixelShape {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        match self {
            PixelShape::Raster { sx, sy, w, h, src } => {
                let mut state = serializer.serialize_struct("PixelShape", 5)?;
                state.serialize_field("sx", sx)?;
                state.serialize_field("sy", sy)?;
                state.serialize_field("w", w)?;
                state.serialize_field("h", h)?;
                state.serialize_field("src", src)?;
                state.end()
            }
            PixelShape::Outline { points } => {
                let mut state = serializer.serialize_struct("PixelShape", 1)?;
                state.serialize_field("points", points)?;
                state.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PixelShape {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawPixel::deserialize(deserializer)?
            .into_shape()
            .ok_or_else(|| D::Error::custom("pixel region needs either sx/sy/w/h or points"))
    }
}

/// The discriminant of a region, without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    Point,
    Pixel,
    Box,
    Polygon,
    Circle,
}

impl RegionKind {
    /// Every region kind, in tag order.
    pub const ALL: [RegionKind; 5] = [
        RegionKind::Point,
        RegionKind::Pixel,
        RegionKind::Box,
        RegionKind::Polygon,
        RegionKind::Circle,
    ];

    /// The JSON `type` tag for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            RegionKind::Point => "point",
            RegionKind::Pixel => "pixel",
            RegionKind::Box => "box",
            RegionKind::Polygon => "polygon",
            RegionKind::Circle => "circle",
        }
    }

    /// Looks up a kind by its JSON `type` tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }

    /// Returns true if regions of this kind can be moved to a target point
    /// with [`translate_region`](crate::geometry::translate_region).
    pub fn supports_reposition(self) -> bool {
        match self {
            RegionKind::Point | RegionKind::Box | RegionKind::Circle => true,
            RegionKind::Pixel | RegionKind::Polygon => false,
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
