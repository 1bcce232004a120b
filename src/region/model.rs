//! The region value type: shared annotation metadata plus a shape.
//!
//! Regions are immutable values. Nothing in this crate mutates a region in
//! place; geometry functions take `&Region` and hand back a new value of the
//! same kind.

use serde::{Deserialize, Serialize};

use super::ids::RegionId;
use super::shape::{RegionKind, Shape};

/// Annotation metadata shared by every region kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionMeta {
    /// Identifier assigned by the owner of the region collection.
    pub id: RegionId,

    /// Semantic class label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cls: Option<String>,

    /// Edit lock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,

    /// Display color, e.g. `"#f44336"`.
    pub color: String,

    #[serde(
        default,
        rename = "editingLabels",
        skip_serializing_if = "Option::is_none"
    )]
    pub editing_labels: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlighted: Option<bool>,

    /// Free-form tags, in insertion order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl RegionMeta {
    /// Creates metadata with only the required fields set.
    pub fn new(id: impl Into<RegionId>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cls: None,
            locked: None,
            visible: None,
            color: color.into(),
            editing_labels: None,
            highlighted: None,
            tags: None,
        }
    }
}

/// An annotation region.
///
/// Serializes to a single flat JSON object: the metadata fields, a `type`
/// tag, and the shape's own fields side by side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    #[serde(flatten)]
    pub meta: RegionMeta,

    #[serde(flatten)]
    pub shape: Shape,
}

impl Region {
    /// Creates a new region with the minimum required fields.
    pub fn new(id: impl Into<RegionId>, color: impl Into<String>, shape: Shape) -> Self {
        Self {
            meta: RegionMeta::new(id, color),
            shape,
        }
    }

    /// Returns the region's kind. This never changes over a region's life.
    pub fn kind(&self) -> RegionKind {
        self.shape.kind()
    }

    /// Returns the region's id.
    pub fn id(&self) -> &RegionId {
        &self.meta.id
    }

    /// Sets the class label.
    pub fn with_class(mut self, cls: impl Into<String>) -> Self {
        self.meta.cls = Some(cls.into());
        self
    }

    /// Sets the tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meta.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Marks the region as locked against editing.
    pub fn locked(mut self) -> Self {
        self.meta.locked = Some(true);
        self
    }

    /// Marks the region as hidden.
    pub fn hidden(mut self) -> Self {
        self.meta.visible = Some(false);
        self
    }

    /// Returns a copy of this region with a different shape of the same kind.
    ///
    /// Used by the geometry functions so that metadata is always carried over
    /// unchanged.
    pub(crate) fn with_shape(&self, shape: Shape) -> Self {
        debug_assert_eq!(self.kind(), shape.kind());
        Self {
            meta: self.meta.clone(),
            shape,
        }
    }
}
