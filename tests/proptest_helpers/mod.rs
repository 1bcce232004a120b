#![allow(dead_code)]

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};
use regionkit::geometry::EnclosingBox;
use regionkit::region::{
    BoxShape, CircleShape, PixelShape, PointShape, PolygonShape, Region, RegionId, RegionMeta,
    Shape, Vertex,
};

pub const EPS: f64 = 1e-9;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Coordinates on a quarter-unit grid: exactly representable, and short
/// enough in decimal that JSON output parses back to the same bits.
pub fn arb_coord() -> BoxedStrategy<f64> {
    (-40_000i32..40_000).prop_map(|v| v as f64 / 4.0).boxed()
}

pub fn arb_size() -> BoxedStrategy<f64> {
    (0i32..20_000).prop_map(|v| v as f64 / 4.0).boxed()
}

pub fn arb_vertex() -> BoxedStrategy<Vertex> {
    (arb_coord(), arb_coord())
        .prop_map(|(x, y)| Vertex::new(x, y))
        .boxed()
}

pub fn arb_vertices(max: usize) -> BoxedStrategy<Vec<Vertex>> {
    prop::collection::vec(arb_vertex(), 1..=max).boxed()
}

pub fn arb_region_id() -> BoxedStrategy<RegionId> {
    prop_oneof![
        (0i64..1_000_000).prop_map(RegionId::Int),
        "[a-z][a-z0-9-]{0,11}".prop_map(RegionId::Str),
    ]
    .boxed()
}

pub fn arb_meta() -> BoxedStrategy<RegionMeta> {
    (
        arb_region_id(),
        proptest::option::of("[a-z]{1,8}"),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        "#[0-9a-f]{6}",
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(prop::collection::vec("[a-z]{1,6}", 0..4)),
    )
        .prop_map(
            |(id, cls, locked, visible, color, editing_labels, highlighted, tags)| RegionMeta {
                id,
                cls,
                locked,
                visible,
                color,
                editing_labels,
                highlighted,
                tags,
            },
        )
        .boxed()
}

pub fn arb_point() -> BoxedStrategy<Shape> {
    (arb_coord(), arb_coord())
        .prop_map(|(x, y)| Shape::Point(PointShape { x, y }))
        .boxed()
}

pub fn arb_box() -> BoxedStrategy<Shape> {
    (arb_coord(), arb_coord(), arb_size(), arb_size())
        .prop_map(|(x, y, w, h)| Shape::Box(BoxShape { x, y, w, h }))
        .boxed()
}

pub fn arb_circle() -> BoxedStrategy<Shape> {
    (arb_coord(), arb_coord(), arb_size(), arb_size())
        .prop_map(|(x, y, xr, yr)| Shape::Circle(CircleShape { x, y, xr, yr }))
        .boxed()
}

pub fn arb_polygon() -> BoxedStrategy<Shape> {
    (proptest::option::of(any::<bool>()), arb_vertices(12))
        .prop_map(|(open, points)| Shape::Polygon(PolygonShape { open, points }))
        .boxed()
}

pub fn arb_pixel() -> BoxedStrategy<Shape> {
    // Raster sizes start at a quarter unit: the writer rejects a zero w/h.
    let raster = (
        arb_coord(),
        arb_coord(),
        (1i32..20_000).prop_map(|v| v as f64 / 4.0),
        (1i32..20_000).prop_map(|v| v as f64 / 4.0),
        "[a-z]{1,8}\\.png",
    )
        .prop_map(|(sx, sy, w, h, src)| Shape::Pixel(PixelShape::Raster { sx, sy, w, h, src }));
    let outline = arb_vertices(12).prop_map(|points| Shape::Pixel(PixelShape::Outline { points }));

    prop_oneof![raster, outline].boxed()
}

pub fn arb_shape() -> BoxedStrategy<Shape> {
    prop_oneof![arb_point(), arb_box(), arb_circle(), arb_polygon(), arb_pixel()].boxed()
}

pub fn arb_region() -> BoxedStrategy<Region> {
    (arb_meta(), arb_shape())
        .prop_map(|(meta, shape)| Region { meta, shape })
        .boxed()
}

pub fn arb_region_with(shape: BoxedStrategy<Shape>) -> BoxedStrategy<Region> {
    (arb_meta(), shape)
        .prop_map(|(meta, shape)| Region { meta, shape })
        .boxed()
}

pub fn arb_regions(max: usize) -> BoxedStrategy<Vec<Region>> {
    prop::collection::vec(arb_region(), 0..=max).boxed()
}

pub fn approx_box(left: &EnclosingBox, right: &EnclosingBox, eps: f64) -> bool {
    (left.x - right.x).abs() <= eps
        && (left.y - right.y).abs() <= eps
        && (left.w - right.w).abs() <= eps
        && (left.h - right.h).abs() <= eps
}
