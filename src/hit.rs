//! Hit-testing pointer locations against the scene.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geom::Point;
use crate::polygon::PolygonId;
use crate::scene::Scene;

/// Test which polygon (if any) is under `pt`.
///
/// Polygons are checked in insertion order and the FIRST match wins, so
/// under overlap the oldest (bottom-most) shape is selected. Inverting the
/// convention to topmost-wins would be a `.rev()` here.
#[must_use]
pub fn hit_test(scene: &Scene, pt: Point) -> Option<PolygonId> {
    scene.iter().find(|polygon| polygon.contains(pt)).map(|polygon| polygon.id)
}
