//! The scene: the ordered, owning collection of committed polygons.
//!
//! Insertion order is load-bearing — it is both the draw order (earlier
//! polygons render beneath later ones) and the hit-test order (the first
//! match wins, see [`crate::hit`]). Engines address scene members by
//! [`PolygonId`]; a global erase invalidates every outstanding id.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::polygon::{Polygon, PolygonId};

/// In-memory store of committed polygons.
#[derive(Debug, Default)]
pub struct Scene {
    polygons: Vec<Polygon>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a polygon at the top of the z-order, returning its id.
    pub fn insert(&mut self, polygon: Polygon) -> PolygonId {
        let id = polygon.id;
        self.polygons.push(polygon);
        id
    }

    /// Return a reference to a polygon by id.
    #[must_use]
    pub fn get(&self, id: &PolygonId) -> Option<&Polygon> {
        self.polygons.iter().find(|p| p.id == *id)
    }

    /// Return a mutable reference to a polygon by id.
    pub fn get_mut(&mut self, id: &PolygonId) -> Option<&mut Polygon> {
        self.polygons.iter_mut().find(|p| p.id == *id)
    }

    /// Iterate polygons in insertion (draw) order.
    pub fn iter(&self) -> impl Iterator<Item = &Polygon> {
        self.polygons.iter()
    }

    /// Replace all polygons with a host-supplied snapshot, preserving the
    /// snapshot's order.
    pub fn load(&mut self, polygons: Vec<Polygon>) {
        self.polygons = polygons;
    }

    /// Remove every polygon.
    pub fn clear(&mut self) {
        self.polygons.clear();
    }

    /// Number of polygons currently in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Returns `true` if the scene contains no polygons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}
