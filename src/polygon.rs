//! The regular-polygon primitive.
//!
//! A polygon is described by its center, circumradius, side count, and start
//! angle; vertices are recomputed on demand so mutations to any of those
//! fields are immediately visible to rendering and hit-testing. The scene
//! owns every polygon — engines refer to one by [`PolygonId`], never by
//! reference.

#[cfg(test)]
#[path = "polygon_test.rs"]
mod polygon_test;

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::Point;

/// Unique identifier for a committed polygon.
pub type PolygonId = Uuid;

/// A regular N-gon with style attributes, as stored in the scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polygon {
    /// Unique identifier for this polygon.
    pub id: PolygonId,
    /// Center x in canvas coordinates.
    pub center_x: f64,
    /// Center y in canvas coordinates.
    pub center_y: f64,
    /// Distance from the center to each vertex.
    pub radius: f64,
    /// Side count. Callers are expected to supply at least 3.
    pub sides: u32,
    /// Bearing of vertex 0, in radians.
    pub start_angle: f64,
    /// Stroke color as a CSS color string.
    pub stroke_style: String,
    /// Fill color as a CSS color string.
    pub fill_style: String,
    /// Whether the interior is painted with `fill_style`.
    pub filled: bool,
}

impl Polygon {
    #[must_use]
    pub fn new(
        center: Point,
        radius: f64,
        sides: u32,
        start_angle: f64,
        stroke_style: String,
        fill_style: String,
        filled: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            center_x: center.x,
            center_y: center.y,
            radius,
            sides,
            start_angle,
            stroke_style,
            fill_style,
            filled,
        }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Move the polygon so its center is at `(x, y)`.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.center_x = x;
        self.center_y = y;
    }

    /// The vertices around the polygon's own center.
    ///
    /// Vertex i sits at `center + radius·(sin θᵢ, −cos θᵢ)` with
    /// `θᵢ = start_angle + i·2π/N`, so a start angle of zero puts vertex 0
    /// straight up from the center.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point> {
        self.vertices_about(self.center())
    }

    /// The vertices as if the polygon were centered at `center`.
    ///
    /// Used by the renderer to trace the path at the origin of a translated
    /// (and possibly rotated) coordinate frame.
    #[must_use]
    pub fn vertices_about(&self, center: Point) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.sides as usize);
        let mut angle = self.start_angle;
        for _ in 0..self.sides {
            points.push(Point::new(
                center.x + self.radius * angle.sin(),
                center.y - self.radius * angle.cos(),
            ));
            angle += TAU / f64::from(self.sides);
        }
        points
    }

    /// Even-odd containment test against the polygon's edges.
    ///
    /// Equivalent to the `Canvas2D` even-odd path-membership test, but
    /// pure, so hit-testing runs natively. Degenerate polygons (fewer than
    /// 3 sides, zero radius) contain nothing.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        let vertices = self.vertices();
        if vertices.len() < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = vertices.len() - 1;
        for i in 0..vertices.len() {
            let a = vertices[i];
            let b = vertices[j];
            if (a.y > pt.y) != (b.y > pt.y)
                && pt.x < (b.x - a.x) * (pt.y - a.y) / (b.y - a.y) + a.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}
