//! Plane geometry value types and angle math.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in canvas-local coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle with non-negative extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// The bounding box of two corner points, in either order.
    ///
    /// `left`/`top` are always the minima, so the result is invariant under
    /// swapping the corners.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }
}

/// Four-quadrant angle of the ray `origin → to`, in radians.
///
/// Positive angles are clockwise in screen coordinates. Returns `0.0` when
/// the points coincide, so a pointer resting on a rotation pivot yields a
/// zero delta instead of NaN.
#[must_use]
pub fn angle_to(origin: Point, to: Point) -> f64 {
    let dx = to.x - origin.x;
    let dy = to.y - origin.y;
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }
    dy.atan2(dx)
}
