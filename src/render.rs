//! Rendering: polygons, full-scene redraws, rubber-band previews, and
//! guidewires. Receives read-only views of scene state and produces pixels;
//! it never mutates application state.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{GRID_COLOR, GRID_STEP_X, GRID_STEP_Y, GUIDEWIRE_STROKE_STYLE};
use crate::geom::Point;
use crate::grid;
use crate::polygon::Polygon;
use crate::scene::Scene;
use crate::surface::{Surface, SurfaceError};

/// Trace `points` as a closed path.
///
/// An empty slice resets the current path and nothing more, so degenerate
/// polygons (zero sides) draw nothing rather than failing.
pub fn trace_path<S: Surface>(surface: &mut S, points: &[Point]) {
    surface.begin_path();
    let Some(first) = points.first() else {
        return;
    };
    surface.move_to(first.x, first.y);
    for point in &points[1..] {
        surface.line_to(point.x, point.y);
    }
    surface.close_path();
}

/// Draw one polygon, optionally rotated by `angle` about its own center.
///
/// The surface is translated to the polygon's center (and rotated there)
/// before the path is traced about the origin, so a rotation preview spins
/// the shape in place.
///
/// # Errors
///
/// Propagates the first failed surface operation.
pub fn draw_polygon<S: Surface>(
    surface: &mut S,
    polygon: &Polygon,
    angle: Option<f64>,
) -> Result<(), SurfaceError> {
    surface.save();
    surface.translate(polygon.center_x, polygon.center_y)?;
    if let Some(angle) = angle {
        surface.rotate(angle)?;
    }

    let points = polygon.vertices_about(Point::new(0.0, 0.0));
    trace_path(surface, &points);

    surface.set_stroke_style(&polygon.stroke_style);
    surface.stroke();
    if polygon.filled {
        surface.set_fill_style(&polygon.fill_style);
        surface.fill();
    }

    surface.restore();
    Ok(())
}

/// Draw every committed polygon in insertion (z) order.
///
/// # Errors
///
/// Propagates the first failed surface operation.
pub fn draw_scene<S: Surface>(surface: &mut S, scene: &Scene) -> Result<(), SurfaceError> {
    for polygon in scene.iter() {
        draw_polygon(surface, polygon, None)?;
    }
    Ok(())
}

/// Clear the surface and repaint the grid plus every committed polygon.
///
/// # Errors
///
/// Propagates the first failed surface operation.
pub fn redraw<S: Surface>(surface: &mut S, scene: &Scene) -> Result<(), SurfaceError> {
    let width = surface.width();
    let height = surface.height();
    surface.clear_rect(0.0, 0.0, width, height);
    grid::draw(surface, GRID_COLOR, GRID_STEP_X, GRID_STEP_Y);
    draw_scene(surface, scene)
}

/// Draw a full-surface crosshair through the rubber-band anchor.
pub fn draw_guidewires<S: Surface>(surface: &mut S, anchor: Point) {
    let width = surface.width();
    let height = surface.height();

    surface.save();
    surface.set_stroke_style(GUIDEWIRE_STROKE_STYLE);
    surface.set_line_width(0.5);

    surface.begin_path();
    surface.move_to(anchor.x, 0.0);
    surface.line_to(anchor.x, height);
    surface.stroke();

    surface.begin_path();
    surface.move_to(0.0, anchor.y);
    surface.line_to(width, anchor.y);
    surface.stroke();

    surface.restore();
}
