//! The freehand eraser: repaints the background grid inside a clipped
//! footprint to remove ink, and strokes a drop-shadowed indicator so the
//! user sees where the eraser sits.
//!
//! The repaint is centered on the PREVIOUS pointer sample while the
//! indicator follows the current one, so each move first cleans up the old
//! indicator and then draws the new. All styling and clipping happens inside
//! paired save/restore so nothing leaks into later draws.

#[cfg(test)]
#[path = "eraser_test.rs"]
mod eraser_test;

use std::f64::consts::TAU;

use crate::consts::{GRID_COLOR, GRID_STEP_X, GRID_STEP_Y};
use crate::geom::Point;
use crate::grid;
use crate::input::EraserShape;
use crate::surface::{Surface, SurfaceError};

const ERASER_LINE_WIDTH: f64 = 1.0;
const ERASER_SHADOW_STYLE: &str = "rgb(0,0,0)";
const ERASER_STROKE_STYLE: &str = "rgb(0,0,255)";
const ERASER_SHADOW_OFFSET: f64 = -5.0;
const ERASER_SHADOW_BLUR: f64 = 20.0;

/// Repaint the grid inside the eraser footprint at `last`, expanded by the
/// indicator line width so the previous indicator stroke is fully removed.
///
/// # Errors
///
/// Propagates the first failed surface operation.
pub fn erase_last<S: Surface>(
    surface: &mut S,
    last: Point,
    width: f64,
    shape: EraserShape,
) -> Result<(), SurfaceError> {
    surface.save();
    clip_footprint(surface, last, width + ERASER_LINE_WIDTH * 2.0, shape)?;
    grid::draw(surface, GRID_COLOR, GRID_STEP_X, GRID_STEP_Y);
    surface.restore();
    Ok(())
}

/// Stroke the eraser indicator at `loc`.
///
/// # Errors
///
/// Propagates the first failed surface operation.
pub fn draw_indicator<S: Surface>(
    surface: &mut S,
    loc: Point,
    width: f64,
    shape: EraserShape,
) -> Result<(), SurfaceError> {
    surface.save();
    surface.set_line_width(ERASER_LINE_WIDTH);
    surface.set_shadow_color(ERASER_SHADOW_STYLE);
    surface.set_shadow_offset_x(ERASER_SHADOW_OFFSET);
    surface.set_shadow_offset_y(ERASER_SHADOW_OFFSET);
    surface.set_shadow_blur(ERASER_SHADOW_BLUR);
    surface.set_stroke_style(ERASER_STROKE_STYLE);
    clip_footprint(surface, loc, width, shape)?;
    surface.stroke();
    surface.restore();
    Ok(())
}

/// Build the footprint path at `loc` and clip to it. The path is left
/// current so the indicator can stroke it.
fn clip_footprint<S: Surface>(
    surface: &mut S,
    loc: Point,
    width: f64,
    shape: EraserShape,
) -> Result<(), SurfaceError> {
    surface.begin_path();
    match shape {
        EraserShape::Circle => {
            surface.arc(loc.x, loc.y, width / 2.0, 0.0, TAU)?;
        }
        EraserShape::Square => {
            surface.rect(loc.x - width / 2.0, loc.y - width / 2.0, width, width);
        }
    }
    surface.clip();
    Ok(())
}
