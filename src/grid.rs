//! The background grid: evenly spaced rules plus a pair of inset axes with
//! tick marks. Repainted in full on every redraw and, clipped, by the eraser.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::surface::Surface;

const AXIS_MARGIN: f64 = 40.0;
const AXIS_TOP: f64 = AXIS_MARGIN;
const HORIZONTAL_TICK_SPACING: f64 = 10.0;
const VERTICAL_TICK_SPACING: f64 = 10.0;
const TICK_WIDTH: f64 = 10.0;
const TICKS_LINE_WIDTH: f64 = 0.5;
const TICKS_COLOR: &str = "#2f4f4f";
const TICKS_COLOR_MAJOR: &str = "#556b2f";
const AXIS_LINE_WIDTH: f64 = 1.0;
const AXIS_COLOR: &str = "blue";
const GRID_LINE_WIDTH: f64 = 0.5;

/// Clear the surface and draw the grid rules and axes.
///
/// Grid lines are offset by half a pixel so a 0.5px stroke lands on a single
/// pixel row. When the caller has established a clip region, only pixels
/// inside the clip are repainted — the eraser depends on this.
pub fn draw<S: Surface>(surface: &mut S, color: &str, step_x: f64, step_y: f64) {
    let width = surface.width();
    let height = surface.height();

    surface.clear_rect(0.0, 0.0, width, height);
    surface.set_stroke_style(color);
    surface.set_line_width(GRID_LINE_WIDTH);

    let mut x = step_x + 0.5;
    while x < width {
        surface.begin_path();
        surface.move_to(x, 0.0);
        surface.line_to(x, height);
        surface.stroke();
        x += step_x;
    }

    let mut y = step_y + 0.5;
    while y < height {
        surface.begin_path();
        surface.move_to(0.0, y);
        surface.line_to(width, y);
        surface.stroke();
        y += step_y;
    }

    draw_axes(surface);
}

fn draw_axes<S: Surface>(surface: &mut S) {
    let width = surface.width();
    let height = surface.height();

    surface.save();
    surface.set_stroke_style(AXIS_COLOR);
    surface.set_line_width(AXIS_LINE_WIDTH);

    draw_horizontal_axis(surface, width, height);
    draw_vertical_axis(surface, height);

    surface.set_line_width(TICKS_LINE_WIDTH);
    surface.set_stroke_style(TICKS_COLOR);

    draw_vertical_axis_ticks(surface, height);
    draw_horizontal_axis_ticks(surface, width, height);

    surface.restore();
}

fn draw_horizontal_axis<S: Surface>(surface: &mut S, width: f64, height: f64) {
    let origin_x = AXIS_MARGIN;
    let origin_y = height - AXIS_MARGIN;
    surface.begin_path();
    surface.move_to(origin_x, origin_y);
    surface.line_to(width - AXIS_MARGIN, origin_y);
    surface.stroke();
}

fn draw_vertical_axis<S: Surface>(surface: &mut S, height: f64) {
    let origin_x = AXIS_MARGIN;
    let origin_y = height - AXIS_MARGIN;
    surface.begin_path();
    surface.move_to(origin_x, origin_y);
    surface.line_to(origin_x, AXIS_TOP);
    surface.stroke();
}

fn draw_vertical_axis_ticks<S: Surface>(surface: &mut S, height: f64) {
    let origin_x = AXIS_MARGIN;
    let origin_y = height - AXIS_MARGIN;
    let axis_height = height - AXIS_MARGIN - AXIS_TOP;
    let tick_count = (axis_height / VERTICAL_TICK_SPACING) as u32;

    for i in 1..tick_count {
        surface.save();
        surface.begin_path();

        // Every 5th tick is full width and emphasized.
        let delta_x = if i % 5 == 0 {
            surface.set_stroke_style(TICKS_COLOR_MAJOR);
            TICK_WIDTH
        } else {
            TICK_WIDTH / 2.0
        };

        let y = origin_y - f64::from(i) * VERTICAL_TICK_SPACING;
        surface.move_to(origin_x - delta_x, y);
        surface.line_to(origin_x + delta_x, y);
        surface.stroke();
        surface.restore();
    }
}

fn draw_horizontal_axis_ticks<S: Surface>(surface: &mut S, width: f64, height: f64) {
    let origin_x = AXIS_MARGIN;
    let origin_y = height - AXIS_MARGIN;
    let axis_width = width - AXIS_MARGIN - AXIS_TOP;
    let tick_count = (axis_width / HORIZONTAL_TICK_SPACING) as u32;

    for i in 1..tick_count {
        surface.save();
        surface.begin_path();

        let delta_y = if i % 5 == 0 {
            surface.set_stroke_style(TICKS_COLOR_MAJOR);
            TICK_WIDTH
        } else {
            TICK_WIDTH / 2.0
        };

        let x = origin_x + f64::from(i) * HORIZONTAL_TICK_SPACING;
        surface.move_to(x, origin_y - delta_y);
        surface.line_to(x, origin_y + delta_y);
        surface.stroke();
        surface.restore();
    }
}
