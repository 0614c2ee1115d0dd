//! The protractor overlay shown while a polygon is engaged for rotation:
//! a centroid marker, a guide spoke tracking the pointer, a shadowed
//! tracking ring, a translucent outer dial, tick marks, and degree labels.

#[cfg(test)]
#[path = "dial_test.rs"]
mod dial_test;

use std::f64::consts::{PI, TAU};

use crate::geom::{angle_to, Point};
use crate::polygon::Polygon;
use crate::surface::{Surface, SurfaceError};

const RING_INNER_RADIUS: f64 = 35.0;
const RING_OUTER_RADIUS: f64 = 55.0;
const TICK_WIDTH: f64 = 10.0;

/// Ticks per revolution, one every 1/128 turn.
const TICK_COUNT: u32 = 128;
const TICK_STEP: f64 = PI / 64.0;
/// Degree labels per revolution, one every 1/16 turn.
const LABEL_COUNT: u32 = 16;
const LABEL_STEP: f64 = PI / 8.0;

const ANNOTATION_FILL_STYLE: &str = "rgba(0,0,230,0.9)";
const ANNOTATION_FONT: &str = "12px Helvetica";

const TICK_LONG_STROKE_STYLE: &str = "rgba(100,140,230,0.9)";
const TICK_SHORT_STROKE_STYLE: &str = "rgba(100,140,230,0.7)";

const TRACKING_DIAL_STROKE_STYLE: &str = "rgba(100,140,230,0.5)";
const DIAL_FILL_STYLE: &str = "rgba(100,140,230,0.1)";
const DIAL_EDGE_STROKE_STYLE: &str = "rgba(0,0,0,0.1)";

const CENTROID_RADIUS: f64 = 3.0;
const CENTROID_FILL_STYLE: &str = "rgba(100,140,230,0.9)";

const GUIDEWIRE_STROKE_STYLE: &str = "goldenrod";
const GUIDEWIRE_FILL_STYLE: &str = "rgba(250,250,0,0.6)";
const GUIDEWIRE_KNOB_RADIUS: f64 = 5.0;

/// Draw the full rotation overlay for `pivot` with the pointer at `loc`.
///
/// # Errors
///
/// Propagates the first failed surface operation.
pub fn draw_annotations<S: Surface>(
    surface: &mut S,
    pivot: &Polygon,
    loc: Point,
) -> Result<(), SurfaceError> {
    draw_centroid(surface, pivot.center())?;
    draw_guidewire(surface, pivot, loc)?;
    draw_tracking_ring(surface, pivot)?;
    draw_outer_dial(surface, pivot)?;
    draw_tick_ring(surface, pivot)?;
    draw_ticks(surface, pivot)?;
    draw_degree_labels(surface, pivot)?;
    Ok(())
}

fn draw_centroid<S: Surface>(surface: &mut S, center: Point) -> Result<(), SurfaceError> {
    surface.save();
    surface.begin_path();
    surface.arc(center.x, center.y, CENTROID_RADIUS, 0.0, TAU)?;
    surface.set_fill_style(CENTROID_FILL_STYLE);
    surface.fill();
    surface.restore();
    Ok(())
}

/// A spoke from the centroid out to the dial edge along the pointer bearing,
/// capped with a small knob.
fn draw_guidewire<S: Surface>(surface: &mut S, pivot: &Polygon, loc: Point) -> Result<(), SurfaceError> {
    let center = pivot.center();
    let angle = angle_to(center, loc);
    let reach = pivot.radius + RING_OUTER_RADIUS;
    let end = Point::new(center.x + reach * angle.cos(), center.y + reach * angle.sin());

    surface.save();
    surface.set_stroke_style(GUIDEWIRE_STROKE_STYLE);
    surface.set_fill_style(GUIDEWIRE_FILL_STYLE);

    surface.begin_path();
    surface.move_to(center.x, center.y);
    surface.line_to(end.x, end.y);
    surface.stroke();

    surface.begin_path();
    surface.set_stroke_style(TICK_LONG_STROKE_STYLE);
    surface.arc(end.x, end.y, GUIDEWIRE_KNOB_RADIUS, 0.0, TAU)?;
    surface.fill();
    surface.stroke();
    surface.restore();
    Ok(())
}

fn draw_tracking_ring<S: Surface>(surface: &mut S, pivot: &Polygon) -> Result<(), SurfaceError> {
    let center = pivot.center();
    surface.save();
    surface.set_shadow_color("rgba(0,0,0,0.7)");
    surface.set_shadow_offset_x(3.0);
    surface.set_shadow_offset_y(3.0);
    surface.set_shadow_blur(6.0);
    surface.set_stroke_style(TRACKING_DIAL_STROKE_STYLE);
    surface.begin_path();
    surface.arc(
        center.x,
        center.y,
        pivot.radius + RING_OUTER_RADIUS - TICK_WIDTH,
        0.0,
        TAU,
    )?;
    surface.stroke();
    surface.restore();
    Ok(())
}

fn draw_outer_dial<S: Surface>(surface: &mut S, pivot: &Polygon) -> Result<(), SurfaceError> {
    let center = pivot.center();
    let radius = pivot.radius + RING_INNER_RADIUS;

    surface.save();
    surface.begin_path();
    surface.arc(center.x, center.y, radius, 0.0, TAU)?;
    surface.set_fill_style(DIAL_FILL_STYLE);
    surface.fill();
    surface.set_stroke_style(DIAL_EDGE_STROKE_STYLE);
    surface.stroke();
    surface.restore();
    Ok(())
}

fn draw_tick_ring<S: Surface>(surface: &mut S, pivot: &Polygon) -> Result<(), SurfaceError> {
    let center = pivot.center();
    surface.save();
    surface.begin_path();
    surface.set_stroke_style(DIAL_EDGE_STROKE_STYLE);
    surface.arc(
        center.x,
        center.y,
        pivot.radius + RING_INNER_RADIUS - TICK_WIDTH,
        0.0,
        TAU,
    )?;
    surface.stroke();
    surface.restore();
    Ok(())
}

fn draw_ticks<S: Surface>(surface: &mut S, pivot: &Polygon) -> Result<(), SurfaceError> {
    let center = pivot.center();
    let radius = pivot.radius + RING_INNER_RADIUS;

    surface.save();
    for count in 0..TICK_COUNT {
        let angle = f64::from(count) * TICK_STEP;
        draw_tick(surface, center, angle, radius, count)?;
    }
    surface.restore();
    Ok(())
}

fn draw_tick<S: Surface>(
    surface: &mut S,
    center: Point,
    angle: f64,
    radius: f64,
    count: u32,
) -> Result<(), SurfaceError> {
    // Every 4th tick is full width.
    let (tick_width, style) = if count % 4 == 0 {
        (TICK_WIDTH, TICK_LONG_STROKE_STYLE)
    } else {
        (TICK_WIDTH / 2.0, TICK_SHORT_STROKE_STYLE)
    };

    surface.begin_path();
    surface.move_to(
        center.x + angle.cos() * (radius - tick_width),
        center.y + angle.sin() * (radius - tick_width),
    );
    surface.line_to(center.x + angle.cos() * radius, center.y + angle.sin() * radius);
    surface.set_stroke_style(style);
    surface.stroke();
    Ok(())
}

fn draw_degree_labels<S: Surface>(surface: &mut S, pivot: &Polygon) -> Result<(), SurfaceError> {
    let center = pivot.center();
    let radius = pivot.radius + RING_INNER_RADIUS;

    surface.save();
    surface.set_fill_style(ANNOTATION_FILL_STYLE);
    surface.set_font(ANNOTATION_FONT);
    surface.set_text_align("center");
    surface.set_text_baseline("middle");

    for i in 0..LABEL_COUNT {
        let angle = f64::from(i) * LABEL_STEP;
        let degrees = format!("{:.0}", angle.to_degrees());
        surface.fill_text(
            &degrees,
            center.x + angle.cos() * (radius - TICK_WIDTH * 2.0),
            center.y - angle.sin() * (radius - TICK_WIDTH * 2.0),
        )?;
    }
    surface.restore();
    Ok(())
}
