#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;
use crate::testutil::{Op, TestSurface};

fn make_pivot() -> Polygon {
    Polygon::new(Point::new(200.0, 200.0), 50.0, 6, 0.0, "red".into(), "orange".into(), false)
}

fn draw_overlay(loc: Point) -> TestSurface {
    let mut surface = TestSurface::new(600.0, 600.0);
    let pivot = make_pivot();
    draw_annotations(&mut surface, &pivot, loc).expect("overlay draw");
    surface
}

// =============================================================
// Overlay composition
// =============================================================

#[test]
fn draws_centroid_at_pivot_center() {
    let surface = draw_overlay(Point::new(260.0, 200.0));
    assert!(surface.recorded(
        |op| matches!(op, Op::Arc { x, y, radius } if *x == 200.0 && *y == 200.0 && *radius == 3.0)
    ));
}

#[test]
fn draws_one_hundred_twenty_eight_ticks() {
    let surface = draw_overlay(Point::new(260.0, 200.0));
    // Each tick is a short stroked segment on the dial ring; count the
    // tick-style stroke settings (long + short).
    let long = surface.count(|op| matches!(op, Op::StrokeStyle(s) if s == "rgba(100,140,230,0.9)"));
    let short = surface.count(|op| matches!(op, Op::StrokeStyle(s) if s == "rgba(100,140,230,0.7)"));
    // The guidewire knob also uses the long-tick style, hence one extra.
    assert_eq!(long + short, 129);
    assert_eq!(long, 33);
}

#[test]
fn every_fourth_tick_is_long() {
    let surface = draw_overlay(Point::new(260.0, 200.0));
    let short = surface.count(|op| matches!(op, Op::StrokeStyle(s) if s == "rgba(100,140,230,0.7)"));
    assert_eq!(short, 96);
}

#[test]
fn draws_sixteen_degree_labels() {
    let surface = draw_overlay(Point::new(260.0, 200.0));
    assert_eq!(surface.count(|op| matches!(op, Op::FillText { .. })), 16);
}

#[test]
fn degree_labels_are_whole_degrees() {
    let surface = draw_overlay(Point::new(260.0, 200.0));
    assert!(surface.recorded(|op| matches!(op, Op::FillText { text, .. } if text == "0")));
    assert!(surface.recorded(|op| matches!(op, Op::FillText { text, .. } if text == "90")));
    assert!(surface.recorded(|op| matches!(op, Op::FillText { text, .. } if text == "180")));
    assert!(surface.recorded(|op| matches!(op, Op::FillText { text, .. } if text == "270")));
}

#[test]
fn labels_use_annotation_font() {
    let surface = draw_overlay(Point::new(260.0, 200.0));
    assert!(surface.recorded(|op| matches!(op, Op::Font(f) if f == "12px Helvetica")));
}

#[test]
fn dial_radii_scale_with_pivot_radius() {
    let surface = draw_overlay(Point::new(260.0, 200.0));
    // Outer dial at radius + 35, tracking ring at radius + 55 − 10.
    assert!(surface.recorded(|op| matches!(op, Op::Arc { radius, .. } if *radius == 85.0)));
    assert!(surface.recorded(|op| matches!(op, Op::Arc { radius, .. } if *radius == 95.0)));
}

#[test]
fn tracking_ring_has_drop_shadow() {
    let surface = draw_overlay(Point::new(260.0, 200.0));
    assert!(surface.recorded(|op| matches!(op, Op::ShadowBlur(b) if *b == 6.0)));
    assert!(surface.recorded(|op| matches!(op, Op::ShadowColor(c) if c == "rgba(0,0,0,0.7)")));
}

// =============================================================
// Guidewire spoke
// =============================================================

#[test]
fn guidewire_starts_at_centroid() {
    let surface = draw_overlay(Point::new(260.0, 200.0));
    assert!(surface.recorded(|op| matches!(op, Op::MoveTo(x, y) if *x == 200.0 && *y == 200.0)));
}

#[test]
fn guidewire_tracks_pointer_bearing() {
    // Pointer straight right of the pivot: the spoke ends on the dial edge
    // at (center.x + radius + 55, center.y).
    let surface = draw_overlay(Point::new(260.0, 200.0));
    assert!(surface.recorded(|op| matches!(op, Op::LineTo(x, y) if *x == 305.0 && (*y - 200.0).abs() < 1e-9)));
}

#[test]
fn guidewire_uses_goldenrod() {
    let surface = draw_overlay(Point::new(260.0, 200.0));
    assert!(surface.recorded(|op| matches!(op, Op::StrokeStyle(s) if s == "goldenrod")));
}

// =============================================================
// Hygiene
// =============================================================

#[test]
fn overlay_save_restore_depth_balances() {
    let surface = draw_overlay(Point::new(123.0, 456.0));
    assert_eq!(surface.depth, 0);
}

#[test]
fn pointer_on_centroid_still_draws() {
    // Degenerate bearing: pointer exactly on the pivot center.
    let surface = draw_overlay(Point::new(200.0, 200.0));
    assert_eq!(surface.depth, 0);
    assert_eq!(surface.count(|op| matches!(op, Op::FillText { .. })), 16);
}
