#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use std::f64::consts::FRAC_PI_2;

use super::*;
use crate::testutil::{Op, TestSurface};

fn make_polygon(filled: bool) -> Polygon {
    Polygon::new(
        Point::new(100.0, 100.0),
        50.0,
        6,
        0.0,
        "red".into(),
        "orange".into(),
        filled,
    )
}

// =============================================================
// trace_path
// =============================================================

#[test]
fn trace_path_closed() {
    let mut surface = TestSurface::new(100.0, 100.0);
    let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)];
    trace_path(&mut surface, &points);

    assert_eq!(surface.count(|op| matches!(op, Op::BeginPath)), 1);
    assert_eq!(surface.count(|op| matches!(op, Op::MoveTo(..))), 1);
    assert_eq!(surface.count(|op| matches!(op, Op::LineTo(..))), 2);
    assert_eq!(surface.count(|op| matches!(op, Op::ClosePath)), 1);
}

#[test]
fn trace_path_empty_only_resets() {
    let mut surface = TestSurface::new(100.0, 100.0);
    trace_path(&mut surface, &[]);
    assert_eq!(surface.count(|op| matches!(op, Op::BeginPath)), 1);
    assert_eq!(surface.count(|op| matches!(op, Op::MoveTo(..))), 0);
    assert_eq!(surface.count(|op| matches!(op, Op::ClosePath)), 0);
}

// =============================================================
// draw_polygon
// =============================================================

#[test]
fn draw_polygon_translates_to_center() {
    let mut surface = TestSurface::new(400.0, 400.0);
    draw_polygon(&mut surface, &make_polygon(false), None).expect("draw");
    assert!(surface.recorded(|op| matches!(op, Op::Translate(x, y) if *x == 100.0 && *y == 100.0)));
}

#[test]
fn draw_polygon_traces_about_origin() {
    let mut surface = TestSurface::new(400.0, 400.0);
    draw_polygon(&mut surface, &make_polygon(false), None).expect("draw");
    // Vertex 0 of an unrotated hexagon is straight up from the (translated)
    // origin.
    assert!(surface.recorded(|op| matches!(op, Op::MoveTo(x, y) if x.abs() < 1e-9 && *y == -50.0)));
}

#[test]
fn draw_polygon_strokes_with_polygon_style() {
    let mut surface = TestSurface::new(400.0, 400.0);
    draw_polygon(&mut surface, &make_polygon(false), None).expect("draw");
    assert!(surface.recorded(|op| matches!(op, Op::StrokeStyle(s) if s == "red")));
    assert_eq!(surface.count(|op| matches!(op, Op::Stroke)), 1);
}

#[test]
fn unfilled_polygon_is_not_filled() {
    let mut surface = TestSurface::new(400.0, 400.0);
    draw_polygon(&mut surface, &make_polygon(false), None).expect("draw");
    assert_eq!(surface.count(|op| matches!(op, Op::Fill)), 0);
}

#[test]
fn filled_polygon_fills_with_fill_style() {
    let mut surface = TestSurface::new(400.0, 400.0);
    draw_polygon(&mut surface, &make_polygon(true), None).expect("draw");
    assert!(surface.recorded(|op| matches!(op, Op::FillStyle(s) if s == "orange")));
    assert_eq!(surface.count(|op| matches!(op, Op::Fill)), 1);
}

#[test]
fn rotation_preview_rotates_surface() {
    let mut surface = TestSurface::new(400.0, 400.0);
    draw_polygon(&mut surface, &make_polygon(false), Some(FRAC_PI_2)).expect("draw");
    assert!(surface.recorded(|op| matches!(op, Op::Rotate(a) if *a == FRAC_PI_2)));
}

#[test]
fn unrotated_draw_never_rotates() {
    let mut surface = TestSurface::new(400.0, 400.0);
    draw_polygon(&mut surface, &make_polygon(false), None).expect("draw");
    assert_eq!(surface.count(|op| matches!(op, Op::Rotate(_))), 0);
}

#[test]
fn draw_polygon_depth_balances() {
    let mut surface = TestSurface::new(400.0, 400.0);
    draw_polygon(&mut surface, &make_polygon(true), Some(0.5)).expect("draw");
    assert_eq!(surface.depth, 0);
}

// =============================================================
// draw_scene / redraw
// =============================================================

#[test]
fn draw_scene_draws_every_polygon() {
    let mut surface = TestSurface::new(400.0, 400.0);
    let mut scene = Scene::new();
    scene.insert(make_polygon(false));
    scene.insert(make_polygon(false));
    scene.insert(make_polygon(false));
    draw_scene(&mut surface, &scene).expect("draw");
    assert_eq!(surface.count(|op| matches!(op, Op::Stroke)), 3);
}

#[test]
fn redraw_clears_then_grids_then_draws() {
    let mut surface = TestSurface::new(400.0, 400.0);
    let mut scene = Scene::new();
    scene.insert(make_polygon(false));
    redraw(&mut surface, &scene).expect("redraw");

    let clear_at = surface.position(|op| matches!(op, Op::ClearRect { .. }));
    let grid_at = surface.position(|op| matches!(op, Op::StrokeStyle(s) if s == "lightgrey"));
    let shape_at = surface.position(|op| matches!(op, Op::StrokeStyle(s) if s == "red"));
    assert!(clear_at.is_some());
    assert!(clear_at < grid_at);
    assert!(grid_at < shape_at);
}

#[test]
fn redraw_empty_scene_paints_grid_only() {
    let mut surface = TestSurface::new(400.0, 400.0);
    let scene = Scene::new();
    redraw(&mut surface, &scene).expect("redraw");
    assert!(surface.recorded(|op| matches!(op, Op::StrokeStyle(s) if s == "lightgrey")));
    assert_eq!(surface.count(|op| matches!(op, Op::Translate(..))), 0);
}

// =============================================================
// Guidewires
// =============================================================

#[test]
fn guidewires_cross_full_surface_through_anchor() {
    let mut surface = TestSurface::new(300.0, 200.0);
    draw_guidewires(&mut surface, Point::new(120.0, 80.0));

    // Vertical wire through x = 120.
    assert!(surface.recorded(|op| matches!(op, Op::MoveTo(x, y) if *x == 120.0 && *y == 0.0)));
    assert!(surface.recorded(|op| matches!(op, Op::LineTo(x, y) if *x == 120.0 && *y == 200.0)));
    // Horizontal wire through y = 80.
    assert!(surface.recorded(|op| matches!(op, Op::MoveTo(x, y) if *x == 0.0 && *y == 80.0)));
    assert!(surface.recorded(|op| matches!(op, Op::LineTo(x, y) if *x == 300.0 && *y == 80.0)));
}

#[test]
fn guidewires_depth_balances() {
    let mut surface = TestSurface::new(300.0, 200.0);
    draw_guidewires(&mut surface, Point::new(10.0, 10.0));
    assert_eq!(surface.depth, 0);
}
