#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use std::f64::consts::TAU;

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn make_polygon(center: Point, radius: f64, sides: u32, start_angle: f64) -> Polygon {
    Polygon::new(center, radius, sides, start_angle, "red".into(), "orange".into(), false)
}

fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_stores_fields() {
    let p = Polygon::new(
        Point::new(10.0, 20.0),
        30.0,
        6,
        0.5,
        "blue".into(),
        "green".into(),
        true,
    );
    assert_eq!(p.center_x, 10.0);
    assert_eq!(p.center_y, 20.0);
    assert_eq!(p.radius, 30.0);
    assert_eq!(p.sides, 6);
    assert_eq!(p.start_angle, 0.5);
    assert_eq!(p.stroke_style, "blue");
    assert_eq!(p.fill_style, "green");
    assert!(p.filled);
}

#[test]
fn new_assigns_unique_ids() {
    let a = make_polygon(Point::new(0.0, 0.0), 10.0, 3, 0.0);
    let b = make_polygon(Point::new(0.0, 0.0), 10.0, 3, 0.0);
    assert_ne!(a.id, b.id);
}

#[test]
fn center_accessor() {
    let p = make_polygon(Point::new(7.0, 9.0), 10.0, 5, 0.0);
    assert_eq!(p.center(), Point::new(7.0, 9.0));
}

#[test]
fn move_to_updates_center_only() {
    let mut p = make_polygon(Point::new(100.0, 100.0), 50.0, 6, 0.25);
    p.move_to(200.0, 250.0);
    assert_eq!(p.center(), Point::new(200.0, 250.0));
    assert_eq!(p.radius, 50.0);
    assert_eq!(p.sides, 6);
    assert_eq!(p.start_angle, 0.25);
}

// =============================================================
// Vertices
// =============================================================

#[test]
fn vertices_count_matches_sides() {
    for sides in 3..12 {
        let p = make_polygon(Point::new(0.0, 0.0), 10.0, sides, 0.0);
        assert_eq!(p.vertices().len(), sides as usize);
    }
}

#[test]
fn vertices_lie_on_circumcircle() {
    for sides in 3..12 {
        let p = make_polygon(Point::new(50.0, 80.0), 25.0, sides, 0.3);
        for v in p.vertices() {
            assert!(
                approx_eq(distance(v, p.center()), 25.0),
                "vertex {v:?} off the circumcircle for {sides} sides"
            );
        }
    }
}

#[test]
fn vertices_evenly_spaced() {
    let p = make_polygon(Point::new(0.0, 0.0), 10.0, 8, 0.0);
    let vertices = p.vertices();
    let step = TAU / 8.0;
    for i in 0..vertices.len() {
        let next = vertices[(i + 1) % vertices.len()];
        let side = distance(vertices[i], next);
        // Chord length for the angular step.
        let expected = 2.0 * 10.0 * (step / 2.0).sin();
        assert!(approx_eq(side, expected));
    }
}

#[test]
fn vertex_zero_points_up_at_zero_start_angle() {
    let p = make_polygon(Point::new(100.0, 100.0), 50.0, 6, 0.0);
    let v0 = p.vertices()[0];
    assert!(approx_eq(v0.x, 100.0));
    assert!(approx_eq(v0.y, 50.0));
}

#[test]
fn start_angle_rotates_vertices() {
    let p = make_polygon(Point::new(0.0, 0.0), 10.0, 4, 0.0);
    let q = make_polygon(Point::new(0.0, 0.0), 10.0, 4, TAU / 4.0);
    // A quarter-turn start angle maps each vertex of p onto the next of q.
    let pv = p.vertices();
    let qv = q.vertices();
    assert!(approx_eq(qv[0].x, pv[1].x));
    assert!(approx_eq(qv[0].y, pv[1].y));
}

#[test]
fn full_turn_start_angle_is_identity() {
    let p = make_polygon(Point::new(0.0, 0.0), 10.0, 5, 0.0);
    let q = make_polygon(Point::new(0.0, 0.0), 10.0, 5, TAU);
    for (a, b) in p.vertices().iter().zip(q.vertices().iter()) {
        assert!(approx_eq(a.x, b.x));
        assert!(approx_eq(a.y, b.y));
    }
}

#[test]
fn vertices_about_recentres() {
    let p = make_polygon(Point::new(100.0, 100.0), 50.0, 6, 0.0);
    let at_origin = p.vertices_about(Point::new(0.0, 0.0));
    for (v, o) in p.vertices().iter().zip(at_origin.iter()) {
        assert!(approx_eq(v.x - 100.0, o.x));
        assert!(approx_eq(v.y - 100.0, o.y));
    }
}

#[test]
fn mutation_is_visible_without_rebuild() {
    // Vertices are recomputed on demand, never cached.
    let mut p = make_polygon(Point::new(0.0, 0.0), 10.0, 3, 0.0);
    let before = p.vertices()[0];
    p.radius = 20.0;
    let after = p.vertices()[0];
    assert!(approx_eq(distance(after, p.center()), 20.0));
    assert!(!approx_eq(before.y, after.y));
}

#[test]
fn zero_radius_collapses_to_center() {
    let p = make_polygon(Point::new(5.0, 5.0), 0.0, 6, 0.0);
    for v in p.vertices() {
        assert!(approx_eq(v.x, 5.0));
        assert!(approx_eq(v.y, 5.0));
    }
}

// =============================================================
// Containment
// =============================================================

#[test]
fn contains_center() {
    let p = make_polygon(Point::new(100.0, 100.0), 50.0, 6, 0.0);
    assert!(p.contains(Point::new(100.0, 100.0)));
}

#[test]
fn contains_point_near_inside_edge() {
    let p = make_polygon(Point::new(100.0, 100.0), 50.0, 6, 0.0);
    // Inradius of a hexagon is r·cos(π/6) ≈ 43.3; x offset 40 is inside.
    assert!(p.contains(Point::new(140.0, 100.0)));
}

#[test]
fn excludes_point_outside_circumcircle() {
    let p = make_polygon(Point::new(100.0, 100.0), 50.0, 6, 0.0);
    assert!(!p.contains(Point::new(160.0, 100.0)));
}

#[test]
fn excludes_point_far_away() {
    let p = make_polygon(Point::new(100.0, 100.0), 50.0, 6, 0.0);
    assert!(!p.contains(Point::new(500.0, 500.0)));
}

#[test]
fn excludes_point_between_circumcircle_and_edge() {
    // A square (4 sides, start angle 0) has vertices at bearing 0, π/2, π,
    // 3π/2 — i.e. up/right/down/left. The diagonal midpoint region near
    // the circumcircle but outside the edges must not hit.
    let p = make_polygon(Point::new(0.0, 0.0), 100.0, 4, 0.0);
    assert!(p.contains(Point::new(0.0, 0.0)));
    assert!(!p.contains(Point::new(60.0, 60.0)));
}

#[test]
fn contains_respects_rotation() {
    // Rotating the square by π/4 turns it into an axis-aligned square whose
    // corners sit on the diagonals, so (60, 60) is now inside.
    let p = make_polygon(Point::new(0.0, 0.0), 100.0, 4, TAU / 8.0);
    assert!(p.contains(Point::new(60.0, 60.0)));
}

#[test]
fn degenerate_polygon_contains_nothing() {
    let zero_radius = make_polygon(Point::new(10.0, 10.0), 0.0, 6, 0.0);
    assert!(!zero_radius.contains(Point::new(10.0, 10.0)));

    let no_sides = make_polygon(Point::new(10.0, 10.0), 50.0, 0, 0.0);
    assert!(!no_sides.contains(Point::new(10.0, 10.0)));
}

// =============================================================
// Serde
// =============================================================

#[test]
fn polygon_serde_round_trip() {
    let p = Polygon::new(
        Point::new(1.0, 2.0),
        3.0,
        7,
        0.25,
        "teal".into(),
        "pink".into(),
        true,
    );
    let encoded = serde_json::to_string(&p).expect("serialize");
    let decoded: Polygon = serde_json::from_str(&encoded).expect("deserialize");
    assert_eq!(decoded.id, p.id);
    assert_eq!(decoded.center(), p.center());
    assert_eq!(decoded.radius, p.radius);
    assert_eq!(decoded.sides, p.sides);
    assert_eq!(decoded.stroke_style, "teal");
    assert!(decoded.filled);
}
