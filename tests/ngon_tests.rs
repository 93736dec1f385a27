mod support;

use airframe_svg::{
    float_types::{EPSILON, Real},
    geometry::{Point, regular_ngon_points},
};
use nalgebra::Rotation2;

use crate::support::{approx_eq, point_approx_eq, screen_angle};

#[test]
fn hexagon_scenario() {
    let hex = regular_ngon_points(Point::new(100.0, 100.0), 60.0, 6, 0.0);
    let expected = [
        (100.0, 40.0),
        (151.96, 70.0),
        (151.96, 130.0),
        (100.0, 160.0),
        (48.04, 130.0),
        (48.04, 70.0),
    ];
    assert_eq!(hex.len(), 6);
    for (p, (x, y)) in hex.iter().zip(expected) {
        assert!(point_approx_eq(*p, x, y, 0.005), "{p} != ({x}, {y})");
    }
}

#[test]
fn vertices_lie_on_circle_with_even_spacing() {
    let center = Point::new(37.0, -12.5);
    let r = 23.0;
    for n in 1..=12usize {
        let pts = regular_ngon_points(center, r, n, 0.0);
        assert_eq!(pts.len(), n);
        for p in &pts {
            assert!(approx_eq((p - center).norm(), r, 1e-6));
        }
        let step = 360.0 / n as Real;
        for i in 0..n {
            let a = screen_angle(center, pts[i]);
            let b = screen_angle(center, pts[(i + 1) % n]);
            let diff = (b - a).rem_euclid(360.0);
            // a single vertex wraps onto itself
            let expected = if n == 1 { 0.0 } else { step };
            assert!(approx_eq(diff, expected, 1e-6), "n={n} i={i} diff={diff}");
        }
    }
}

#[test]
fn offset_rotates_about_center() {
    let center = Point::new(100.0, 100.0);
    for offset in [22.5, 30.0, 90.0, 200.0, -45.0] {
        let base = regular_ngon_points(center, 70.0, 8, 0.0);
        let turned = regular_ngon_points(center, 70.0, 8, offset);
        let rot = Rotation2::new((offset as Real).to_radians());
        for (b, t) in base.iter().zip(&turned) {
            let expected = center + rot * (b - center);
            assert!((expected - t).norm() < 1e-6, "offset {offset}");
        }
    }
}

#[test]
fn single_and_empty() {
    let c = Point::new(10.0, 20.0);
    let one = regular_ngon_points(c, 5.0, 1, 0.0);
    assert_eq!(one.len(), 1);
    assert!(point_approx_eq(one[0], 10.0, 15.0, EPSILON));
    assert!(regular_ngon_points(c, 5.0, 0, 0.0).is_empty());
}

#[test]
fn hex_x_first_vertex_is_thirty_degrees_east_of_north() {
    let c = Point::new(100.0, 100.0);
    let pts = regular_ngon_points(c, 60.0, 6, 30.0);
    assert!(approx_eq(screen_angle(c, pts[0]), 30.0, 1e-6));
    assert!(point_approx_eq(pts[0], 130.0, 48.038, 0.001));
}
