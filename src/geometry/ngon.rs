//! Evenly spaced points on a circle, used to lay out symmetric hex and octo frames.

use super::Point;
use crate::float_types::{FULL_TURN_DEGREES, Real};

/// Vertices of a regular `count`-gon inscribed in a circle of `radius` around `center`.
///
/// Angles are measured clockwise on screen from "up", starting at `offset_degrees`
/// and stepping by `360 / count`, each wrapped into `[0, 360)`:
/// ```text
/// θₙ = (n·360/count + offset) mod 360
/// x  = cx + r·sin θₙ
/// y  = cy - r·cos θₙ      (image y grows downward)
/// ```
/// The output is ordered by ascending `n`. A `count` of zero yields no points.
///
/// # Example
/// ```
/// use airframe_svg::geometry::{Point, regular_ngon_points};
/// let hex = regular_ngon_points(Point::new(100.0, 100.0), 60.0, 6, 0.0);
/// assert_eq!(hex.len(), 6);
/// assert!((hex[0].y - 40.0).abs() < 1e-9);
/// ```
pub fn regular_ngon_points(
    center: Point,
    radius: Real,
    count: usize,
    offset_degrees: Real,
) -> Vec<Point> {
    vertex_angles(count, offset_degrees)
        .into_iter()
        .map(|theta| {
            let (sin, cos) = theta.to_radians().sin_cos();
            Point::new(center.x + radius * sin, center.y - radius * cos)
        })
        .collect()
}

/// Screen angles in degrees of the `count` vertices, each in `[0, 360)`.
pub fn vertex_angles(count: usize, offset_degrees: Real) -> Vec<Real> {
    if count == 0 {
        return Vec::new();
    }
    let step = FULL_TURN_DEGREES / count as Real;
    (0..count)
        .map(|n| wrap_degrees(n as Real * step + offset_degrees))
        .collect()
}

// rem_euclid rounds tiny negative angles up to exactly 360.
fn wrap_degrees(angle: Real) -> Real {
    let theta = angle.rem_euclid(FULL_TURN_DEGREES);
    if theta >= FULL_TURN_DEGREES {
        theta - FULL_TURN_DEGREES
    } else {
        theta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::EPSILON;

    #[test]
    fn empty_for_zero_vertices() {
        assert!(regular_ngon_points(Point::new(0.0, 0.0), 10.0, 0, 0.0).is_empty());
    }

    #[test]
    fn single_vertex_points_up() {
        let p = regular_ngon_points(Point::new(50.0, 50.0), 10.0, 1, 0.0);
        assert_eq!(p.len(), 1);
        assert!((p[0].x - 50.0).abs() < EPSILON);
        assert!((p[0].y - 40.0).abs() < EPSILON);
    }

    #[test]
    fn angles_stay_below_full_turn() {
        for offset in [-1e-15, -1e-12, -360.0, 0.0, 359.999_999_999, 720.0] {
            for theta in vertex_angles(6, offset) {
                assert!((0.0..FULL_TURN_DEGREES).contains(&theta), "offset {offset}: {theta}");
            }
        }
        assert_eq!(vertex_angles(1, -1e-15), [0.0]);
        assert_eq!(vertex_angles(4, 30.0), [30.0, 120.0, 210.0, 300.0]);
    }

    #[test]
    fn negative_offset_wraps() {
        let a = regular_ngon_points(Point::new(0.0, 0.0), 1.0, 4, -90.0);
        let b = regular_ngon_points(Point::new(0.0, 0.0), 1.0, 4, 270.0);
        for (p, q) in a.iter().zip(&b) {
            assert!((p - q).norm() < EPSILON);
        }
        // -90° lands on the left ("west") side of the screen
        assert!((a[0].x + 1.0).abs() < EPSILON);
    }
}
