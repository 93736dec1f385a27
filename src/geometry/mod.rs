//! Image-space geometry primitives shared by the vertex generator,
//! the direction marker placer and the drawing session.
//!
//! All coordinates are in device units with the y axis pointing **down**,
//! so "north" on screen is negative y.

use crate::float_types::Real;
use nalgebra::{Point2, Vector2};

pub mod arrow;
pub mod ngon;

pub use arrow::{ArrowGeometry, ArrowSigns, Nudge, arrow_signs, place_arrow};
pub use ngon::{regular_ngon_points, vertex_angles};

/// A position in image space.
pub type Point = Point2<Real>;

/// A relative move in image space.
pub type Delta = Vector2<Real>;

/// A motor position and the extent of its rotor disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: Real,
}

impl Circle {
    pub fn new(x: Real, y: Real, radius: Real) -> Self {
        Self {
            center: Point2::new(x, y),
            radius,
        }
    }

    pub const fn at(center: Point, radius: Real) -> Self {
        Self { center, radius }
    }
}

/// Spin direction of a rotor as seen from above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationSense {
    Cw,
    Ccw,
    /// No arrow is drawn.
    None,
}

impl RotationSense {
    /// The opposite spin, `None` stays `None`.
    pub const fn reversed(self) -> Self {
        match self {
            RotationSense::Cw => RotationSense::Ccw,
            RotationSense::Ccw => RotationSense::Cw,
            RotationSense::None => RotationSense::None,
        }
    }
}

/// Diagonal side of a circle where a direction arrow is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    Ne,
    Se,
    Sw,
    Nw,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Quadrant::Ne, Quadrant::Se, Quadrant::Sw, Quadrant::Nw];

    /// Sign of the diagonal in image space, e.g. NE is `(+1, -1)` because y grows downward.
    pub fn diagonal(self) -> Delta {
        match self {
            Quadrant::Ne => Vector2::new(1.0, -1.0),
            Quadrant::Se => Vector2::new(1.0, 1.0),
            Quadrant::Sw => Vector2::new(-1.0, 1.0),
            Quadrant::Nw => Vector2::new(-1.0, -1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_follows_screen_axes() {
        assert_eq!(Quadrant::Ne.diagonal(), Vector2::new(1.0, -1.0));
        assert_eq!(Quadrant::Sw.diagonal(), Vector2::new(-1.0, 1.0));
        for q in Quadrant::ALL {
            let d = q.diagonal();
            assert_eq!(d.x.abs(), 1.0);
            assert_eq!(d.y.abs(), 1.0);
        }
    }

    #[test]
    fn reversed_sense() {
        assert_eq!(RotationSense::Cw.reversed(), RotationSense::Ccw);
        assert_eq!(RotationSense::Ccw.reversed(), RotationSense::Cw);
        assert_eq!(RotationSense::None.reversed(), RotationSense::None);
    }
}
