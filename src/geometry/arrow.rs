//! Rotation-direction arrows drawn beside motor circles.
//!
//! An arrow is two short strokes sharing one anchor. The anchor sits on the
//! corner of the circle's bounding square along the requested diagonal, at
//! `radius/√2` from the center on each axis, so the glyph hugs the outline
//! without overlapping it.

use super::{Circle, Delta, Point, Quadrant, RotationSense};
use crate::float_types::{FRAC_1_SQRT_2, Real};

/// Arrow stroke length as a fraction of the motor radius.
pub const ARROW_LENGTH_RATIO: Real = 0.6;

/// Tangential nudge as a fraction of the arrow length.
pub const ARROW_NUDGE_RATIO: Real = 0.12;

/// Which output delta receives the tangential nudge, and its sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Nudge {
    /// Applied to the x component of the first stroke.
    Dx(Real),
    /// Applied to the y component of the second stroke.
    Dy(Real),
}

/// One row of the arrow sign table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowSigns {
    /// Sign of the second stroke's x extent.
    pub x_adj: Real,
    /// Sign of the first stroke's y extent.
    pub y_adj: Real,
    pub nudge: Nudge,
}

const fn signs(x_adj: Real, y_adj: Real, nudge: Nudge) -> ArrowSigns {
    ArrowSigns { x_adj, y_adj, nudge }
}

// Within a quadrant CW and CCW negate both extents. The nudge axis and sign
// are taken verbatim from the established diagrams: SE and NW keep the
// nudge sign across senses while NE and SW flip it.
const SIGN_TABLE: [((Quadrant, RotationSense), ArrowSigns); 8] = [
    ((Quadrant::Ne, RotationSense::Cw), signs(-1.0, -1.0, Nudge::Dy(1.0))),
    ((Quadrant::Ne, RotationSense::Ccw), signs(1.0, 1.0, Nudge::Dx(-1.0))),
    ((Quadrant::Se, RotationSense::Cw), signs(1.0, -1.0, Nudge::Dx(-1.0))),
    ((Quadrant::Se, RotationSense::Ccw), signs(-1.0, 1.0, Nudge::Dy(-1.0))),
    ((Quadrant::Sw, RotationSense::Cw), signs(1.0, 1.0, Nudge::Dy(-1.0))),
    ((Quadrant::Sw, RotationSense::Ccw), signs(-1.0, -1.0, Nudge::Dx(1.0))),
    ((Quadrant::Nw, RotationSense::Cw), signs(-1.0, 1.0, Nudge::Dx(1.0))),
    ((Quadrant::Nw, RotationSense::Ccw), signs(1.0, -1.0, Nudge::Dy(1.0))),
];

/// Sign table row for `quadrant` and `sense`; `None` when the sense draws no arrow.
pub fn arrow_signs(quadrant: Quadrant, sense: RotationSense) -> Option<ArrowSigns> {
    SIGN_TABLE
        .iter()
        .find(|(key, _)| *key == (quadrant, sense))
        .map(|(_, row)| *row)
}

/// Anchor point plus the two strokes of a direction arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowGeometry {
    pub anchor: Point,
    /// `[(dx, y_adj), (x_adj, dy)]`, both relative to `anchor`.
    pub segments: [Delta; 2],
}

impl ArrowGeometry {
    /// Absolute end point of each stroke.
    pub fn endpoints(&self) -> [Point; 2] {
        [self.anchor + self.segments[0], self.anchor + self.segments[1]]
    }
}

/// Places the direction arrow for a motor drawn as `circle`.
///
/// Returns `None` for [`RotationSense::None`]. Otherwise the anchor is
/// `center + diagonal(quadrant)·radius/√2`, the stroke extents are
/// `±arrow_length` and the nudge is `±arrow_length·0.12`.
///
/// # Example
/// ```
/// use airframe_svg::geometry::{Circle, Quadrant, RotationSense, place_arrow};
/// let arrow = place_arrow(Circle::new(100.0, 100.0, 28.0), RotationSense::Cw, Quadrant::Ne, 16.8).unwrap();
/// assert!((arrow.anchor.x - 119.7990).abs() < 1e-3);
/// assert!((arrow.anchor.y - 80.2010).abs() < 1e-3);
/// ```
pub fn place_arrow(
    circle: Circle,
    sense: RotationSense,
    quadrant: Quadrant,
    arrow_length: Real,
) -> Option<ArrowGeometry> {
    let row = arrow_signs(quadrant, sense)?;

    let radj = circle.radius * FRAC_1_SQRT_2;
    let anchor = circle.center + quadrant.diagonal() * radj;

    let adelta = arrow_length * ARROW_NUDGE_RATIO;
    let (dx, dy) = match row.nudge {
        Nudge::Dx(sign) => (sign * adelta, 0.0),
        Nudge::Dy(sign) => (0.0, sign * adelta),
    };
    let x_adj = row.x_adj * arrow_length;
    let y_adj = row.y_adj * arrow_length;

    Some(ArrowGeometry {
        anchor,
        segments: [Delta::new(dx, y_adj), Delta::new(x_adj, dy)],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_spinning_combination() {
        for q in Quadrant::ALL {
            assert!(arrow_signs(q, RotationSense::Cw).is_some());
            assert!(arrow_signs(q, RotationSense::Ccw).is_some());
            assert!(arrow_signs(q, RotationSense::None).is_none());
        }
    }

    #[test]
    fn extents_mirror_between_senses() {
        for q in Quadrant::ALL {
            let cw = arrow_signs(q, RotationSense::Cw).unwrap();
            let ccw = arrow_signs(q, RotationSense::Ccw).unwrap();
            assert_eq!(cw.x_adj, -ccw.x_adj);
            assert_eq!(cw.y_adj, -ccw.y_adj);
        }
    }

    #[test]
    fn zero_length_arrow_collapses_to_anchor() {
        let a = place_arrow(Circle::new(0.0, 0.0, 10.0), RotationSense::Ccw, Quadrant::Sw, 0.0)
            .unwrap();
        assert_eq!(a.endpoints(), [a.anchor, a.anchor]);
    }
}
