//! Colors, stroke styles and the fixed dimensions of a diagram.

use crate::float_types::Real;
use std::fmt;

/// Width and height of the square canvas, in device units.
pub const CANVAS_SIZE: u32 = 200;

/// Default motor circle radius.
pub const MOTOR_RADIUS: Real = 28.0;
/// Default width of the body struts.
pub const STRUT_WIDTH: Real = 28.0;
/// Stroke width of motor circles and their arrows.
pub const MOTOR_LINE_WIDTH: Real = 3.0;

/// Side of a servo box.
pub const SERVO_SIZE: Real = 28.0;
pub const SERVO_FONT_SIZE: Real = 16.0;

/// Default vertical position of the heading marker.
pub const HEADING_Y: Real = 80.0;
pub const HEADING_X: Real = 100.0;
pub const HEADING_SHAFT_WIDTH: Real = 12.0;
pub const HEADING_SHAFT_LENGTH: Real = 40.0;

pub const FONT_FAMILY: &str = "sans-serif";

/// Comment placed after the first line of every generated file.
pub const ATTRIBUTION: &str = "Public domain (CC-BY-SA if you or your laws insist), generated by airframe-svg";

/// An sRGB color with 8-bit alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BODY_GREY: Color = Color::rgb(0xba, 0xba, 0xba);
    pub const CIRCLE_GREEN: Color = Color::rgb(0x4c, 0xb9, 0x44);
    pub const ARROW_RED: Color = Color::rgb(0xfa, 0x07, 0x00);

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const DARK_GREEN: Color = Color::rgb(0x00, 0x64, 0x00);
    pub const SILVER: Color = Color::rgb(0xc0, 0xc0, 0xc0);
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);
    pub const GREEN: Color = Color::rgb(0x00, 0x80, 0x00);
    pub const ORANGE: Color = Color::rgb(0xff, 0xa5, 0x00);
    /// `#fff8`, used to knock out struts behind the front motors.
    pub const TRANSLUCENT_WHITE: Color = Color::rgba(0xff, 0xff, 0xff, 0x88);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `None` when fully opaque, otherwise alpha in `[0, 1]` rounded to three places.
    pub fn opacity(&self) -> Option<Real> {
        if self.a == 0xff {
            None
        } else {
            Some((self.a as Real / 255.0 * 1000.0).round() / 1000.0)
        }
    }
}

/// Formats as `#rrggbb`; alpha is carried separately through [`Color::opacity`].
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    pub const fn as_svg(self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

impl LineCap {
    pub const fn as_svg(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
        }
    }
}
