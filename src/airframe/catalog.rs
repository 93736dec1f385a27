//! The built-in set of multirotor and fixed-wing airframes.

use super::{Airframe, Anchor, MotorMarker, Outline, Ring};
use crate::float_types::Real;
use crate::geometry::Quadrant::{Ne, Nw, Se, Sw};
use crate::geometry::RotationSense::{Ccw, Cw};
use crate::geometry::{Point, Quadrant, RotationSense};
use crate::style::Color;

/// Layout switches for frames drawn either flat or veed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Tri, V-tail and A-tail booms as a flat T rather than a V.
    pub flat_tail: bool,
    /// Y4 and Y6 booms as a flat T rather than a Y.
    pub flat_y: bool,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            flat_tail: true,
            flat_y: false,
        }
    }
}

fn at(x: Real, y: Real) -> Anchor {
    Anchor::at(x, y)
}

fn v(index: usize) -> Anchor {
    Anchor::Vertex(index)
}

fn motor(
    anchor: Anchor,
    label: &str,
    sense: RotationSense,
    quadrant: Quadrant,
) -> MotorMarker {
    MotorMarker::new(anchor, label, sense, quadrant)
}

/// Front (`front_y`) cross bar plus the boom to `tail_y`, flat or meeting at a hub.
fn t_body(frame: Airframe, flat: bool, front_y: Real, hub_y: Real, tail_y: Real) -> Airframe {
    if flat {
        frame
            .strut(at(40.0, front_y), at(160.0, front_y))
            .strut(at(100.0, front_y), at(100.0, tail_y))
    } else {
        frame
            .strut(at(100.0, hub_y), at(40.0, front_y))
            .strut(at(100.0, hub_y), at(160.0, front_y))
            .strut(at(100.0, hub_y), at(100.0, tail_y))
    }
}

/// Struts joining opposite ring vertices.
fn spokes(mut frame: Airframe, count: usize) -> Airframe {
    for i in 0..count / 2 {
        frame = frame.strut(v(i), v(i + count / 2));
    }
    frame
}

pub fn bicopter() -> Airframe {
    Airframe::new("bicopter")
        .strut(at(40.0, 100.0), at(160.0, 100.0))
        .motor(motor(at(40.0, 100.0), "1", Cw, Nw))
        .motor(motor(at(160.0, 100.0), "2", Ccw, Ne))
        .servo(64.0, 120.0, "S1", Color::BLACK)
        .servo(108.0, 120.0, "S2", Color::BLACK)
        .heading(70.0)
}

pub fn tri(options: CatalogOptions) -> Airframe {
    t_body(Airframe::new("tri"), options.flat_tail, 40.0, 50.0, 160.0)
        .motor(motor(at(100.0, 160.0), "1", Ccw, Nw))
        .motor(motor(at(160.0, 40.0), "2", Ccw, Nw))
        .motor(motor(at(40.0, 40.0), "3", Ccw, Ne))
        .servo(140.0, 140.0, "S1", Color::BLACK)
        .heading(70.0)
}

pub fn quad_x() -> Airframe {
    Airframe::new("quad_x")
        .strut(at(40.0, 40.0), at(160.0, 160.0))
        .strut(at(40.0, 160.0), at(160.0, 40.0))
        .motor(motor(at(160.0, 160.0), "1", Cw, Se))
        .motor(motor(at(160.0, 40.0), "2", Ccw, Ne))
        .motor(motor(at(40.0, 160.0), "3", Ccw, Sw))
        .motor(motor(at(40.0, 40.0), "4", Cw, Nw))
}

pub fn quad_p() -> Airframe {
    Airframe::new("quad_p")
        .strut(at(40.0, 100.0), at(160.0, 100.0))
        .strut(at(100.0, 40.0), at(100.0, 160.0))
        .motor(motor(at(100.0, 160.0), "1", Cw, Sw))
        .motor(motor(at(160.0, 100.0), "2", Ccw, Ne))
        .motor(motor(at(100.0, 40.0), "4", Cw, Ne))
        .motor(motor(at(40.0, 100.0), "3", Ccw, Sw))
}

pub fn hex_p() -> Airframe {
    spokes(
        Airframe::new("hex_p")
            .with_ring(Ring::new(Point::new(100.0, 100.0), 60.0, 6, 0.0))
            .motor_radius(24.0),
        6,
    )
    .motor(motor(v(0), "5", Ccw, Nw))
    .motor(motor(v(1), "2", Cw, Ne))
    .motor(motor(v(2), "1", Ccw, Se))
    .motor(motor(v(3), "6", Cw, Sw))
    .motor(motor(v(4), "3", Ccw, Sw))
    .motor(motor(v(5), "4", Cw, Nw))
}

pub fn hex_x() -> Airframe {
    spokes(
        Airframe::new("hex_x")
            .with_ring(Ring::new(Point::new(100.0, 100.0), 60.0, 6, 30.0))
            .motor_radius(24.0),
        6,
    )
    .motor(motor(v(0), "2", Ccw, Ne))
    .motor(motor(v(1), "5", Cw, Se))
    .motor(motor(v(2), "1", Ccw, Se))
    .motor(motor(v(3), "3", Cw, Sw))
    .motor(motor(v(4), "6", Ccw, Sw))
    .motor(motor(v(5), "4", Cw, Nw))
}

/// Flat octo; `offset` 22.5° gives the X layout, 0° the + layout.
fn octo_flat(name: &str, offset: Real, first: RotationSense) -> Airframe {
    let second = first.reversed();
    let labels = ["2", "6", "3", "7", "4", "8", "1", "5"];
    let quadrants = [Ne, Ne, Se, Se, Sw, Sw, Nw, Nw];

    let mut frame = spokes(
        Airframe::new(name)
            .with_ring(Ring::new(Point::new(100.0, 100.0), 70.0, 8, offset))
            .strut_width(20.0)
            .motor_radius(20.0),
        8,
    );
    for (i, (label, quadrant)) in labels.into_iter().zip(quadrants).enumerate() {
        let sense = if i % 2 == 0 { first } else { second };
        frame = frame.motor(motor(v(i), label, sense, quadrant));
    }
    frame
}

pub fn octo_flat_x() -> Airframe {
    octo_flat("octo_flat_x", 22.5, Ccw)
}

pub fn octo_flat_p() -> Airframe {
    octo_flat("octo_flat_p", 0.0, Cw)
}

pub fn vtail_quad(options: CatalogOptions) -> Airframe {
    t_body(Airframe::new("vtail_quad"), options.flat_tail, 40.0, 50.0, 180.0)
        .strut(at(100.0, 180.0), at(140.0, 160.0))
        .strut(at(100.0, 180.0), at(60.0, 160.0))
        .motor(motor(at(140.0, 160.0), "1", Ccw, Se))
        .motor(motor(at(160.0, 40.0), "2", Cw, Ne))
        .motor(motor(at(60.0, 160.0), "3", Cw, Sw))
        .motor(motor(at(40.0, 40.0), "4", Ccw, Nw))
}

pub fn atail_quad(options: CatalogOptions) -> Airframe {
    t_body(Airframe::new("atail_quad"), options.flat_tail, 40.0, 50.0, 140.0)
        .strut(at(100.0, 140.0), at(140.0, 160.0))
        .strut(at(100.0, 140.0), at(60.0, 160.0))
        .motor(motor(at(60.0, 160.0), "1", Ccw, Sw))
        .motor(motor(at(160.0, 40.0), "2", Ccw, Ne))
        .motor(motor(at(140.0, 160.0), "3", Cw, Se))
        .motor(motor(at(40.0, 40.0), "4", Cw, Nw))
}

pub fn y4(options: CatalogOptions) -> Airframe {
    let frame = Airframe::new("y4").rear_motor(
        motor(at(100.0, 170.0), "3", Ccw, Se)
            .outline(Color::DARK_GREEN)
            .label_offset(0.0, 14.0),
    );
    t_body(frame, options.flat_y, 40.0, 50.0, 140.0)
        .motor(motor(at(160.0, 40.0), "2", Ccw, Ne))
        .motor(motor(at(40.0, 40.0), "4", Cw, Nw))
        .motor(
            motor(at(100.0, 140.0), "1", Cw, Ne)
                .fill(Color::TRANSLUCENT_WHITE)
                .label_offset(0.0, -10.0),
        )
        .heading(60.0)
}

pub fn y6(options: CatalogOptions) -> Airframe {
    let rear = |x, y, label, sense, quadrant, dy| {
        motor(at(x, y), label, sense, quadrant)
            .outline(Color::DARK_GREEN)
            .label_offset(0.0, dy)
    };
    let front = |x, y, label, sense, quadrant, dy| {
        motor(at(x, y), label, sense, quadrant)
            .fill(Color::TRANSLUCENT_WHITE)
            .label_offset(0.0, dy)
    };
    let frame = Airframe::new("y6")
        .rear_motor(rear(100.0, 170.0, "4", Cw, Sw, 14.0))
        .rear_motor(rear(30.0, 30.0, "6", Ccw, Ne, -10.0))
        .rear_motor(rear(170.0, 30.0, "5", Ccw, Nw, -10.0));
    t_body(frame, options.flat_y, 50.0, 60.0, 140.0)
        .motor(front(145.0, 55.0, "2", Cw, Nw, 12.0))
        .motor(front(55.0, 55.0, "3", Cw, Ne, 12.0))
        .motor(front(100.0, 140.0, "1", Ccw, Nw, -10.0))
        .heading(60.0)
}

pub fn octo_x8() -> Airframe {
    let rear = |x, y, label, sense, quadrant, dx, dy| {
        motor(at(x, y), label, sense, quadrant)
            .outline(Color::DARK_GREEN)
            .label_offset(dx, dy)
    };
    let front = |x, y, label, sense, quadrant, dy| {
        motor(at(x, y), label, sense, quadrant)
            .fill(Color::TRANSLUCENT_WHITE)
            .label_offset(0.0, dy)
    };
    Airframe::new("octo_x8")
        .rear_motor(rear(170.0, 170.0, "5", Ccw, Ne, 8.0, 14.0))
        .rear_motor(rear(170.0, 30.0, "6", Cw, Se, 8.0, -10.0))
        .rear_motor(rear(30.0, 170.0, "7", Cw, Nw, -10.0, 14.0))
        .rear_motor(rear(30.0, 30.0, "8", Ccw, Sw, -10.0, -10.0))
        .strut(at(50.0, 50.0), at(150.0, 150.0))
        .strut(at(50.0, 150.0), at(150.0, 50.0))
        .motor(front(150.0, 150.0, "1", Cw, Sw, -10.0))
        .motor(front(150.0, 50.0, "2", Ccw, Nw, 12.0))
        .motor(front(50.0, 150.0, "3", Ccw, Se, -10.0))
        .motor(front(50.0, 50.0, "4", Cw, Ne, 12.0))
}

pub fn airplane() -> Airframe {
    Airframe::new("airplane")
        .strut_width(1.0)
        .motor_radius(14.0)
        .outline(Outline::new(
            &[
                (85.0, 20.0),
                (80.0, 40.0),
                (20.0, 60.0),
                (20.0, 100.0),
                (70.0, 80.0),
                (80.0, 80.0),
                (90.0, 150.0),
                (50.0, 155.0),
                (50.0, 175.0),
                (150.0, 175.0),
                (150.0, 155.0),
                (110.0, 150.0),
                (120.0, 80.0),
                (130.0, 80.0),
                (180.0, 100.0),
                (180.0, 60.0),
                (120.0, 40.0),
                (115.0, 20.0),
            ],
            Color::SILVER,
            true,
        ))
        .outline(Outline::new(
            &[(20.0, 80.0), (20.0, 100.0), (70.0, 80.0), (70.0, 60.0)],
            Color::RED,
            false,
        ))
        .outline(Outline::new(
            &[(180.0, 80.0), (180.0, 100.0), (130.0, 80.0), (130.0, 60.0)],
            Color::GREEN,
            false,
        ))
        .outline(Outline::new(
            &[(50.0, 165.0), (50.0, 175.0), (150.0, 175.0), (150.0, 165.0)],
            Color::ORANGE,
            false,
        ))
        .outline(Outline::new(
            &[(100.0, 140.0), (95.0, 150.0), (100.0, 175.0), (105.0, 150.0)],
            Color::BLACK,
            false,
        ))
        .motor(motor(at(100.0, 15.0), "1/2", RotationSense::None, Se).label_offset(-9.0, 0.0))
        .servo(30.0, 100.0, " 3", Color::RED)
        .servo(142.0, 100.0, " 4", Color::GREEN)
        .servo(64.0, 134.0, " 5", Color::BLACK)
        .servo(154.0, 168.0, " 6", Color::ORANGE)
        .heading(50.0)
}

pub fn flying_wing() -> Airframe {
    Airframe::new("flying_wing")
        .strut_width(1.0)
        .servos_first()
        .outline(Outline::new(
            &[
                (80.0, 20.0),
                (20.0, 80.0),
                (20.0, 120.0),
                (70.0, 80.0),
                (130.0, 80.0),
                (180.0, 120.0),
                (180.0, 80.0),
                (120.0, 20.0),
            ],
            Color::SILVER,
            false,
        ))
        .outline(Outline::new(
            &[(20.0, 100.0), (20.0, 120.0), (70.0, 80.0), (70.0, 60.0)],
            Color::RED,
            false,
        ))
        .outline(Outline::new(
            &[(180.0, 100.0), (180.0, 120.0), (130.0, 80.0), (130.0, 60.0)],
            Color::GREEN,
            false,
        ))
        .motor(motor(at(100.0, 110.0), "1/2", RotationSense::None, Se).label_offset(-16.0, 0.0))
        .servo(30.0, 120.0, " 3", Color::RED)
        .servo(142.0, 120.0, " 4", Color::GREEN)
        .heading(30.0)
}

/// Every built-in airframe, in a stable order.
pub fn catalog(options: CatalogOptions) -> Vec<Airframe> {
    vec![
        bicopter(),
        tri(options),
        quad_x(),
        quad_p(),
        hex_p(),
        hex_x(),
        octo_flat_x(),
        octo_flat_p(),
        vtail_quad(options),
        atail_quad(options),
        y4(options),
        y6(options),
        octo_x8(),
        airplane(),
        flying_wing(),
    ]
}

/// Looks up a catalog airframe by name.
pub fn find(name: &str, options: CatalogOptions) -> Option<Airframe> {
    catalog(options).into_iter().find(|a| a.name == name)
}
