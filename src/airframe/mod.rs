//! Declarative airframe descriptions and their rendering.
//!
//! An [`Airframe`] is plain data: struts, motor markers, servo boxes and
//! filled outlines, positioned either absolutely or by index into an
//! optional regular [`Ring`] of vertices. Rendering walks the data in
//! layer order:
//!
//! 1. rear motors (drawn underneath the body)
//! 2. filled outlines
//! 3. struts, stroked together
//! 4. motors
//! 5. servos
//! 6. heading marker
//!
//! [`Airframe::servos_first`] swaps layers 4 and 5. Servo boxes are stroked
//! with the line width left by the previous layer, so the swap decides
//! whether they inherit the outline width or the motor width.

use crate::diagram::{Diagram, MotorPaint};
use crate::errors::RenderError;
use crate::float_types::Real;
use crate::geometry::{Delta, Point, Quadrant, RotationSense, regular_ngon_points};
use crate::style::{Color, HEADING_Y, MOTOR_RADIUS, STRUT_WIDTH};
use geo::LineString;
use std::path::{Path, PathBuf};

pub mod catalog;

pub use catalog::{CatalogOptions, catalog, find};

/// Evenly spaced motor positions for symmetric frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub center: Point,
    pub radius: Real,
    pub count: usize,
    pub offset_degrees: Real,
}

impl Ring {
    pub fn new(center: Point, radius: Real, count: usize, offset_degrees: Real) -> Self {
        Self {
            center,
            radius,
            count,
            offset_degrees,
        }
    }

    pub fn vertices(&self) -> Vec<Point> {
        regular_ngon_points(self.center, self.radius, self.count, self.offset_degrees)
    }
}

/// Where a strut end or motor sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    At(Point),
    /// Index into the airframe's [`Ring`].
    Vertex(usize),
}

impl Anchor {
    pub fn at(x: Real, y: Real) -> Self {
        Anchor::At(Point::new(x, y))
    }
}

/// A straight body segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strut(pub Anchor, pub Anchor);

#[derive(Debug, Clone, PartialEq)]
pub struct MotorMarker {
    pub at: Anchor,
    pub label: String,
    pub sense: RotationSense,
    pub quadrant: Quadrant,
    pub paint: MotorPaint,
}

impl MotorMarker {
    pub fn new(at: Anchor, label: impl Into<String>, sense: RotationSense, quadrant: Quadrant) -> Self {
        Self {
            at,
            label: label.into(),
            sense,
            quadrant,
            paint: MotorPaint::default(),
        }
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.paint.fill = Some(color);
        self
    }

    pub fn outline(mut self, color: Color) -> Self {
        self.paint.outline = Some(color);
        self
    }

    pub fn label_offset(mut self, dx: Real, dy: Real) -> Self {
        self.paint.label_offset = Delta::new(dx, dy);
        self
    }
}

/// A labelled servo box; `(x, y)` is its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct ServoMarker {
    pub x: Real,
    pub y: Real,
    pub label: String,
    pub color: Color,
}

/// A filled closed shape such as a wing or control surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub ring: LineString<Real>,
    pub fill: Color,
    /// Round line caps for the rest of the body.
    pub round: bool,
}

impl Outline {
    /// Closes `points` into a ring.
    pub fn new(points: &[(Real, Real)], fill: Color, round: bool) -> Self {
        let mut ring = LineString::from(points.to_vec());
        ring.close();
        Self { ring, fill, round }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Airframe {
    pub name: String,
    pub ring: Option<Ring>,
    pub strut_width: Real,
    pub motor_radius: Real,
    pub rear_motors: Vec<MotorMarker>,
    pub outlines: Vec<Outline>,
    pub struts: Vec<Strut>,
    pub motors: Vec<MotorMarker>,
    pub servos: Vec<ServoMarker>,
    /// Draw servos before motors.
    pub servos_first: bool,
    pub heading_y: Real,
}

impl Airframe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ring: None,
            strut_width: STRUT_WIDTH,
            motor_radius: MOTOR_RADIUS,
            rear_motors: Vec::new(),
            outlines: Vec::new(),
            struts: Vec::new(),
            motors: Vec::new(),
            servos: Vec::new(),
            servos_first: false,
            heading_y: HEADING_Y,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.svg", self.name)
    }

    pub fn with_ring(mut self, ring: Ring) -> Self {
        self.ring = Some(ring);
        self
    }

    pub fn strut_width(mut self, width: Real) -> Self {
        self.strut_width = width;
        self
    }

    pub fn motor_radius(mut self, radius: Real) -> Self {
        self.motor_radius = radius;
        self
    }

    pub fn servos_first(mut self) -> Self {
        self.servos_first = true;
        self
    }

    pub fn heading(mut self, y: Real) -> Self {
        self.heading_y = y;
        self
    }

    pub fn strut(mut self, from: Anchor, to: Anchor) -> Self {
        self.struts.push(Strut(from, to));
        self
    }

    pub fn outline(mut self, outline: Outline) -> Self {
        self.outlines.push(outline);
        self
    }

    pub fn rear_motor(mut self, motor: MotorMarker) -> Self {
        self.rear_motors.push(motor);
        self
    }

    pub fn motor(mut self, motor: MotorMarker) -> Self {
        self.motors.push(motor);
        self
    }

    pub fn servo(mut self, x: Real, y: Real, label: impl Into<String>, color: Color) -> Self {
        self.servos.push(ServoMarker {
            x,
            y,
            label: label.into(),
            color,
        });
        self
    }

    /// Ring vertices, empty when the airframe has no ring.
    pub fn vertices(&self) -> Vec<Point> {
        self.ring.map(|r| r.vertices()).unwrap_or_default()
    }

    /// Absolute position of `anchor`.
    pub fn resolve(&self, anchor: Anchor) -> Result<Point, RenderError> {
        self.resolve_in(anchor, &self.vertices())
    }

    fn resolve_in(&self, anchor: Anchor, vertices: &[Point]) -> Result<Point, RenderError> {
        match anchor {
            Anchor::At(p) => Ok(p),
            Anchor::Vertex(index) => {
                vertices
                    .get(index)
                    .copied()
                    .ok_or_else(|| RenderError::VertexOutOfRange {
                        airframe: self.name.clone(),
                        index,
                        count: vertices.len(),
                    })
            },
        }
    }

    /// Builds the diagram in memory.
    pub fn render(&self) -> Result<Diagram, RenderError> {
        log::debug!("rendering {}", self.name);
        let vertices = self.vertices();
        let mut diagram = Diagram::new();
        diagram.set_strut_width(self.strut_width);
        diagram.set_motor_radius(self.motor_radius);

        self.draw_motors(&mut diagram, &self.rear_motors, &vertices)?;
        for outline in &self.outlines {
            diagram.draw_outline(&outline.ring, outline.fill, outline.round);
        }
        for Strut(from, to) in &self.struts {
            let from = self.resolve_in(*from, &vertices)?;
            let to = self.resolve_in(*to, &vertices)?;
            diagram.draw_strut(from, to);
        }
        diagram.end_body();
        if self.servos_first {
            self.draw_servos(&mut diagram);
            self.draw_motors(&mut diagram, &self.motors, &vertices)?;
        } else {
            self.draw_motors(&mut diagram, &self.motors, &vertices)?;
            self.draw_servos(&mut diagram);
        }
        diagram.draw_heading(self.heading_y);
        Ok(diagram)
    }

    /// Renders and writes `<dir>/<name>.svg`, returning the written path.
    pub fn write(&self, dir: &Path) -> Result<PathBuf, RenderError> {
        let path = dir.join(self.file_name());
        self.render()?.close(&path)?;
        Ok(path)
    }

    fn draw_motors(
        &self,
        diagram: &mut Diagram,
        motors: &[MotorMarker],
        vertices: &[Point],
    ) -> Result<(), RenderError> {
        for motor in motors {
            let center = self.resolve_in(motor.at, vertices)?;
            diagram.draw_motor(center, &motor.label, motor.sense, motor.quadrant, motor.paint);
        }
        Ok(())
    }

    fn draw_servos(&self, diagram: &mut Diagram) {
        for servo in &self.servos {
            diagram.draw_servo(servo.x, servo.y, &servo.label, servo.color);
        }
    }
}

/// Writes every catalog airframe into `dir`.
///
/// Each diagram is rendered on its own; a failure is logged and recorded
/// against that airframe while the remaining ones are still written.
pub fn render_catalog(
    dir: &Path,
    options: CatalogOptions,
) -> Vec<(String, Result<PathBuf, RenderError>)> {
    catalog(options)
        .into_iter()
        .map(|airframe| {
            let result = airframe.write(dir);
            if let Err(err) = &result {
                log::warn!("skipping {}: {err}", airframe.name);
            }
            (airframe.name, result)
        })
        .collect()
}
