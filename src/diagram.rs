//! A single drawing session that accumulates SVG primitives.
//!
//! The session behaves like a stateful 2D context: color, line width, join,
//! cap and font size persist from one primitive to the next, so a primitive
//! that does not set a property inherits whatever the previous one left.
//! Body struts are buffered and stroked together by [`Diagram::end_body`].

use crate::errors::WriteError;
use crate::float_types::Real;
use crate::geometry::{
    Circle, Delta, Point, Quadrant, RotationSense, arrow::ARROW_LENGTH_RATIO, place_arrow,
};
use crate::io::{XML_DECLARATION, insert_attribution, write_svg};
use crate::style::{
    ATTRIBUTION, CANVAS_SIZE, Color, FONT_FAMILY, HEADING_SHAFT_LENGTH, HEADING_SHAFT_WIDTH,
    HEADING_X, LineCap, LineJoin, MOTOR_LINE_WIDTH, MOTOR_RADIUS, SERVO_FONT_SIZE, SERVO_SIZE,
    STRUT_WIDTH,
};
use geo::LineString;
use std::path::Path;
use svg::Document;
use svg::Node;
use svg::node::element::{Circle as SvgCircle, Path as SvgPath, Rectangle, Text, path::Data};

/// Optional paint overrides for a motor marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorPaint {
    /// Disk fill drawn underneath the outline.
    pub fill: Option<Color>,
    /// Outline and arrow color, circle green when unset.
    pub outline: Option<Color>,
    /// Shift of the label from its default spot.
    pub label_offset: Delta,
}

impl Default for MotorPaint {
    fn default() -> Self {
        Self {
            fill: None,
            outline: None,
            label_offset: Delta::zeros(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Paint {
    Fill,
    Stroke,
}

/// Drawing state for one diagram. Create one per output file.
#[derive(Debug)]
pub struct Diagram {
    document: Document,
    color: Color,
    line_width: Real,
    line_join: LineJoin,
    line_cap: LineCap,
    font_size: Real,
    strut_width: Real,
    motor_radius: Real,
    struts: Vec<(Point, Point)>,
    primitives: usize,
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagram {
    /// Empty 200×200 canvas with the default strut width and motor radius.
    pub fn new() -> Self {
        let document = Document::new()
            .set("width", CANVAS_SIZE)
            .set("height", CANVAS_SIZE)
            .set("viewBox", (0, 0, CANVAS_SIZE, CANVAS_SIZE));
        Self {
            document,
            color: Color::BLACK,
            line_width: 2.0,
            line_join: LineJoin::Miter,
            line_cap: LineCap::Butt,
            font_size: 10.0,
            strut_width: STRUT_WIDTH,
            motor_radius: MOTOR_RADIUS,
            struts: Vec::new(),
            primitives: 0,
        }
    }

    pub const fn motor_radius(&self) -> Real {
        self.motor_radius
    }

    pub fn set_motor_radius(&mut self, radius: Real) {
        self.motor_radius = radius;
    }

    pub const fn strut_width(&self) -> Real {
        self.strut_width
    }

    /// Width used by struts and outlines drawn after this call.
    pub fn set_strut_width(&mut self, width: Real) {
        self.strut_width = width;
    }

    /// Line width currently in effect.
    pub const fn line_width(&self) -> Real {
        self.line_width
    }

    pub const fn line_cap(&self) -> LineCap {
        self.line_cap
    }

    /// Number of SVG elements emitted so far.
    pub const fn primitives(&self) -> usize {
        self.primitives
    }

    /// Fills the closed ring with `fill`.
    pub fn draw_outline(&mut self, ring: &LineString<Real>, fill: Color, round: bool) {
        if round {
            self.line_cap = LineCap::Round;
        }
        self.color = fill;
        self.line_width = self.strut_width;

        let mut coords = ring.coords();
        let Some(first) = coords.next() else {
            return;
        };
        let mut data = Data::new().move_to((first.x, first.y));
        let rest: Vec<_> = coords.collect();
        let rest = match rest.split_last() {
            Some((last, init)) if ring.is_closed() && *last == first => init,
            _ => &rest[..],
        };
        for c in rest {
            data = data.line_to((c.x, c.y));
        }
        let mut path = SvgPath::new().set("d", data.close());
        self.paint(&mut path, Paint::Fill);
        path.assign("stroke", "none");
        self.push(path);
    }

    /// Queues a body strut; nothing is emitted until [`Diagram::end_body`].
    pub fn draw_strut(&mut self, from: Point, to: Point) {
        self.color = Color::BODY_GREY;
        self.line_width = self.strut_width;
        self.line_join = LineJoin::Round;
        self.struts.push((from, to));
    }

    /// Strokes all queued struts with round caps, then returns to butt caps.
    pub fn end_body(&mut self) {
        self.line_cap = LineCap::Round;
        if !self.struts.is_empty() {
            let data = self
                .struts
                .drain(..)
                .fold(Data::new(), |data, (from, to)| {
                    data.move_to((from.x, from.y)).line_to((to.x, to.y))
                });
            let mut path = SvgPath::new().set("d", data);
            self.paint(&mut path, Paint::Stroke);
            self.push(path);
        }
        self.line_cap = LineCap::Butt;
    }

    /// A servo box with its top-left corner at `(x, y)`, outlined in `color`.
    pub fn draw_servo(&mut self, x: Real, y: Real, label: &str, color: Color) {
        self.color = color;
        let mut rect = Rectangle::new()
            .set("x", x)
            .set("y", y)
            .set("width", SERVO_SIZE)
            .set("height", SERVO_SIZE);
        self.paint(&mut rect, Paint::Stroke);
        self.push(rect);

        self.font_size = SERVO_FONT_SIZE;
        self.color = Color::BLACK;
        self.label(x + 4.0, y + 20.0, label);
    }

    /// The "forward" marker: a thick shaft topped with a filled triangle whose apex is at `y - 5`.
    pub fn draw_heading(&mut self, y: Real) {
        self.line_join = LineJoin::Bevel;
        self.color = Color::ARROW_RED;

        self.line_width = HEADING_SHAFT_WIDTH;
        let shaft = Data::new()
            .move_to((HEADING_X, y))
            .line_by((0.0, HEADING_SHAFT_LENGTH));
        let mut path = SvgPath::new().set("d", shaft);
        self.paint(&mut path, Paint::Stroke);
        self.push(path);

        self.line_width = 1.0;
        let head = Data::new()
            .move_to((HEADING_X, y - 5.0))
            .line_by((-15.0, 15.0))
            .line_by((30.0, 0.0))
            .line_by((-15.0, -15.0))
            .close();
        let mut path = SvgPath::new().set("d", head);
        self.paint(&mut path, Paint::Fill);
        self.push(path);
    }

    /// A labelled motor circle at `center`, with a direction arrow unless `sense` is `None`.
    pub fn draw_motor(
        &mut self,
        center: Point,
        label: &str,
        sense: RotationSense,
        quadrant: Quadrant,
        paint: MotorPaint,
    ) {
        let radius = self.motor_radius;
        self.font_size = radius;
        self.line_join = LineJoin::Miter;
        self.line_width = MOTOR_LINE_WIDTH;

        if let Some(fill) = paint.fill {
            self.color = fill;
            let mut disk = Self::circle(center, radius);
            self.paint(&mut disk, Paint::Fill);
            self.push(disk);
        }

        self.color = paint.outline.unwrap_or(Color::CIRCLE_GREEN);
        let mut ring = Self::circle(center, radius);
        self.paint(&mut ring, Paint::Stroke);
        self.push(ring);

        let circle = Circle::at(center, radius);
        if let Some(arrow) = place_arrow(circle, sense, quadrant, radius * ARROW_LENGTH_RATIO) {
            let anchor = (arrow.anchor.x, arrow.anchor.y);
            let [a, b] = arrow.segments;
            let data = Data::new()
                .move_to(anchor)
                .line_by((a.x, a.y))
                .move_to(anchor)
                .line_by((b.x, b.y));
            let mut path = SvgPath::new().set("d", data);
            self.paint(&mut path, Paint::Stroke);
            self.push(path);
        }

        // labels sit a whole-unit quarter radius off center
        let inset = (radius / 4.0).trunc();
        self.color = Color::BLACK;
        self.label(
            center.x - inset + paint.label_offset.x,
            center.y + inset + paint.label_offset.y,
            label,
        );
    }

    /// Serializes the document, preceded by the XML declaration line.
    pub fn finish(self) -> String {
        log::debug!("finishing diagram with {} primitives", self.primitives);
        format!("{XML_DECLARATION}\n{}\n", self.document)
    }

    /// Finishes the diagram and writes it, with the attribution comment, to `path`.
    pub fn close(self, path: &Path) -> Result<(), WriteError> {
        let contents = insert_attribution(&self.finish(), ATTRIBUTION);
        write_svg(path, &contents)
    }

    fn circle(center: Point, radius: Real) -> SvgCircle {
        SvgCircle::new()
            .set("cx", center.x)
            .set("cy", center.y)
            .set("r", radius)
    }

    fn label(&mut self, x: Real, y: Real, text: &str) {
        let mut node = Text::new(keep_leading_spaces(text))
            .set("x", x)
            .set("y", y)
            .set("font-family", FONT_FAMILY)
            .set("font-size", self.font_size);
        self.paint(&mut node, Paint::Fill);
        self.push(node);
    }

    /// Applies the current color and, for strokes, line style to `node`.
    fn paint<N: Node>(&self, node: &mut N, paint: Paint) {
        match paint {
            Paint::Fill => {
                node.assign("fill", self.color.to_string());
                if let Some(opacity) = self.color.opacity() {
                    node.assign("fill-opacity", opacity);
                }
            },
            Paint::Stroke => {
                node.assign("fill", "none");
                node.assign("stroke", self.color.to_string());
                if let Some(opacity) = self.color.opacity() {
                    node.assign("stroke-opacity", opacity);
                }
                node.assign("stroke-width", self.line_width);
                node.assign("stroke-linejoin", self.line_join.as_svg());
                node.assign("stroke-linecap", self.line_cap.as_svg());
            },
        }
    }

    fn push<N: Node + 'static>(&mut self, node: N) {
        self.document.append(node);
        self.primitives += 1;
    }
}

/// Leading spaces indent a label; no-break spaces survive SVG whitespace collapsing.
fn keep_leading_spaces(text: &str) -> String {
    let body = text.trim_start_matches(' ');
    let indent = text.len() - body.len();
    let mut out = String::with_capacity(text.len() + indent);
    out.extend(std::iter::repeat_n('\u{a0}', indent));
    out.push_str(body);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::line_string;

    #[test]
    fn leading_label_spaces_become_no_break() {
        assert_eq!(keep_leading_spaces(" 3"), "\u{a0}3");
        assert_eq!(keep_leading_spaces("  S1 x"), "\u{a0}\u{a0}S1 x");
        assert_eq!(keep_leading_spaces("1/2"), "1/2");

        let mut d = Diagram::new();
        d.draw_servo(30.0, 100.0, " 3", Color::RED);
        let out = d.finish();
        assert!(out.contains("\u{a0}3"));
        assert!(!out.contains(" 3\n"));
    }

    #[test]
    fn motor_label_inset_is_whole_units() {
        let mut d = Diagram::new();
        d.set_motor_radius(14.0);
        d.draw_motor(
            Point::new(100.0, 15.0),
            "1/2",
            RotationSense::None,
            Quadrant::Se,
            MotorPaint { label_offset: Delta::new(-9.0, 0.0), ..Default::default() },
        );
        let out = d.finish();
        // 100 - 3 - 9, 15 + 3
        assert!(out.contains("x=\"88\""), "{out}");
        assert!(out.contains("y=\"18\""), "{out}");

        let mut d = Diagram::new();
        d.draw_motor(
            Point::new(40.0, 100.0),
            "1",
            RotationSense::None,
            Quadrant::Se,
            MotorPaint::default(),
        );
        let out = d.finish();
        assert!(out.contains("x=\"33\""), "{out}");
        assert!(out.contains("y=\"107\""), "{out}");
    }

    #[test]
    fn struts_are_buffered_until_end_body() {
        let mut d = Diagram::new();
        d.draw_strut(Point::new(40.0, 40.0), Point::new(160.0, 160.0));
        d.draw_strut(Point::new(40.0, 160.0), Point::new(160.0, 40.0));
        assert_eq!(d.primitives(), 0);
        d.end_body();
        assert_eq!(d.primitives(), 1);
        assert_eq!(d.line_cap(), LineCap::Butt);
        let out = d.finish();
        assert!(out.contains("stroke-linecap=\"round\""));
        assert!(out.contains("#bababa"));
    }

    #[test]
    fn end_body_without_struts_emits_nothing() {
        let mut d = Diagram::new();
        d.end_body();
        assert_eq!(d.primitives(), 0);
    }

    #[test]
    fn servo_inherits_previous_line_width() {
        let mut d = Diagram::new();
        d.draw_motor(
            Point::new(40.0, 100.0),
            "1",
            RotationSense::Cw,
            Quadrant::Nw,
            MotorPaint::default(),
        );
        assert_eq!(d.line_width(), MOTOR_LINE_WIDTH);
        d.draw_servo(64.0, 120.0, "S1", Color::BLACK);
        assert_eq!(d.line_width(), MOTOR_LINE_WIDTH);
    }

    #[test]
    fn motor_without_sense_has_no_arrow() {
        let mut d = Diagram::new();
        d.draw_motor(
            Point::new(100.0, 15.0),
            "1/2",
            RotationSense::None,
            Quadrant::Se,
            MotorPaint::default(),
        );
        // outline + label
        assert_eq!(d.primitives(), 2);

        let mut d = Diagram::new();
        d.draw_motor(
            Point::new(100.0, 100.0),
            "1",
            RotationSense::Ccw,
            Quadrant::Ne,
            MotorPaint { fill: Some(Color::TRANSLUCENT_WHITE), ..Default::default() },
        );
        // fill + outline + arrow + label
        assert_eq!(d.primitives(), 4);
        assert!(d.finish().contains("fill-opacity"));
    }

    #[test]
    fn outline_is_filled_and_sets_round_cap() {
        let mut d = Diagram::new();
        d.set_strut_width(1.0);
        let ring = line_string![
            (x: 20.0, y: 80.0),
            (x: 20.0, y: 100.0),
            (x: 70.0, y: 80.0),
            (x: 20.0, y: 80.0),
        ];
        d.draw_outline(&ring, Color::RED, true);
        assert_eq!(d.line_cap(), LineCap::Round);
        assert_eq!(d.line_width(), 1.0);
        let out = d.finish();
        assert!(out.contains("fill=\"#ff0000\""));
        assert!(out.contains("stroke=\"none\""));
    }

    #[test]
    fn finish_starts_with_declaration() {
        let out = Diagram::new().finish();
        assert!(out.starts_with(XML_DECLARATION));
        assert!(out.contains("viewBox=\"0 0 200 200\""));
    }
}
