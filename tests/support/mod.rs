//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use airframe_svg::{
    float_types::Real,
    geometry::{Delta, Point},
};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Component-wise comparison of two points.
pub fn point_approx_eq(p: Point, x: Real, y: Real, eps: Real) -> bool {
    approx_eq(p.x, x, eps) && approx_eq(p.y, y, eps)
}

/// Component-wise comparison of two deltas.
pub fn delta_approx_eq(d: Delta, x: Real, y: Real, eps: Real) -> bool {
    approx_eq(d.x, x, eps) && approx_eq(d.y, y, eps)
}

/// Clockwise screen angle of `p` around `center`, measured from "up", in `[0, 360)`.
pub fn screen_angle(center: Point, p: Point) -> Real {
    let d = p - center;
    d.x.atan2(-d.y).to_degrees().rem_euclid(360.0)
}

/// The `d` attribute of every `<path>` element, in document order.
pub fn path_data(svg: &str) -> Vec<String> {
    svg.split("<path")
        .skip(1)
        .filter_map(|element| {
            let tag = &element[..element.find('>')?];
            let start = tag.find(" d=\"")? + 4;
            let len = tag[start..].find('"')?;
            Some(tag[start..start + len].to_string())
        })
        .collect()
}

/// Splits path data into `(command, x, y)` steps. Every command used here takes one pair.
pub fn path_steps(d: &str) -> Vec<(char, Real, Real)> {
    let mut spaced = String::with_capacity(d.len() * 2);
    for c in d.chars() {
        match c {
            'M' | 'm' | 'L' | 'l' | 'Z' | 'z' => {
                spaced.push(' ');
                spaced.push(c);
                spaced.push(' ');
            },
            ',' => spaced.push(' '),
            _ => spaced.push(c),
        }
    }
    let mut steps = Vec::new();
    let mut tokens = spaced.split_whitespace();
    while let Some(token) = tokens.next() {
        let command = token.chars().next().unwrap();
        if command == 'Z' || command == 'z' {
            continue;
        }
        let x: Real = tokens.next().unwrap().parse().unwrap();
        let y: Real = tokens.next().unwrap().parse().unwrap();
        steps.push((command, x, y));
    }
    steps
}

/// Opening tag of every `<name` element, in document order.
pub fn element_tags<'a>(svg: &'a str, name: &str) -> Vec<&'a str> {
    let open = format!("<{name}");
    svg.match_indices(&open)
        .filter_map(|(at, _)| svg[at..].find('>').map(|end| &svg[at..at + end]))
        .collect()
}
