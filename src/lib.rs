//! Vector diagrams of multirotor and fixed-wing **airframe layouts**:
//! body struts, motor positions with rotation-direction arrows, servo boxes
//! and a heading marker, written as one 200×200 SVG per airframe.
//!
//! The geometry lives in [`geometry`]: [`geometry::regular_ngon_points`] lays
//! motors out evenly around a circle and [`geometry::place_arrow`] computes the
//! two strokes of a direction arrow beside a motor circle. [`diagram::Diagram`]
//! is the per-file drawing session, and [`airframe`] holds the declarative
//! descriptions of each supported frame.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod airframe;
pub mod diagram;
pub mod errors;
pub mod float_types;
pub mod geometry;
pub mod io;
pub mod style;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use airframe::{Airframe, CatalogOptions, render_catalog};
pub use diagram::Diagram;
pub use errors::{RenderError, WriteError};
