// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Tolerance used when comparing computed coordinates.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// Tolerance used when comparing computed coordinates.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-8;

// Frac 1 Sqrt 2
/// 1/√2, the per-axis offset of a unit diagonal
#[cfg(feature = "f32")]
pub const FRAC_1_SQRT_2: Real = core::f32::consts::FRAC_1_SQRT_2;
/// 1/√2, the per-axis offset of a unit diagonal
#[cfg(feature = "f64")]
pub const FRAC_1_SQRT_2: Real = core::f64::consts::FRAC_1_SQRT_2;

// Degrees in a full turn
pub const FULL_TURN_DEGREES: Real = 360.0;
