//! drift-trig
//!
//! Fast, table-free trigonometry at selectable accuracy/cost levels.
//!
//! Includes:
//! - Range reduction by quadrant (cosine/sine) and octant (tangent)
//! - Even-polynomial cosine kernels (3.2, 5.2, 7.3, 12.1 digits)
//! - Odd-rational tangent kernels (3.2, 5.6, 8.2, 14 digits)
//! - Odd-rational arctangent kernels with region folding (6.6, 13.7 digits)
//! - A flat per-tier facade (`cos_32`, `tan_82`, `atan_137`, ...)
//!
//! Every function is pure and allocation-free; calls run in a fixed number of
//! operations for a given tier. Accuracy figures are nominal over each
//! kernel's reduced domain and are capped by `f32` rounding in practice.
//!
//! Nothing here guards the tangent poles at odd multiples of π/2: the
//! denominator simply approaches zero there.

pub mod accuracy;
pub mod arctangent;
pub mod cosine;
pub mod facade;
pub mod kernel;
pub mod reduce;
pub mod tangent;

pub use arctangent::{ArctanTier, ATAN_137, ATAN_66};
pub use cosine::{CosineTier, COS_121, COS_32, COS_52, COS_73};
pub use facade::*;
pub use tangent::{TangentTier, TAN_14, TAN_32, TAN_56, TAN_82};

/// Degrees → radians.
pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;
/// Radians → degrees.
pub const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;
