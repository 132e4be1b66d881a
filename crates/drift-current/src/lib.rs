//! drift-current
//!
//! Estimate a water current ("set and drift") from two velocities:
//! the vessel's speed/heading through the water and its speed/track over
//! the ground. The current is whatever turns the first into the second.
//!
//! Includes:
//! - The drift solver (law of cosines / sines with degenerate-case branches)
//! - Tolerances and tier selection, loadable from JSON
//! - Polar ↔ (east, north) velocity helpers on `nalgebra`
//! - Tilt (roll/pitch) from a raw accelerometer sample, with level classes
//!
//! Conventions:
//! - Speeds are in any one consistent unit; the output uses the same unit.
//! - Angles are compass degrees: 0° = north, 90° = east, clockwise.
//! - Output current angle is normalized into `[0, 360)`.

pub mod config;
pub mod error;
pub mod solver;
pub mod tilt;
pub mod velocity;

pub use config::{CosineChoice, DriftConfig, DriftTolerances, MIN_ANGLE_TOLERANCE, MIN_SPEED_TOLERANCE};
pub use error::ConfigError;
pub use solver::{compute_current, compute_current_with, normalize_degrees_once, CurrentEstimate, DriftCase, DriftInput};
pub use tilt::{Tilt, TiltLevel, TiltMonitor, TiltThresholds};
pub use velocity::PolarVelocity;
