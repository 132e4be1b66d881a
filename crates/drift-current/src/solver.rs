//! Drift solver.
//!
//! Water and ground velocity are two sides of a triangle whose included
//! angle is `δ = track - heading`; the third side is the current. The general
//! case uses the law of cosines for its length and the law of sines for its
//! direction. Four degenerate configurations are caught first, in order:
//!
//! 1. no ground speed   → current = water velocity reversed
//! 2. no water speed    → current = ground speed along the heading
//! 3. track ≈ heading   → current speed = ground - water (may be negative)
//! 4. track ≈ heading+π → current speed = ground + water, heading reversed
//!
//! Checks 3 and 4 compare `δ` wrapped into `[-π, π)`, so 359.99° against
//! 0.01° counts as colinear.

use core::f32::consts::{PI, TAU};

use drift_trig::{SinCos, DEG_TO_RAD, RAD_TO_DEG};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use uom::si::angle::degree;
use uom::si::f32::{Angle, Velocity};
use uom::si::velocity::meter_per_second;

use crate::config::{DriftConfig, DriftTolerances};
use crate::velocity::PolarVelocity;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DriftInput {
    /// Speed through the water, ≥ 0.
    pub water_speed: f32,
    /// Heading through the water [deg].
    pub heading_deg: f32,
    /// Speed over the ground, ≥ 0.
    pub ground_speed: f32,
    /// Track over the ground [deg].
    pub track_deg: f32,
}

impl DriftInput {
    pub fn new(water_speed: f32, heading_deg: f32, ground_speed: f32, track_deg: f32) -> Self {
        Self { water_speed, heading_deg, ground_speed, track_deg }
    }

    /// Build from unit-carrying quantities. Speeds are stored in m/s, so the
    /// estimate's speed is in m/s as well.
    pub fn from_quantities(water: Velocity, heading: Angle, ground: Velocity, track: Angle) -> Self {
        Self {
            water_speed: water.get::<meter_per_second>(),
            heading_deg: heading.get::<degree>(),
            ground_speed: ground.get::<meter_per_second>(),
            track_deg: track.get::<degree>(),
        }
    }

    pub fn water_velocity(&self) -> PolarVelocity {
        PolarVelocity::new(self.water_speed, self.heading_deg)
    }

    pub fn ground_velocity(&self) -> PolarVelocity {
        PolarVelocity::new(self.ground_speed, self.track_deg)
    }
}

/// Which branch produced an estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftCase {
    /// No motion over the ground.
    Stationary,
    /// No motion through the water.
    Adrift,
    /// Track and heading coincide.
    Colinear,
    /// Track and heading are opposite.
    Opposed,
    /// Proper triangle.
    General,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentEstimate {
    /// Current speed, in the input's speed unit. Only the colinear branch
    /// can make this negative.
    pub speed: f32,
    /// Direction the current sets toward [deg], in `[0, 360)`.
    pub angle_deg: f32,
    pub case: DriftCase,
}

impl CurrentEstimate {
    pub fn velocity(&self) -> PolarVelocity {
        PolarVelocity::new(self.speed, self.angle_deg)
    }

    /// Speed as a quantity; meaningful when the input came from
    /// [`DriftInput::from_quantities`].
    pub fn speed_quantity(&self) -> Velocity {
        Velocity::new::<meter_per_second>(self.speed)
    }

    pub fn angle_quantity(&self) -> Angle {
        Angle::new::<degree>(self.angle_deg)
    }
}

/// Solve with the configured cosine tier and tolerances.
pub fn compute_current(input: &DriftInput, config: &DriftConfig) -> CurrentEstimate {
    compute_current_with(&config.cosine.tier(), input, &config.tolerances)
}

/// Solve with any sine/cosine provider.
pub fn compute_current_with<T: SinCos + ?Sized>(trig: &T, input: &DriftInput, tol: &DriftTolerances) -> CurrentEstimate {
    let DriftInput { water_speed, heading_deg, ground_speed, track_deg } = *input;
    let drift_rad = (track_deg - heading_deg) * DEG_TO_RAD;
    let off_track = wrap_pi(drift_rad).abs();

    let (case, speed, angle) = if ground_speed.abs() < tol.min_speed {
        (DriftCase::Stationary, water_speed, heading_deg - 180.0)
    } else if water_speed.abs() < tol.min_speed {
        (DriftCase::Adrift, ground_speed, heading_deg)
    } else if off_track < tol.min_angle_rad {
        (DriftCase::Colinear, ground_speed - water_speed, track_deg)
    } else if (off_track - PI).abs() < tol.min_angle_rad {
        (DriftCase::Opposed, ground_speed + water_speed, heading_deg - 180.0)
    } else {
        let (speed, angle) = solve_triangle(trig, water_speed, heading_deg, ground_speed, drift_rad);
        (DriftCase::General, speed, angle)
    };

    let angle_deg = normalize_degrees_once(angle);
    trace!("drift {case:?}: {input:?} -> speed {speed}, angle {angle_deg}");
    CurrentEstimate { speed, angle_deg, case }
}

fn solve_triangle<T: SinCos + ?Sized>(trig: &T, ws: f32, heading_deg: f32, gs: f32, drift_rad: f32) -> (f32, f32) {
    // approximate cosines can push a near-zero side slightly negative
    let speed = (gs * gs + ws * ws - 2.0 * ws * gs * trig.cos(drift_rad)).max(0.0).sqrt();

    // law of sines; a vanished current has no direction, take ratio 0
    let ratio = if speed > 0.0 { trig.sin(drift_rad) * gs / speed } else { 0.0 };

    let angle = if ratio > 1.0 {
        debug!("law-of-sines ratio {ratio} clamped to 1");
        heading_deg + 90.0
    } else if ratio < -1.0 {
        debug!("law-of-sines ratio {ratio} clamped to -1");
        heading_deg - 90.0
    } else {
        heading_deg + 180.0 - ratio.asin() * RAD_TO_DEG
    };
    (speed, angle)
}

/// Radians into `[-π, π)`.
#[inline]
fn wrap_pi(rad: f32) -> f32 {
    (rad + PI).rem_euclid(TAU) - PI
}

/// Bring an angle into `[0, 360)` with at most one turn of correction.
#[inline]
pub fn normalize_degrees_once(angle_deg: f32) -> f32 {
    if angle_deg < 0.0 {
        angle_deg + 360.0
    } else if angle_deg >= 360.0 {
        angle_deg - 360.0
    } else {
        angle_deg
    }
}

/* -------------------------------- tests -------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use drift_trig::{PlatformTrig, COS_121};

    fn solve(ws: f32, hdg: f32, gs: f32, trk: f32) -> CurrentEstimate {
        compute_current_with(&COS_121, &DriftInput::new(ws, hdg, gs, trk), &DriftTolerances::default())
    }

    #[test]
    fn normalizes_one_turn() {
        assert_eq!(normalize_degrees_once(-90.0), 270.0);
        assert_eq!(normalize_degrees_once(360.0), 0.0);
        assert_eq!(normalize_degrees_once(450.0), 90.0);
        assert_eq!(normalize_degrees_once(12.5), 12.5);
    }

    #[test]
    fn wraps_drift_angle() {
        assert_eq!(wrap_pi(0.0), 0.0);
        assert_abs_diff_eq!(wrap_pi(TAU), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(wrap_pi(-PI).abs(), PI, epsilon = 1e-6);
        assert_abs_diff_eq!(wrap_pi(1.5 * PI), -0.5 * PI, epsilon = 1e-5);
    }

    #[test]
    fn colinear_and_opposed_across_north() {
        let est = solve(3.0, 359.99, 7.0, 0.01);
        assert_eq!(est.case, DriftCase::Colinear);
        assert_abs_diff_eq!(est.angle_deg, 0.01, epsilon = 1e-4);
        assert_abs_diff_eq!(est.speed, 4.0);

        assert_eq!(solve(3.0, 0.0, 7.0, 360.0).case, DriftCase::Colinear);

        // track 180° behind the heading, measured the negative way round
        let est = solve(3.0, 200.0, 7.0, 20.0);
        assert_eq!(est.case, DriftCase::Opposed);
        assert_abs_diff_eq!(est.angle_deg, 20.0, epsilon = 1e-4);
        assert_abs_diff_eq!(est.speed, 10.0);
    }

    #[test]
    fn branch_priority_ground_before_water() {
        // both speeds zero: the ground check wins
        let est = solve(0.0, 30.0, 0.0, 30.0);
        assert_eq!(est.case, DriftCase::Stationary);
        assert_eq!(est.angle_deg, 210.0);
        assert_eq!(est.speed, 0.0);
    }

    #[test]
    fn tolerances_are_honored() {
        let input = DriftInput::new(3.0, 90.0, 0.4, 90.5);
        let loose = DriftTolerances::new(0.5, 0.001).unwrap();
        assert_eq!(compute_current_with(&COS_121, &input, &loose).case, DriftCase::Stationary);

        let input = DriftInput::new(3.0, 90.0, 7.0, 90.5);
        assert_eq!(compute_current_with(&COS_121, &input, &DriftTolerances::default()).case, DriftCase::General);
        let wide = DriftTolerances::new(0.01, 0.01).unwrap();
        assert_eq!(compute_current_with(&COS_121, &input, &wide).case, DriftCase::Colinear);
    }

    #[test]
    fn saturated_ratio_turns_quarter() {
        // a sine that overshoots forces the clamp
        struct Overshoot;
        impl SinCos for Overshoot {
            fn sin(&self, _: f32) -> f32 {
                5.0
            }
            fn cos(&self, x: f32) -> f32 {
                x.cos()
            }
        }
        let input = DriftInput::new(4.0, 10.0, 3.0, 100.0);
        let est = compute_current_with(&Overshoot, &input, &DriftTolerances::default());
        assert_eq!(est.case, DriftCase::General);
        assert_abs_diff_eq!(est.angle_deg, 100.0, epsilon = 1e-4);
    }

    #[test]
    fn vanished_current_stays_finite() {
        // a cosine slightly above 1 drives the squared side below zero
        struct Overcos;
        impl SinCos for Overcos {
            fn sin(&self, x: f32) -> f32 {
                x.sin()
            }
            fn cos(&self, _: f32) -> f32 {
                1.001
            }
        }
        let est = compute_current_with(&Overcos, &DriftInput::new(2.0, 0.0, 2.0, 0.2), &DriftTolerances::default());
        assert_eq!(est.case, DriftCase::General);
        assert_eq!(est.speed, 0.0);
        assert_eq!(est.angle_deg, 180.0);
    }

    #[test]
    fn platform_trig_plugs_in() {
        let input = DriftInput::new(4.0, 0.0, 3.0, 90.0);
        let est = compute_current_with(&PlatformTrig, &input, &DriftTolerances::default());
        assert_abs_diff_eq!(est.speed, 5.0, epsilon = 1e-5);
        assert_abs_diff_eq!(est.angle_deg, 143.130_1, epsilon = 1e-3);
    }
}
