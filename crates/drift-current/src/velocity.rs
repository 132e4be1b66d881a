//! Polar velocity (speed + compass angle) and its (east, north) components.

use drift_trig::{SinCos, DEG_TO_RAD, RAD_TO_DEG};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::solver::normalize_degrees_once;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolarVelocity {
    pub speed: f32,
    /// Compass degrees, 0° = north, clockwise.
    pub angle_deg: f32,
}

impl PolarVelocity {
    pub fn new(speed: f32, angle_deg: f32) -> Self {
        Self { speed, angle_deg }
    }

    /// (east, north) components.
    pub fn to_vector<T: SinCos + ?Sized>(&self, trig: &T) -> Vector2<f32> {
        let a = self.angle_deg * DEG_TO_RAD;
        Vector2::new(self.speed * trig.sin(a), self.speed * trig.cos(a))
    }

    /// Inverse of [`to_vector`](Self::to_vector); the zero vector maps to
    /// angle 0.
    pub fn from_vector(v: Vector2<f32>) -> Self {
        let angle = v.x.atan2(v.y) * RAD_TO_DEG;
        Self { speed: v.norm(), angle_deg: normalize_degrees_once(angle) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use drift_trig::PlatformTrig;

    #[test]
    fn compass_components() {
        let east = PolarVelocity::new(2.0, 90.0).to_vector(&PlatformTrig);
        assert_abs_diff_eq!(east.x, 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(east.y, 0.0, epsilon = 1e-6);

        let south = PolarVelocity::new(1.0, 180.0).to_vector(&PlatformTrig);
        assert_abs_diff_eq!(south.y, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn back_from_components() {
        let p = PolarVelocity::from_vector(Vector2::new(-1.0, 0.0));
        assert_abs_diff_eq!(p.speed, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.angle_deg, 270.0, epsilon = 1e-4);
        assert_eq!(PolarVelocity::from_vector(Vector2::zeros()).angle_deg, 0.0);
    }
}
