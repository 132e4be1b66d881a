//! Arctangent tiers.
//!
//! The kernels are fit on `[0, tan(π/12)]`. Any real argument is folded
//! into that interval in three steps, each remembered as a flag:
//!
//! 1. `x < 0`: use `atan(-x) = -atan(x)`
//! 2. `x > 1`: use `atan(x) = π/2 - atan(1/x)`
//! 3. `x > tan(π/12)`: use `atan(x) = π/6 + atan((x - tan(π/6)) / (1 + tan(π/6)·x))`
//!
//! and undone in reverse order: region offset, complement, sign.

use core::f32::consts::{FRAC_PI_2, FRAC_PI_6, PI};

use crate::kernel::OddRational;

/// tan(π/6) = 1/√3
const TAN_SIXTH_PI: f32 = 0.577_350_269_189_625_8;
/// tan(π/12) = 2 - √3
const TAN_TWELFTH_PI: f32 = 0.267_949_192_431_122_7;

#[derive(Clone, Copy, Debug)]
pub struct ArctanTier {
    pub name: &'static str,
    pub digits: f32,
    rational: OddRational,
}

/// atan(x) ≈ x(c1 + c2·x²) / (c3 + x²)
pub const ATAN_66: ArctanTier = ArctanTier {
    name: "atan_66",
    digits: 6.6,
    rational: OddRational::new(&[1.686_762_910_6, 0.437_849_730_4], &[1.686_763_313_4, 1.0]),
};

/// atan(x) ≈ x(c1 + c2·x² + c3·x⁴) / (c4 + c5·x² + c6·x⁴ + x⁶)
pub const ATAN_137: ArctanTier = ArctanTier {
    name: "atan_137",
    digits: 13.7,
    rational: OddRational::new(
        &[48.701_070_044_048_983_84, 49.532_626_377_225_434_5, 9.406_042_442_316_24],
        &[48.701_070_044_049_961_66, 65.766_316_390_895_629_9, 21.587_934_067_020_262, 1.0],
    ),
};

impl ArctanTier {
    pub const ALL: [ArctanTier; 2] = [ATAN_66, ATAN_137];

    pub fn by_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name == name)
    }

    pub fn rational(&self) -> OddRational {
        self.rational
    }

    /// Raw kernel; only meaningful for `|x| ≤ tan(π/12)`.
    #[inline]
    pub fn kernel(&self, x: f32) -> f32 {
        self.rational.eval(x)
    }

    /// atan(x) in radians, `(-π/2, π/2)`.
    pub fn atan(&self, x: f32) -> f32 {
        let sign = x < 0.0;
        let mut x = x.abs();

        let complement = x > 1.0;
        if complement {
            x = 1.0 / x;
        }

        let region = x > TAN_TWELFTH_PI;
        if region {
            x = (x - TAN_SIXTH_PI) / (1.0 + TAN_SIXTH_PI * x);
        }

        let mut y = self.kernel(x);
        if region {
            y += FRAC_PI_6;
        }
        if complement {
            y = FRAC_PI_2 - y;
        }
        if sign {
            -y
        } else {
            y
        }
    }

    /// Four-quadrant arctangent of `y/x`, `(-π, π]`. `atan2(0, 0)` is 0.
    pub fn atan2(&self, y: f32, x: f32) -> f32 {
        if x > 0.0 {
            self.atan(y / x)
        } else if x < 0.0 {
            let a = self.atan(y / x);
            if y >= 0.0 {
                a + PI
            } else {
                a - PI
            }
        } else if y > 0.0 {
            FRAC_PI_2
        } else if y < 0.0 {
            -FRAC_PI_2
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use core::f32::consts::FRAC_PI_4;

    #[test]
    fn zero_is_exact() {
        for tier in ArctanTier::ALL {
            assert_eq!(tier.atan(0.0), 0.0);
        }
    }

    #[test]
    fn every_fold_path() {
        // plain, region, complement, complement + region, and negated
        for x in [0.1_f32, 0.6, 3.0, 1.5, -0.6, -3.0, 1e6] {
            assert_abs_diff_eq!(ATAN_137.atan(x), x.atan(), epsilon = 2e-6);
            assert_abs_diff_eq!(ATAN_66.atan(x), x.atan(), epsilon = 2e-6);
        }
    }

    #[test]
    fn unit_argument() {
        assert_abs_diff_eq!(ATAN_137.atan(1.0), FRAC_PI_4, epsilon = 1e-6);
        assert_abs_diff_eq!(ATAN_137.atan(f32::INFINITY), FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn four_quadrants() {
        let t = ATAN_137;
        for (y, x) in [(1.0_f32, 1.0_f32), (1.0, -1.0), (-1.0, -1.0), (-1.0, 1.0), (2.0, -0.5), (-0.3, -4.0)] {
            assert_abs_diff_eq!(t.atan2(y, x), y.atan2(x), epsilon = 2e-6);
        }
        assert_eq!(t.atan2(0.0, 0.0), 0.0);
        assert_eq!(t.atan2(3.0, 0.0), FRAC_PI_2);
        assert_eq!(t.atan2(-3.0, 0.0), -FRAC_PI_2);
    }
}
