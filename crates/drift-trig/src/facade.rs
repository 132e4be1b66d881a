//! Flat per-tier entry points and the `SinCos` seam.
//!
//! `cos_32(x)` is shorthand for `COS_32.cos(x)` and so on. Code that wants
//! to stay generic over the tier (or swap in the platform's own `sin`/`cos`)
//! takes `&impl SinCos` instead.

use crate::arctangent::{ATAN_137, ATAN_66};
use crate::cosine::{CosineTier, COS_121, COS_32, COS_52, COS_73};
use crate::tangent::{TAN_14, TAN_32, TAN_56, TAN_82};

/// Anything that can evaluate sine and cosine of a radian angle.
pub trait SinCos {
    fn sin(&self, x: f32) -> f32;
    fn cos(&self, x: f32) -> f32;
}

impl SinCos for CosineTier {
    fn sin(&self, x: f32) -> f32 {
        CosineTier::sin(self, x)
    }
    fn cos(&self, x: f32) -> f32 {
        CosineTier::cos(self, x)
    }
}

/// The platform's `f32::sin`/`f32::cos`, used as a reference.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlatformTrig;

impl SinCos for PlatformTrig {
    fn sin(&self, x: f32) -> f32 {
        x.sin()
    }
    fn cos(&self, x: f32) -> f32 {
        x.cos()
    }
}

macro_rules! cosine_fns {
    ($($tier:ident => $cos:ident, $sin:ident;)*) => {$(
        #[inline]
        pub fn $cos(x: f32) -> f32 { $tier.cos(x) }
        #[inline]
        pub fn $sin(x: f32) -> f32 { $tier.sin(x) }
    )*};
}

macro_rules! single_fns {
    ($($tier:ident => $f:ident . $method:ident;)*) => {$(
        #[inline]
        pub fn $f(x: f32) -> f32 { $tier.$method(x) }
    )*};
}

cosine_fns! {
    COS_32 => cos_32, sin_32;
    COS_52 => cos_52, sin_52;
    COS_73 => cos_73, sin_73;
    COS_121 => cos_121, sin_121;
}

single_fns! {
    TAN_32 => tan_32.tan;
    TAN_56 => tan_56.tan;
    TAN_82 => tan_82.tan;
    TAN_14 => tan_14.tan;
    ATAN_66 => atan_66.atan;
    ATAN_137 => atan_137.atan;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn through_seam<T: SinCos>(trig: &T, x: f32) -> (f32, f32) {
        (trig.sin(x), trig.cos(x))
    }

    #[test]
    fn flat_functions_match_tiers() {
        assert_eq!(cos_52(1.1), COS_52.cos(1.1));
        assert_eq!(sin_121(-0.4), COS_121.sin(-0.4));
        assert_eq!(tan_56(0.9), TAN_56.tan(0.9));
        assert_eq!(atan_66(2.5), ATAN_66.atan(2.5));
    }

    #[test]
    fn seam_accepts_tier_and_platform() {
        let (s, c) = through_seam(&COS_121, 0.8);
        let (ps, pc) = through_seam(&PlatformTrig, 0.8);
        assert_abs_diff_eq!(s, ps, epsilon = 1e-6);
        assert_abs_diff_eq!(c, pc, epsilon = 1e-6);
    }
}
