//! Cosine and sine tiers.
//!
//! Each tier is a minimax fit of `cos(t)` on `[0, π/2]` as an even
//! polynomial; the quadrant driver extends it to the whole real line and
//! sine is taken as `cos(π/2 - x)`.

use core::f32::consts::FRAC_PI_2;

use crate::kernel::EvenPoly;
use crate::reduce::{reduce_quadrant, QUADRANTS};

/// One accuracy/cost level of the cosine family.
#[derive(Clone, Copy, Debug)]
pub struct CosineTier {
    pub name: &'static str,
    /// Nominal decimal digits over `[0, π/2]`.
    pub digits: f32,
    poly: EvenPoly,
}

/// cos(t) ≈ c1 + c2·t² + c3·t⁴
pub const COS_32: CosineTier = CosineTier {
    name: "cos_32",
    digits: 3.2,
    poly: EvenPoly::new(&[0.9994, -0.4955, 0.0367]),
};

pub const COS_52: CosineTier = CosineTier {
    name: "cos_52",
    digits: 5.2,
    poly: EvenPoly::new(&[0.999_993_294_6, -0.499_912_437_6, 0.041_487_747_2, -0.001_271_209_5]),
};

pub const COS_73: CosineTier = CosineTier {
    name: "cos_73",
    digits: 7.3,
    poly: EvenPoly::new(&[
        0.999_999_953_464,
        -0.499_999_905_345_5,
        0.041_663_584_676_9,
        -0.001_385_370_426_4,
        0.000_023_233, // refit, tighter than Hart's
    ]),
};

pub const COS_121: CosineTier = CosineTier {
    name: "cos_121",
    digits: 12.1,
    poly: EvenPoly::new(&[
        0.999_999_999_999_251_82,
        -0.499_999_999_970_240_12,
        0.041_666_666_473_384_543,
        -0.001_388_888_418_000_423,
        0.000_024_801_040_648_455_8,
        -0.000_000_275_246_963_843_2,
        0.000_000_001_990_785_685_4,
    ]),
};

impl CosineTier {
    /// Cheapest first.
    pub const ALL: [CosineTier; 4] = [COS_32, COS_52, COS_73, COS_121];

    pub fn by_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name == name)
    }

    pub fn poly(&self) -> EvenPoly {
        self.poly
    }

    /// Raw kernel; only meaningful for `t ∈ [0, π/2]`.
    #[inline]
    pub fn kernel(&self, t: f32) -> f32 {
        self.poly.eval(t)
    }

    /// cos(x) for any `x` in radians.
    #[inline]
    pub fn cos(&self, x: f32) -> f32 {
        let r = reduce_quadrant(x);
        QUADRANTS[r.index].1.apply(self.kernel(r.t))
    }

    /// sin(x) for any `x` in radians.
    #[inline]
    pub fn sin(&self, x: f32) -> f32 {
        self.cos(FRAC_PI_2 - x)
    }
}
