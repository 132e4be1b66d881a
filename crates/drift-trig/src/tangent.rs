//! Tangent tiers.
//!
//! Kernels compute `tan(π·t/4)` for `t ∈ [0, 1]`, NOT `tan(t)`; the octant
//! driver does the scaling. No guard near π/2 + kπ.

use crate::kernel::OddRational;
use crate::reduce::{reduce_octant, OCTANTS};

#[derive(Clone, Copy, Debug)]
pub struct TangentTier {
    pub name: &'static str,
    pub digits: f32,
    rational: OddRational,
}

/// tan(π·t/4) ≈ t·c1 / (c2 + t²)
pub const TAN_32: TangentTier = TangentTier {
    name: "tan_32",
    digits: 3.2,
    rational: OddRational::new(&[-3.611_217_1], &[-4.613_325_3, 1.0]),
};

/// tan(π·t/4) ≈ t(c1 + c2·t²) / (c3 + t²)
pub const TAN_56: TangentTier = TangentTier {
    name: "tan_56",
    digits: 5.6,
    rational: OddRational::new(&[-3.167_830_27, 0.134_516_124], &[-4.033_321_984, 1.0]),
};

/// tan(π·t/4) ≈ t(c1 + c2·t²) / (c3 + c4·t² + t⁴)
pub const TAN_82: TangentTier = TangentTier {
    name: "tan_82",
    digits: 8.2,
    rational: OddRational::new(
        &[211.849_369_664_121, -12.528_888_727_844_8],
        &[269.735_013_121_412_1, -71.414_530_934_774_8, 1.0],
    ),
};

/// tan(π·t/4) ≈ t(c1 + c2·t² + c3·t⁴) / (c4 + c5·t² + c6·t⁴ + t⁶)
pub const TAN_14: TangentTier = TangentTier {
    name: "tan_14",
    digits: 14.0,
    rational: OddRational::new(
        &[-34_287.466_257_735_956_810_962_4, 2_566.717_546_231_505_042_329_5, -26.536_637_195_173_132_543_8],
        &[
            -43_656.157_928_129_237_576_957_9,
            12_244.483_955_674_742_692_779_3,
            -336.611_376_245_464_339_493,
            1.0,
        ],
    ),
};

impl TangentTier {
    pub const ALL: [TangentTier; 4] = [TAN_32, TAN_56, TAN_82, TAN_14];

    pub fn by_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name == name)
    }

    pub fn rational(&self) -> OddRational {
        self.rational
    }

    /// tan(π·t/4); only meaningful for `t ∈ [0, 1]`.
    #[inline]
    pub fn kernel(&self, t: f32) -> f32 {
        self.rational.eval(t)
    }

    /// tan(x) for any `x` in radians away from the poles.
    #[inline]
    pub fn tan(&self, x: f32) -> f32 {
        let (r, negate) = reduce_octant(x);
        let y = OCTANTS[r.index].1.apply(self.kernel(r.t));
        if negate {
            -y
        } else {
            y
        }
    }
}
