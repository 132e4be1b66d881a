//! Range reduction.
//!
//! The cosine path folds any angle into `[0, π/2]` and a quadrant 0..=3;
//! the tangent path folds into `[0, π/4]` (returned pre-scaled to `[0, 1]`)
//! and an octant 0..=7. The index picks a `(Fold, Reconstruct)` pair from
//! the tables below: the fold produces the kernel argument, the
//! reconstruction turns the kernel result back into the true value.

use core::f32::consts::{FRAC_2_PI, FRAC_PI_2, PI, TAU};

/// 4/π, maps `[0, π/4]` onto the tangent kernel's `[0, 1]`.
pub const FOUR_OVER_PI: f32 = 4.0 / PI;
const THREE_HALF_PI: f32 = 3.0 * FRAC_PI_2;

/// How the reduced argument is derived from the folded angle `x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fold {
    pub base: f32,
    /// `base - x` when set, `x - base` otherwise.
    pub mirror: bool,
}

impl Fold {
    const fn from(base: f32) -> Self {
        Self { base, mirror: false }
    }

    const fn toward(base: f32) -> Self {
        Self { base, mirror: true }
    }

    #[inline]
    pub fn apply(self, x: f32) -> f32 {
        if self.mirror {
            self.base - x
        } else {
            x - self.base
        }
    }
}

/// How a kernel result maps back to the value for the original angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reconstruct {
    Direct,
    Negated,
    Reciprocal,
    NegatedReciprocal,
}

impl Reconstruct {
    #[inline]
    pub fn apply(self, y: f32) -> f32 {
        match self {
            Self::Direct => y,
            Self::Negated => -y,
            Self::Reciprocal => 1.0 / y,
            Self::NegatedReciprocal => -1.0 / y,
        }
    }
}

/// Cosine quadrants over `[0, 2π)`.
pub const QUADRANTS: [(Fold, Reconstruct); 4] = [
    (Fold::from(0.0), Reconstruct::Direct),     //  cos(x)
    (Fold::toward(PI), Reconstruct::Negated),   // -cos(π - x)
    (Fold::from(PI), Reconstruct::Negated),     // -cos(x - π)
    (Fold::toward(TAU), Reconstruct::Direct),   //  cos(2π - x)
];

/// Tangent octants over `[0, 2π)`; the pattern repeats every π.
pub const OCTANTS: [(Fold, Reconstruct); 8] = [
    (Fold::from(0.0), Reconstruct::Direct),                        //  tan(x)
    (Fold::toward(FRAC_PI_2), Reconstruct::Reciprocal),            //  1/tan(π/2 - x)
    (Fold::from(FRAC_PI_2), Reconstruct::NegatedReciprocal),       // -1/tan(x - π/2)
    (Fold::toward(PI), Reconstruct::Negated),                      // -tan(π - x)
    (Fold::from(PI), Reconstruct::Direct),                         //  tan(x - π)
    (Fold::toward(THREE_HALF_PI), Reconstruct::Reciprocal),        //  1/tan(3π/2 - x)
    (Fold::from(THREE_HALF_PI), Reconstruct::NegatedReciprocal),   // -1/tan(x - 3π/2)
    (Fold::toward(TAU), Reconstruct::Negated),                     // -tan(2π - x)
];

/// A kernel argument plus the table index it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reduced {
    pub t: f32,
    pub index: usize,
}

/// Reduce for the cosine path: `t ∈ [0, π/2]`, `index ∈ 0..=3`.
///
/// Uses `cos(-x) = cos(x)`, so the sign of `x` is dropped.
#[inline]
pub fn reduce_quadrant(x: f32) -> Reduced {
    let x = (x % TAU).abs();
    // bounds guard only: every float below 2π already truncates to <= 3
    let index = ((x * FRAC_2_PI) as usize).min(3);
    Reduced { t: QUADRANTS[index].0.apply(x), index }
}

/// Reduce for the tangent path: `t ∈ [0, 1]` (already scaled by 4/π),
/// `index ∈ 0..=7`, plus whether the result must be negated.
///
/// Tangent is odd, so negative angles are reduced by magnitude and the sign
/// is handed back to the caller.
#[inline]
pub fn reduce_octant(x: f32) -> (Reduced, bool) {
    let negate = x < 0.0;
    let x = (x % TAU).abs();
    let index = ((x * FOUR_OVER_PI) as usize).min(7);
    let t = OCTANTS[index].0.apply(x) * FOUR_OVER_PI;
    (Reduced { t, index }, negate)
}

/* -------------------------------- tests -------------------------------- */
