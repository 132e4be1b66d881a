//! Kernel shapes shared by all tiers.
//!
//! Coefficients are stored lowest degree first and evaluated by Horner's
//! rule in `t²`, so `[c1, c2, c3]` means `c1 + t²(c2 + t²·c3)`.

/// Even polynomial `P(t²)`.
#[derive(Clone, Copy, Debug)]
pub struct EvenPoly {
    coeffs: &'static [f32],
}

impl EvenPoly {
    pub const fn new(coeffs: &'static [f32]) -> Self {
        Self { coeffs }
    }

    pub fn coeffs(&self) -> &'static [f32] {
        self.coeffs
    }

    /// Degree in `t`.
    pub fn degree(&self) -> usize {
        2 * self.coeffs.len().saturating_sub(1)
    }

    #[inline]
    pub fn eval(&self, t: f32) -> f32 {
        horner(self.coeffs, t * t)
    }
}

/// Odd rational `t·P(t²) / Q(t²)`. Monic denominators carry their
/// trailing `1.0` explicitly.
#[derive(Clone, Copy, Debug)]
pub struct OddRational {
    num: &'static [f32],
    den: &'static [f32],
}

impl OddRational {
    pub const fn new(num: &'static [f32], den: &'static [f32]) -> Self {
        Self { num, den }
    }

    pub fn numerator(&self) -> &'static [f32] {
        self.num
    }

    pub fn denominator(&self) -> &'static [f32] {
        self.den
    }

    #[inline]
    pub fn eval(&self, t: f32) -> f32 {
        let t2 = t * t;
        t * horner(self.num, t2) / horner(self.den, t2)
    }
}

#[inline]
fn horner(coeffs: &[f32], x2: f32) -> f32 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x2 + c)
}
