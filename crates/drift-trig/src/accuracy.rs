//! Dense-sweep error measurement against an `f64` reference.
//!
//! Used by the `trig-accuracy` report and by the tier ordering tests.

/// Worst error seen over a sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ErrorReport {
    /// Largest error under the sweep's metric.
    pub max_error: f64,
    /// Where it happened.
    pub worst_x: f32,
    /// Samples actually compared (skipped points excluded).
    pub samples: usize,
}

/// How a sample's error is measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Absolute,
    /// `|approx - ref| / max(1, |ref|)`: absolute near zero, relative for
    /// large values such as tangent close to its poles.
    Scaled,
}

impl Metric {
    fn error(self, approx: f64, reference: f64) -> f64 {
        let diff = (approx - reference).abs();
        match self {
            Self::Absolute => diff,
            Self::Scaled => diff / reference.abs().max(1.0),
        }
    }
}

/// Sample `[lo, hi)` at `samples` evenly spaced points.
///
/// `keep` filters points (e.g. neighbourhoods of tangent poles); NaN results
/// from `approx` count as infinite error.
pub fn sweep<A, R, K>(lo: f32, hi: f32, samples: usize, metric: Metric, approx: A, reference: R, keep: K) -> ErrorReport
where
    A: Fn(f32) -> f32,
    R: Fn(f64) -> f64,
    K: Fn(f32) -> bool,
{
    let mut report = ErrorReport::default();
    let step = (f64::from(hi) - f64::from(lo)) / samples.max(1) as f64;

    for i in 0..samples {
        let x = (f64::from(lo) + step * i as f64) as f32;
        if !keep(x) {
            continue;
        }
        let got = f64::from(approx(x));
        let err = if got.is_nan() {
            f64::INFINITY
        } else {
            metric.error(got, reference(f64::from(x)))
        };
        report.samples += 1;
        if err > report.max_error {
            report.max_error = err;
            report.worst_x = x;
        }
    }
    report
}

/// Keep points where `|cos x|` is at least `margin`, i.e. away from the
/// tangent poles.
pub fn away_from_poles(margin: f64) -> impl Fn(f32) -> bool {
    move |x| f64::from(x).cos().abs() >= margin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_function_has_zero_error() {
        let r = sweep(0.0, 1.0, 100, Metric::Absolute, |x| x * 2.0, |x| x * 2.0, |_| true);
        assert_eq!(r.samples, 100);
        assert!(r.max_error < 1e-6);
    }

    #[test]
    fn filter_and_nan() {
        let r = sweep(0.0, 1.0, 10, Metric::Absolute, |_| f32::NAN, |x| x, |x| x < 0.5);
        assert_eq!(r.samples, 5);
        assert!(r.max_error.is_infinite());
    }

    #[test]
    fn scaled_metric_is_relative_above_one() {
        assert!((Metric::Scaled.error(110.0, 100.0) - 0.1).abs() < 1e-12);
        assert!((Metric::Scaled.error(0.1, 0.0) - 0.1).abs() < 1e-12);
    }
}
