//! trig-accuracy
//!
//! Prints the worst error of every tier over a dense sweep of one full turn.
//!
//!   trig-accuracy [SAMPLES]      (default 100000)
//!
//! Set `RUST_LOG=debug` to see each sweep's worst-case argument.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::io::{self, Write};

use anyhow::{ensure, Context, Result};
use drift_trig::accuracy::{away_from_poles, sweep, ErrorReport, Metric};
use drift_trig::{ArctanTier, CosineTier, TangentTier};

const DEFAULT_SAMPLES: usize = 100_000;

fn main() -> Result<()> {
    env_logger::init();

    let samples = parse_samples(std::env::args().nth(1).as_deref())?;
    log::info!("sweeping [0, 2π) with {samples} samples per tier");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{:<10} {:>8} {:>14} {:>8}", "tier", "nominal", "max error", "digits")?;

    for tier in CosineTier::ALL {
        let cos = sweep(0.0, TAU, samples, Metric::Absolute, |x| tier.cos(x), f64::cos, |_| true);
        let sin = sweep(0.0, TAU, samples, Metric::Absolute, |x| tier.sin(x), f64::sin, |_| true);
        let worst = if sin.max_error > cos.max_error { sin } else { cos };
        print_row(&mut out, tier.name, tier.digits, &worst)?;
    }

    for tier in TangentTier::ALL {
        let r = sweep(0.0, TAU, samples, Metric::Scaled, |x| tier.tan(x), f64::tan, away_from_poles(0.05));
        print_row(&mut out, tier.name, tier.digits, &r)?;
    }

    for tier in ArctanTier::ALL {
        // tan over (-π/2, π/2) gives the whole real line as input
        let r = sweep(
            -FRAC_PI_2,
            FRAC_PI_2,
            samples,
            Metric::Absolute,
            |x| tier.atan(x.tan()),
            |x| f64::from((x as f32).tan()).atan(),
            away_from_poles(1e-3),
        );
        print_row(&mut out, tier.name, tier.digits, &r)?;
    }

    Ok(())
}

fn parse_samples(arg: Option<&str>) -> Result<usize> {
    let Some(arg) = arg else {
        return Ok(DEFAULT_SAMPLES);
    };
    let samples = arg
        .parse::<usize>()
        .with_context(|| format!("SAMPLES must be a positive integer, got `{arg}`"))?;
    ensure!(samples > 0, "SAMPLES must be a positive integer, got `{arg}`");
    Ok(samples)
}

fn print_row(out: &mut impl Write, name: &str, nominal: f32, report: &ErrorReport) -> Result<()> {
    log::debug!("{name}: worst at x = {} over {} samples", report.worst_x, report.samples);

    let mut buf = ryu::Buffer::new();
    let err = buf.format(report.max_error).to_owned();
    let digits = if report.max_error > 0.0 {
        -report.max_error.log10()
    } else {
        f64::INFINITY
    };
    writeln!(out, "{name:<10} {nominal:>8.1} {err:>14} {digits:>8.2}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_argument() {
        assert_eq!(parse_samples(None).unwrap(), DEFAULT_SAMPLES);
        assert_eq!(parse_samples(Some("500")).unwrap(), 500);
        assert!(parse_samples(Some("0")).is_err());
        assert!(parse_samples(Some("-3")).is_err());
        assert!(parse_samples(Some("many")).is_err());
    }
}
