//! Tilt from a 3-axis accelerometer.
//!
//! The sensor transport and the timer interrupt live outside this crate.
//! The caller hands over one raw sample per tick; `TiltMonitor` turns it
//! into roll/pitch and a level class and counts the ticks.

use drift_trig::{ArctanTier, ATAN_137, RAD_TO_DEG};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Roll and pitch in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tilt {
    pub roll_deg: f32,
    pub pitch_deg: f32,
}

impl Tilt {
    /// From raw `[x, y, z]` counts; any full-scale works since only ratios
    /// matter.
    pub fn from_accel(raw: [i16; 3], atan: &ArctanTier) -> Self {
        let [x, y, z] = raw.map(f32::from);
        Self {
            roll_deg: atan.atan2(y, z) * RAD_TO_DEG,
            pitch_deg: atan.atan2(x, (y * y + z * z).sqrt()) * RAD_TO_DEG,
        }
    }

    /// Larger of `|roll|` and `|pitch|`.
    pub fn magnitude_deg(&self) -> f32 {
        self.roll_deg.abs().max(self.pitch_deg.abs())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiltLevel {
    Level,
    Warning,
    Alarm,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiltThresholds {
    pub warning_deg: f32,
    pub alarm_deg: f32,
}

impl Default for TiltThresholds {
    fn default() -> Self {
        Self { warning_deg: 15.0, alarm_deg: 30.0 }
    }
}

impl TiltThresholds {
    pub fn new(warning_deg: f32, alarm_deg: f32) -> Result<Self, ConfigError> {
        let t = Self { warning_deg, alarm_deg };
        t.validate()?;
        Ok(t)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // also rejects NaN
        if self.warning_deg >= 0.0 && self.warning_deg <= self.alarm_deg {
            Ok(())
        } else {
            Err(ConfigError::InvalidThresholds { warning_deg: self.warning_deg, alarm_deg: self.alarm_deg })
        }
    }

    /// Strictly above a threshold escalates.
    pub fn classify(&self, tilt: Tilt) -> TiltLevel {
        let m = tilt.magnitude_deg();
        if m > self.alarm_deg {
            TiltLevel::Alarm
        } else if m > self.warning_deg {
            TiltLevel::Warning
        } else {
            TiltLevel::Level
        }
    }
}

/// Caller-owned per-tick state.
#[derive(Clone, Debug)]
pub struct TiltMonitor {
    thresholds: TiltThresholds,
    atan: ArctanTier,
    ticks: u32,
    last: Option<Tilt>,
}

impl TiltMonitor {
    pub fn new(thresholds: TiltThresholds) -> Self {
        Self::with_tier(thresholds, ATAN_137)
    }

    pub fn with_tier(thresholds: TiltThresholds, atan: ArctanTier) -> Self {
        Self { thresholds, atan, ticks: 0, last: None }
    }

    /// One timer tick with its sample.
    pub fn on_tick(&mut self, raw: [i16; 3]) -> TiltLevel {
        self.ticks = self.ticks.wrapping_add(1);
        let tilt = Tilt::from_accel(raw, &self.atan);
        self.last = Some(tilt);
        self.thresholds.classify(tilt)
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn last(&self) -> Option<Tilt> {
        self.last
    }
}
