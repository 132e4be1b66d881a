//! Solver configuration.
//!
//! Every field has a default, so `{}` is a valid JSON configuration:
//!
//! ```json
//! {
//!   "tolerances": { "min_speed": 0.01, "min_angle_rad": 0.001 },
//!   "cosine": "cos_32",
//!   "tilt": { "warning_deg": 15.0, "alarm_deg": 30.0 }
//! }
//! ```

use drift_trig::{CosineTier, COS_121, COS_32, COS_52, COS_73};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tilt::TiltThresholds;

/// Speeds below this count as "not moving".
pub const MIN_SPEED_TOLERANCE: f32 = 0.01;
/// Heading/track differences (radians) below this count as equal, or opposite
/// when measured from π.
pub const MIN_ANGLE_TOLERANCE: f32 = 0.001;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftTolerances {
    pub min_speed: f32,
    pub min_angle_rad: f32,
}

impl Default for DriftTolerances {
    fn default() -> Self {
        Self { min_speed: MIN_SPEED_TOLERANCE, min_angle_rad: MIN_ANGLE_TOLERANCE }
    }
}

impl DriftTolerances {
    pub fn new(min_speed: f32, min_angle_rad: f32) -> Result<Self, ConfigError> {
        let tol = Self { min_speed, min_angle_rad };
        tol.validate()?;
        Ok(tol)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("min_speed", self.min_speed), ("min_angle_rad", self.min_angle_rad)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositiveTolerance { name, value });
            }
        }
        Ok(())
    }
}

/// Cosine tier used by the solver, named as in `drift_trig`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CosineChoice {
    #[default]
    #[serde(rename = "cos_32")]
    Cos32,
    #[serde(rename = "cos_52")]
    Cos52,
    #[serde(rename = "cos_73")]
    Cos73,
    #[serde(rename = "cos_121")]
    Cos121,
}

impl CosineChoice {
    pub fn tier(self) -> CosineTier {
        match self {
            Self::Cos32 => COS_32,
            Self::Cos52 => COS_52,
            Self::Cos73 => COS_73,
            Self::Cos121 => COS_121,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    pub tolerances: DriftTolerances,
    pub cosine: CosineChoice,
    pub tilt: TiltThresholds,
}

impl DriftConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tolerances.validate()?;
        self.tilt.validate()
    }

    /// Parse and validate.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let cfg = DriftConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, DriftConfig::default());
        assert_eq!(cfg.tolerances.min_speed, MIN_SPEED_TOLERANCE);
        assert_eq!(cfg.cosine.tier().name, "cos_32");
    }

    #[test]
    fn partial_json_overrides() {
        let cfg = DriftConfig::from_json_str(r#"{"tolerances":{"min_speed":0.5},"cosine":"cos_121"}"#).unwrap();
        assert_eq!(cfg.tolerances.min_speed, 0.5);
        assert_eq!(cfg.tolerances.min_angle_rad, MIN_ANGLE_TOLERANCE);
        assert_eq!(cfg.cosine, CosineChoice::Cos121);
    }

    #[test]
    fn rejects_bad_tolerances() {
        assert!(matches!(
            DriftTolerances::new(0.0, 0.001),
            Err(ConfigError::NonPositiveTolerance { name: "min_speed", .. })
        ));
        assert!(matches!(
            DriftTolerances::new(0.01, f32::NAN),
            Err(ConfigError::NonPositiveTolerance { name: "min_angle_rad", .. })
        ));
        let err = DriftConfig::from_json_str(r#"{"tolerances":{"min_angle_rad":-1.0}}"#).unwrap_err();
        assert!(err.to_string().contains("min_angle_rad"));
    }

    #[test]
    fn rejects_unknown_tier_and_bad_json() {
        assert!(matches!(DriftConfig::from_json_str(r#"{"cosine":"cos_99"}"#), Err(ConfigError::Json(_))));
        assert!(matches!(DriftConfig::from_json_str("not json"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn choice_round_trips_by_name() {
        for choice in [CosineChoice::Cos32, CosineChoice::Cos52, CosineChoice::Cos73, CosineChoice::Cos121] {
            let json = serde_json::to_string(&choice).unwrap();
            assert_eq!(json, format!("\"{}\"", choice.tier().name));
        }
    }
}
