use thiserror::Error;

/// Rejected configuration. The numeric functions themselves never fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tolerance `{name}` must be finite and > 0, got {value}")]
    NonPositiveTolerance { name: &'static str, value: f32 },

    #[error("tilt thresholds must satisfy 0 <= warning ({warning_deg}) <= alarm ({alarm_deg})")]
    InvalidThresholds { warning_deg: f32, alarm_deg: f32 },

    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}
