// crates/drift-ffi-wasm/src/lib.rs
//
// WASM bindings: drift solver, tilt and per-tier trig exports.

use serde::{Deserialize, Serialize};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

// --- our crates ---
use drift_current::{compute_current, DriftCase, DriftConfig, DriftInput, Tilt, TiltLevel};
use drift_trig::{ArctanTier, CosineTier, TangentTier, ATAN_137};

// Better panic messages in browser console
#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
}

/* ------------------------------- Drift -------------------------------- */

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsDriftInput {
    pub water_speed: f32,
    pub heading_deg: f32,
    pub ground_speed: f32,
    pub track_deg: f32,
    /// Optional; same shape as the JSON config file.
    #[serde(default)]
    pub config: Option<DriftConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsDriftResult {
    pub speed: f32,
    pub angle_deg: f32,
    pub case: DriftCase,
}

#[wasm_bindgen]
pub fn compute_current_js(input: JsValue) -> Result<JsValue, JsValue> {
    let inp: JsDriftInput = swb::from_value(input)?;

    let config = inp.config.unwrap_or_default();
    config.validate().map_err(|e| JsValue::from_str(&e.to_string()))?;

    let est = compute_current(
        &DriftInput::new(inp.water_speed, inp.heading_deg, inp.ground_speed, inp.track_deg),
        &config,
    );

    let out = JsDriftResult { speed: est.speed, angle_deg: est.angle_deg, case: est.case };
    swb::to_value(&out).map_err(|e| e.into())
}

/* ------------------------------- Trig --------------------------------- */

/// `function` is one of `cos`, `sin`, `tan`, `atan`; `tier` is a tier name
/// from that function's family (`cos_52`, `tan_82`, `atan_137`, ...). Sine
/// takes cosine tiers.
#[wasm_bindgen]
pub fn trig_js(function: &str, tier: &str, x: f32) -> Result<f32, JsValue> {
    let unknown = || JsValue::from_str(&format!("unknown tier '{tier}' for {function}"));
    match function {
        "cos" => CosineTier::by_name(tier).map(|t| t.cos(x)).ok_or_else(unknown),
        "sin" => CosineTier::by_name(tier).map(|t| t.sin(x)).ok_or_else(unknown),
        "tan" => TangentTier::by_name(tier).map(|t| t.tan(x)).ok_or_else(unknown),
        "atan" => ArctanTier::by_name(tier).map(|t| t.atan(x)).ok_or_else(unknown),
        other => Err(JsValue::from_str(&format!("unknown function '{other}'"))),
    }
}

/* ------------------------------- Tilt --------------------------------- */

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsTiltResult {
    pub roll_deg: f32,
    pub pitch_deg: f32,
    pub level: TiltLevel,
}

/// Classify one raw accelerometer sample. `config` is optional, as in
/// [`compute_current_js`].
#[wasm_bindgen]
pub fn tilt_js(x: i16, y: i16, z: i16, config: JsValue) -> Result<JsValue, JsValue> {
    let config: DriftConfig = if config.is_undefined() || config.is_null() {
        DriftConfig::default()
    } else {
        swb::from_value(config)?
    };
    config.validate().map_err(|e| JsValue::from_str(&e.to_string()))?;

    let tilt = Tilt::from_accel([x, y, z], &ATAN_137);
    let out = JsTiltResult { roll_deg: tilt.roll_deg, pitch_deg: tilt.pitch_deg, level: config.tilt.classify(tilt) };
    swb::to_value(&out).map_err(|e| e.into())
}
