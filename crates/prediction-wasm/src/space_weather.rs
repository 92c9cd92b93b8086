//! WASM bindings for CME impact prediction.
//!
//! Provides functions to score CME events against satellites and Earth,
//! convert DONKI catalog payloads, and generate demo or simulated events.

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use wasm_bindgen::prelude::*;

use space_weather::{
    convert_analyses, demo_storm as fixture_storm, effects_from_speed as effects_ladder,
    predict_earth_impact as predict_earth, predict_satellite_damage as predict_satellites,
    simulate_event as simulate, CmeAnalysisRecord, CmeEvent,
};

use crate::{from_js, to_js};

/// Assess the damage a CME poses to satellites in orbit.
///
/// # Arguments
/// * `event` - A CmeEvent object
///
/// # Returns
/// A SatelliteDamagePrediction, or throws if the event is malformed.
#[wasm_bindgen]
pub fn predict_satellite_damage(event: JsValue) -> Result<JsValue, JsError> {
    let event: CmeEvent = from_js(event)?;
    event.validate().map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&predict_satellites(&event))
}

/// Assess the geomagnetic impact a CME poses to Earth.
///
/// # Arguments
/// * `event` - A CmeEvent object
///
/// # Returns
/// An EarthImpactPrediction, or throws if the event is malformed.
#[wasm_bindgen]
pub fn predict_earth_impact(event: JsValue) -> Result<JsValue, JsError> {
    let event: CmeEvent = from_js(event)?;
    event.validate().map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&predict_earth(&event))
}

/// Convert a DONKI CME analysis payload into normalized events.
///
/// # Arguments
/// * `records` - An array of CME analysis records as returned by the
///   DONKI API
///
/// # Returns
/// An array of CmeEvent objects, or throws on the first bad record.
#[wasm_bindgen]
pub fn convert_donki_analyses(records: JsValue) -> Result<JsValue, JsError> {
    let records: Vec<CmeAnalysisRecord> = from_js(records)?;
    let events = convert_analyses(records).map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&events)
}

/// The canned demonstration storm (X8.5 flare, 1200 km/s CME).
#[wasm_bindgen]
pub fn demo_storm() -> Result<JsValue, JsError> {
    to_js(&fixture_storm())
}

/// Draw a random flare event from a seeded generator.
///
/// The same seed always produces the same event.
///
/// # Arguments
/// * `seed` - Random seed for reproducible generation
#[wasm_bindgen]
pub fn simulate_event(seed: u64) -> Result<JsValue, JsError> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    to_js(&simulate(&mut rng))
}

/// Expected terrestrial effects for a CME of the given speed.
///
/// # Arguments
/// * `speed_km_s` - Plasma speed in km/s
///
/// # Returns
/// An array of effect strings, cumulative with speed.
#[wasm_bindgen]
pub fn effects_from_speed(speed_km_s: f64) -> Result<JsValue, JsError> {
    to_js(&effects_ladder(speed_km_s))
}
