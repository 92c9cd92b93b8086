//! WASM bindings for the habitability and space-weather predictors.
//!
//! This crate provides JavaScript/TypeScript bindings for the prediction
//! libraries using `wasm-bindgen` and `serde-wasm-bindgen` for seamless
//! type conversion.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, {
//!     predict_habitability,
//!     demo_catalog,
//!     predict_satellite_damage,
//!     demo_storm,
//! } from 'prediction-wasm';
//!
//! await init();
//!
//! const prediction = predict_habitability(demo_catalog()[0]);
//! console.log(`${prediction.habitabilityScore.classification}`);
//!
//! const damage = predict_satellite_damage(demo_storm());
//! console.log(`Satellite risk: ${damage.riskLevel}`);
//! ```

use wasm_bindgen::prelude::*;

mod habitability;
mod space_weather;

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}
