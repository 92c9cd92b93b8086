//! WASM bindings for exoplanet habitability scoring.
//!
//! Provides functions to score individual planet records, rank the demo
//! catalog, and inspect habitable zones.

use wasm_bindgen::prelude::*;

use habitability::catalog::{demo_catalog as catalog_planets, rank_by_habitability};
use habitability::{
    habitable_zone as zone_for_mass, predict_habitability as predict, PlanetRecord,
};

use crate::{from_js, to_js};

/// Score a single exoplanet record.
///
/// Validates the record, then runs the full habitability pipeline:
/// sub-scores, weighted overall score, classification, reasons, risks,
/// and derived mission predictions.
///
/// # Arguments
/// * `planet` - A PlanetRecord object
///
/// # Returns
/// A HabitabilityPrediction, or throws if the record is malformed.
#[wasm_bindgen]
pub fn predict_habitability(planet: JsValue) -> Result<JsValue, JsError> {
    let planet: PlanetRecord = from_js(planet)?;
    planet.validate().map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&predict(&planet))
}

/// The built-in demonstration catalog of five well-known exoplanets.
///
/// # Returns
/// An array of PlanetRecord objects (Kepler-452b, Proxima Centauri b,
/// TRAPPIST-1e, K2-18b, Gliese 667Cc).
#[wasm_bindgen]
pub fn demo_catalog() -> Result<JsValue, JsError> {
    to_js(&catalog_planets())
}

/// Score and rank a catalog of planet records, best candidate first.
///
/// # Arguments
/// * `planets` - An array of PlanetRecord objects
///
/// # Returns
/// An array of [PlanetRecord, HabitabilityPrediction] pairs sorted by
/// descending overall score.
#[wasm_bindgen]
pub fn rank_catalog(planets: JsValue) -> Result<JsValue, JsError> {
    let planets: Vec<PlanetRecord> = from_js(planets)?;
    for planet in &planets {
        planet.validate().map_err(|e| JsError::new(&e.to_string()))?;
    }
    to_js(&rank_by_habitability(planets))
}

/// Habitable zone edges for a star of the given mass.
///
/// # Arguments
/// * `stellar_mass_solar` - Stellar mass in solar masses
///
/// # Returns
/// A HabitableZone with innerEdge and outerEdge in AU.
#[wasm_bindgen]
pub fn habitable_zone(stellar_mass_solar: f64) -> Result<JsValue, JsError> {
    to_js(&zone_for_mass(stellar_mass_solar))
}
