//! Demo and simulated events
//!
//! Two sources of synthetic data: [`demo_storm`] is a fixed, reproducible
//! X-class event sized to exercise every predictor tier, and
//! [`simulate_event`] draws a random flare from a caller-supplied seeded
//! generator for live-feed style displays.

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::event::{CmeEvent, EventSource};
use crate::flare_class::{FlareClass, FlareLetter};

/// Effects a simulated flare may carry, each included with probability 1/2
const SIMULATED_EFFECTS: [&str; 3] =
    ["Radio Blackout", "GPS Interference", "Satellite Anomalies"];

/// The canned demonstration storm
///
/// An X8.5 flare with a 1200 km/s CME aimed near the ecliptic: strong
/// enough to land in the top tier of both predictors, which makes it a
/// convenient fixture for demos and tests.
pub fn demo_storm() -> CmeEvent {
    CmeEvent {
        id: "DEMO-2025-001".to_string(),
        associated_cme_id: Some("DEMO-CME-001".to_string()),
        catalog: Some("DEMO_CATALOG".to_string()),
        flare_class: FlareClass::new(FlareLetter::X, 8.5),
        intensity: 8.5,
        timestamp: Utc::now(),
        latitude: -15.0,
        longitude: 45.0,
        half_angle: Some(65.0),
        cme_speed: Some(1200.0),
        region: "AR3234".to_string(),
        duration_minutes: 180,
        effects: vec![
            "Radio Blackout".to_string(),
            "GPS Interference".to_string(),
            "Satellite Anomalies".to_string(),
            "Aurora Visible".to_string(),
        ],
        source: EventSource::Simulation,
    }
}

/// Draw a random flare event
///
/// Letter class, intensity, active region, duration, and effects are all
/// sampled from the supplied generator, so a seeded `ChaChaRng` reproduces
/// the same event stream. Kinematics are left unreported and fall back to
/// the intensity-derived defaults when scored.
///
/// # Arguments
/// * `rng` - Random number generator, typically a seeded `ChaChaRng`
pub fn simulate_event(rng: &mut impl Rng) -> CmeEvent {
    let letter = FlareLetter::ALL[rng.random_range(0..FlareLetter::ALL.len())];
    let intensity = rng.random::<f64>() * 10.0;
    let region_number = rng.random_range(1000..4000);
    let duration_minutes = rng.random_range(10..130);

    let effects = SIMULATED_EFFECTS
        .iter()
        .filter(|_| rng.random::<bool>())
        .map(|s| (*s).to_string())
        .collect();

    CmeEvent {
        id: format!("SF-{}", Uuid::from_u128(rng.random())),
        associated_cme_id: None,
        catalog: None,
        flare_class: FlareClass::bare(letter),
        intensity,
        timestamp: Utc::now(),
        latitude: 0.0,
        longitude: 0.0,
        half_angle: None,
        cme_speed: None,
        region: format!("AR{region_number}"),
        duration_minutes,
        effects,
        source: EventSource::Simulation,
    }
}
