//! Demo exoplanet catalog
//!
//! A handful of well-known, real exoplanets with archive-sourced parameters,
//! useful for examples, tests, and anything that wants representative data
//! without a live archive query.

use scoring::Knowledge;

use crate::planet::{DiscoveryMethod, PlanetRecord};
use crate::prediction::{predict_habitability, HabitabilityPrediction};

/// Kepler-452b: a super-Earth in the habitable zone of a Sun-like star
pub fn kepler_452b() -> PlanetRecord {
    PlanetRecord {
        name: "Kepler-452b".to_string(),
        host_star: "Kepler-452".to_string(),
        discovery_method: DiscoveryMethod::Transit,
        discovery_year: 2015,
        mass: 1.9,
        radius: 1.63,
        orbital_period: 384.8,
        semi_major_axis: 1.05,
        eccentricity: 0.1,
        equilibrium_temp: 265.0,
        stellar_mass: 1.04,
        stellar_temp: 5757.0,
        distance: 1400.0,
        atmosphere_composition: Some(vec!["Unknown".to_string()]),
        surface_pressure: None,
        has_water: Knowledge::Unknown,
        has_magnetic_field: Knowledge::Unknown,
        tidally_locked: Knowledge::Known(false),
    }
}

/// Proxima Centauri b: the nearest known exoplanet
pub fn proxima_centauri_b() -> PlanetRecord {
    PlanetRecord {
        name: "Proxima Centauri b".to_string(),
        host_star: "Proxima Centauri".to_string(),
        discovery_method: DiscoveryMethod::RadialVelocity,
        discovery_year: 2016,
        mass: 1.17,
        radius: 1.1,
        orbital_period: 11.2,
        semi_major_axis: 0.05,
        eccentricity: 0.11,
        equilibrium_temp: 234.0,
        stellar_mass: 0.12,
        stellar_temp: 3042.0,
        distance: 1.3,
        atmosphere_composition: Some(vec!["Potentially Rocky".to_string()]),
        surface_pressure: None,
        has_water: Knowledge::Unknown,
        has_magnetic_field: Knowledge::Known(false),
        tidally_locked: Knowledge::Known(true),
    }
}

/// TRAPPIST-1e: a temperate rocky world around an ultracool dwarf
pub fn trappist_1e() -> PlanetRecord {
    PlanetRecord {
        name: "TRAPPIST-1e".to_string(),
        host_star: "TRAPPIST-1".to_string(),
        discovery_method: DiscoveryMethod::Transit,
        discovery_year: 2017,
        mass: 0.77,
        radius: 0.92,
        orbital_period: 6.1,
        semi_major_axis: 0.03,
        eccentricity: 0.01,
        equilibrium_temp: 251.0,
        stellar_mass: 0.09,
        stellar_temp: 2511.0,
        distance: 12.1,
        atmosphere_composition: Some(vec!["Potentially Earth-like".to_string()]),
        surface_pressure: None,
        has_water: Knowledge::Known(true),
        has_magnetic_field: Knowledge::Unknown,
        tidally_locked: Knowledge::Known(true),
    }
}

/// K2-18b: a sub-Neptune with water vapor detected in its atmosphere
pub fn k2_18b() -> PlanetRecord {
    PlanetRecord {
        name: "K2-18b".to_string(),
        host_star: "K2-18".to_string(),
        discovery_method: DiscoveryMethod::Transit,
        discovery_year: 2015,
        mass: 8.6,
        radius: 2.3,
        orbital_period: 33.0,
        semi_major_axis: 0.14,
        eccentricity: 0.0,
        equilibrium_temp: 279.0,
        stellar_mass: 0.36,
        stellar_temp: 3457.0,
        distance: 34.0,
        atmosphere_composition: Some(vec![
            "H2O detected".to_string(),
            "H2".to_string(),
            "He".to_string(),
        ]),
        surface_pressure: None,
        has_water: Knowledge::Known(true),
        has_magnetic_field: Knowledge::Unknown,
        tidally_locked: Knowledge::Known(false),
    }
}

/// Gliese 667Cc: a super-Earth in a triple star system
pub fn gliese_667cc() -> PlanetRecord {
    PlanetRecord {
        name: "Gliese 667Cc".to_string(),
        host_star: "Gliese 667C".to_string(),
        discovery_method: DiscoveryMethod::RadialVelocity,
        discovery_year: 2011,
        mass: 3.8,
        radius: 1.5,
        orbital_period: 28.1,
        semi_major_axis: 0.12,
        eccentricity: 0.02,
        equilibrium_temp: 277.0,
        stellar_mass: 0.31,
        stellar_temp: 3700.0,
        distance: 6.8,
        atmosphere_composition: Some(vec!["Unknown".to_string()]),
        surface_pressure: None,
        has_water: Knowledge::Unknown,
        has_magnetic_field: Knowledge::Unknown,
        tidally_locked: Knowledge::Known(false),
    }
}

/// All demo catalog planets
pub fn demo_catalog() -> Vec<PlanetRecord> {
    vec![
        kepler_452b(),
        proxima_centauri_b(),
        trappist_1e(),
        k2_18b(),
        gliese_667cc(),
    ]
}

/// Score a set of planets and order them by habitability, best first
///
/// Each planet is scored exactly once before sorting; ordering compares the
/// full-precision overall scores, so the ranking always agrees with the
/// scores a caller would display.
pub fn rank_by_habitability(
    planets: Vec<PlanetRecord>,
) -> Vec<(PlanetRecord, HabitabilityPrediction)> {
    let mut ranked: Vec<(PlanetRecord, HabitabilityPrediction)> = planets
        .into_iter()
        .map(|planet| {
            let prediction = predict_habitability(&planet);
            (planet, prediction)
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.1.habitability_score
            .overall
            .total_cmp(&a.1.habitability_score.overall)
    });

    ranked
}
