//! Planet input records
//!
//! A `PlanetRecord` is the immutable description of one exoplanet as it
//! appears in an archive: identity, physical and orbital parameters, host
//! star properties, and a handful of uncertain observations. Records are
//! constructed fresh per scoring call and never mutated.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use scoring::Knowledge;

/// How an exoplanet was detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum DiscoveryMethod {
    /// Periodic dimming as the planet crosses its star's disk
    Transit,

    /// Doppler wobble of the host star
    RadialVelocity,

    /// Direct resolution of the planet in an image
    DirectImaging,

    /// Gravitational microlensing amplification
    Microlensing,
}

impl DiscoveryMethod {
    /// Human-readable name, matching archive catalog strings
    pub fn name(&self) -> &'static str {
        match self {
            Self::Transit => "Transit",
            Self::RadialVelocity => "Radial Velocity",
            Self::DirectImaging => "Direct Imaging",
            Self::Microlensing => "Gravitational Microlensing",
        }
    }
}

impl fmt::Display for DiscoveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Physical and orbital description of one exoplanet
///
/// Required numeric fields are assumed finite and positive-where-physical;
/// the boundary check lives in [`PlanetRecord::validate`], not in the
/// scorer. Uncertain observations use [`Knowledge`] so that "measured
/// false" and "never measured" stay distinct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct PlanetRecord {
    /// Planet designation (e.g., "TRAPPIST-1e")
    pub name: String,
    /// Host star designation
    pub host_star: String,
    /// Detection technique
    pub discovery_method: DiscoveryMethod,
    /// Year of announcement
    pub discovery_year: i32,

    /// Mass in Earth masses (M⊕)
    pub mass: f64,
    /// Radius in Earth radii (R⊕)
    pub radius: f64,

    /// Orbital period in days
    pub orbital_period: f64,
    /// Semi-major axis in AU
    pub semi_major_axis: f64,
    /// Orbital eccentricity (0-1)
    pub eccentricity: f64,

    /// Equilibrium (blackbody) temperature in Kelvin
    pub equilibrium_temp: f64,

    /// Host star mass in solar masses (M☉)
    pub stellar_mass: f64,
    /// Host star effective temperature in Kelvin
    pub stellar_temp: f64,

    /// Distance from Earth in parsecs
    pub distance: f64,

    /// Free-text atmospheric composition tags, when any spectroscopy exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atmosphere_composition: Option<Vec<String>>,
    /// Surface pressure in Earth atmospheres, when constrained
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_pressure: Option<f64>,
    /// Whether water has been detected
    #[serde(default)]
    pub has_water: Knowledge,
    /// Whether a magnetic field has been detected
    #[serde(default)]
    pub has_magnetic_field: Knowledge,
    /// Whether the planet is tidally locked to its star
    #[serde(default)]
    pub tidally_locked: Knowledge,
}

impl PlanetRecord {
    /// Whether any atmosphere tag equals the given value exactly
    pub fn has_atmosphere_tag(&self, tag: &str) -> bool {
        self.atmosphere_composition
            .as_deref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }

    /// Whether any atmosphere tag mentions the given substring
    ///
    /// Spectroscopy tags are free text ("H2O detected", "H2O vapor"), so
    /// species checks are substring matches.
    pub fn atmosphere_mentions(&self, species: &str) -> bool {
        self.atmosphere_composition
            .as_deref()
            .is_some_and(|tags| tags.iter().any(|t| t.contains(species)))
    }
}

/// An Earth twin around a Sun twin, useful as a scoring reference point
pub fn earth_analog() -> PlanetRecord {
    PlanetRecord {
        name: "Earth Analog".to_string(),
        host_star: "Solar Analog".to_string(),
        discovery_method: DiscoveryMethod::Transit,
        discovery_year: 2025,
        mass: 1.0,
        radius: 1.0,
        orbital_period: 365.25,
        semi_major_axis: 1.0,
        eccentricity: 0.017,
        equilibrium_temp: 288.0,
        stellar_mass: 1.0,
        stellar_temp: 5778.0,
        distance: 0.0,
        atmosphere_composition: Some(vec!["Earth-like".to_string()]),
        surface_pressure: Some(1.0),
        has_water: Knowledge::Known(true),
        has_magnetic_field: Knowledge::Known(true),
        tidally_locked: Knowledge::Known(false),
    }
}
