//! Geomagnetic impact assessment
//!
//! Estimates whether a CME will hit Earth at all (impact probability from
//! origin geometry, speed, and intensity), when it arrives (ballistic
//! Sun-Earth travel time), and how bad the hit would be (a compound tier
//! over probability and speed, annotated from static content tables).

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use scoring::ValueRange;
use serde::{Deserialize, Serialize};

use crate::event::CmeEvent;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Mean Sun-Earth distance in meters (1 au)
pub const SUN_EARTH_DISTANCE_M: f64 = 1.496e11;

// ========== Impact probability weights ==========

/// Weight of the direction factor (origin latitude proximity to the ecliptic)
pub const DIRECTION_WEIGHT: f64 = 0.4;
/// Weight of normalized speed (speed / 2000 km/s, capped at 1)
pub const SPEED_WEIGHT: f64 = 0.4;
/// Weight of normalized intensity (intensity / 10)
pub const INTENSITY_WEIGHT: f64 = 0.2;

/// Geomagnetic impact tier, ordered least to most severe
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum EarthImpactLevel {
    Low,
    Moderate,
    High,
    Extreme,
}

impl EarthImpactLevel {
    /// Classify impact probability and speed into a tier
    ///
    /// The upper tiers are compound: a high probability alone is not
    /// enough, the CME must also be fast enough to carry a strong
    /// magnetic punch.
    ///
    /// # Arguments
    /// * `impact_probability` - Percent chance of a geoeffective hit
    /// * `speed_km_s` - Plasma speed in km/s
    pub fn classify(impact_probability: f64, speed_km_s: f64) -> Self {
        if impact_probability > 75.0 && speed_km_s > 1000.0 {
            Self::Extreme
        } else if impact_probability > 50.0 && speed_km_s > 700.0 {
            Self::High
        } else if impact_probability > 25.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Human-readable tier name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
            Self::Extreme => "EXTREME",
        }
    }

    /// Storm severity range for this tier, on a 1-10 scale
    pub fn severity(&self) -> ValueRange {
        match self {
            Self::Extreme => ValueRange::new(8.0, 10.0),
            Self::High => ValueRange::new(6.0, 8.0),
            Self::Moderate => ValueRange::new(3.0, 6.0),
            Self::Low => ValueRange::new(1.0, 3.0),
        }
    }

    /// Regions expected to be affected at this tier
    pub fn affected_regions(&self) -> &'static [&'static str] {
        match self {
            Self::Extreme => &["North America", "Europe", "Asia", "Polar Regions"],
            Self::High => &[
                "High-latitude Regions",
                "Northern Europe",
                "Canada",
                "Alaska",
            ],
            Self::Moderate => &["Polar Regions", "Northern Canada", "Scandinavia"],
            Self::Low => &["Minimal Surface Impact"],
        }
    }

    /// Ground-level effects expected at this tier
    pub fn potential_effects(&self) -> &'static [&'static str] {
        match self {
            Self::Extreme => &[
                "Widespread Power Grid Failures",
                "Global Communication Disruption",
                "Aviation Rerouting",
                "Internet Infrastructure Impact",
                "Aurora Visible at Low Latitudes",
            ],
            Self::High => &[
                "Regional Power Disruptions",
                "HF Radio Blackouts",
                "GPS Accuracy Degradation",
                "Pipeline Corrosion Acceleration",
            ],
            Self::Moderate => &[
                "Minor Power Grid Fluctuations",
                "Radio Communication Issues",
                "Beautiful Aurora Displays",
            ],
            Self::Low => &["Possible Aurora Enhancement", "Minor Radio Interference"],
        }
    }

    /// How long the disturbance should last at this tier
    pub fn duration(&self) -> &'static str {
        match self {
            Self::Extreme => "12-48 hours",
            Self::High => "6-24 hours",
            Self::Moderate => "2-12 hours",
            Self::Low => "1-6 hours",
        }
    }
}

impl fmt::Display for EarthImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Preparations recommended regardless of tier
pub const RECOMMENDATIONS: [&str; 5] = [
    "Monitor space weather alerts",
    "Prepare backup communication systems",
    "Alert critical infrastructure operators",
    "Update emergency response protocols",
    "Inform airline operations for polar route adjustments",
];

/// Predicted consequences of a CME for Earth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct EarthImpactPrediction {
    /// Percent chance of a geoeffective hit, in [0, 100]
    pub impact_probability: f64,
    /// Expected arrival at Earth; `None` when the effective speed is zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<DateTime<Utc>>,
    /// Impact tier
    pub risk_level: EarthImpactLevel,
    /// Storm severity range on a 1-10 scale
    pub severity: ValueRange,
    /// Regions expected to be affected
    pub affected_regions: Vec<String>,
    /// Ground-level effects expected
    pub potential_effects: Vec<String>,
    /// Expected disturbance duration
    pub duration: String,
    /// Recommended preparations
    pub recommendations: Vec<String>,
}

/// Ballistic Sun-Earth travel time in seconds at the given speed
///
/// Returns `None` for a non-positive speed.
pub fn travel_time_s(speed_km_s: f64) -> Option<f64> {
    if speed_km_s > 0.0 {
        Some(SUN_EARTH_DISTANCE_M / (speed_km_s * 1000.0))
    } else {
        None
    }
}

/// Assess the geomagnetic impact a CME poses to Earth
///
/// Pure: the same event always yields the same prediction. The impact
/// probability weighs how squarely the CME faces the ecliptic (direction
/// factor from origin latitude), how fast it travels (against 2000 km/s),
/// and how intense the flare was.
///
/// # Examples
/// ```
/// use space_weather::{demo_storm, predict_earth_impact, EarthImpactLevel};
///
/// let prediction = predict_earth_impact(&demo_storm());
/// assert_eq!(prediction.risk_level, EarthImpactLevel::High);
/// assert!(prediction.arrival_time.is_some());
/// ```
pub fn predict_earth_impact(event: &CmeEvent) -> EarthImpactPrediction {
    let speed = event.effective_speed();
    let intensity = event.intensity;

    let arrival_time = travel_time_s(speed).map(|seconds| {
        event.timestamp + Duration::milliseconds((seconds * 1000.0) as i64)
    });

    let direction_factor = (1.0 - event.latitude.abs() / 90.0).max(0.0);
    let speed_factor = (speed / 2000.0).min(1.0);
    let intensity_factor = intensity / 10.0;

    let impact_probability = ((direction_factor * DIRECTION_WEIGHT
        + speed_factor * SPEED_WEIGHT
        + intensity_factor * INTENSITY_WEIGHT)
        * 100.0)
        .min(100.0);

    let risk_level = EarthImpactLevel::classify(impact_probability, speed);

    EarthImpactPrediction {
        impact_probability,
        arrival_time,
        risk_level,
        severity: risk_level.severity(),
        affected_regions: risk_level
            .affected_regions()
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
        potential_effects: risk_level
            .potential_effects()
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
        duration: risk_level.duration().to_string(),
        recommendations: RECOMMENDATIONS.iter().map(|s| (*s).to_string()).collect(),
    }
}
