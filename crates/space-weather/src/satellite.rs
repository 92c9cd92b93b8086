//! Satellite damage risk assessment
//!
//! Collapses a CME's kinematics into a single risk score, classifies it
//! into an ordered tier, and annotates the tier from static content tables
//! (which fleets are exposed, what kind of damage to expect, how long the
//! outage should last).

use std::fmt;

use scoring::ValueRange;
use serde::{Deserialize, Serialize};

use crate::event::CmeEvent;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

// ========== Risk score weights ==========

/// Weight of normalized speed (speed / 1000 km/s)
pub const SPEED_WEIGHT: f64 = 0.4;
/// Weight of normalized intensity (intensity / 10)
pub const INTENSITY_WEIGHT: f64 = 0.3;
/// Weight of normalized half-angle (half-angle / 90 deg)
pub const HALF_ANGLE_WEIGHT: f64 = 0.3;

/// Risk tier for orbital assets, ordered least to most severe
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum SatelliteRiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl SatelliteRiskLevel {
    /// Classify a risk score into a tier
    ///
    /// # Arguments
    /// * `risk_score` - Weighted combination of speed, intensity, and
    ///   half-angle factors, nominally in [0, 1]
    pub fn classify(risk_score: f64) -> Self {
        match risk_score {
            s if s > 0.8 => Self::Critical,
            s if s > 0.6 => Self::High,
            s if s > 0.3 => Self::Moderate,
            _ => Self::Low,
        }
    }

    /// Human-readable tier name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }

    /// Prediction confidence range for this tier, in percent
    ///
    /// Narrower at the extremes: a storm that saturates the score is easy
    /// to call, a marginal one less so.
    pub fn confidence(&self) -> ValueRange {
        match self {
            Self::Critical => ValueRange::new(85.0, 95.0),
            Self::High => ValueRange::new(75.0, 90.0),
            Self::Moderate => ValueRange::new(65.0, 85.0),
            Self::Low => ValueRange::new(55.0, 80.0),
        }
    }

    /// Satellite fleets expected to be affected at this tier
    pub fn affected_satellites(&self) -> &'static [&'static str] {
        match self {
            Self::Critical => &[
                "GPS Constellation",
                "Communication Satellites",
                "Weather Satellites",
                "ISS Systems",
            ],
            Self::High => &[
                "Communication Satellites",
                "GPS Systems",
                "Earth Observation",
            ],
            Self::Moderate => &["Low-orbit Satellites", "Communication Systems"],
            Self::Low => &["Minimal Impact Expected"],
        }
    }

    /// Kinds of damage expected at this tier
    pub fn damage_types(&self) -> &'static [&'static str] {
        match self {
            Self::Critical => &[
                "Permanent Hardware Damage",
                "Memory Corruption",
                "Solar Panel Degradation",
                "Attitude Control Loss",
            ],
            Self::High => &[
                "Temporary System Failures",
                "Data Corruption",
                "Component Overheating",
            ],
            Self::Moderate => &["Signal Interference", "Minor System Glitches"],
            Self::Low => &["Brief Signal Disruption"],
        }
    }

    /// Expected outage duration at this tier
    pub fn estimated_downtime(&self) -> &'static str {
        match self {
            Self::Critical => "24-72 hours",
            Self::High => "4-24 hours",
            Self::Moderate => "1-4 hours",
            Self::Low => "< 1 hour",
        }
    }
}

impl fmt::Display for SatelliteRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Operator actions recommended regardless of tier
pub const PROTECTION_MEASURES: [&str; 4] = [
    "Activate satellite safe modes",
    "Redirect critical operations to backup systems",
    "Increase monitoring frequency",
    "Prepare emergency communication protocols",
];

/// Predicted consequences of a CME for satellites in orbit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct SatelliteDamagePrediction {
    /// Risk tier
    pub risk_level: SatelliteRiskLevel,
    /// Underlying weighted risk score, nominally in [0, 1]
    pub risk_score: f64,
    /// Prediction confidence range in percent
    pub confidence: ValueRange,
    /// Fleets expected to be affected
    pub affected_satellites: Vec<String>,
    /// Kinds of damage expected
    pub damage_types: Vec<String>,
    /// Expected outage duration
    pub estimated_downtime: String,
    /// Recommended operator actions
    pub protection_measures: Vec<String>,
}

/// Assess the damage a CME poses to satellites in orbit
///
/// Pure: the same event always yields the same prediction. The risk score
/// is a weighted sum of three normalized factors (speed against 1000 km/s,
/// intensity against 10, half-angle against 90 degrees), so a faster,
/// stronger, or wider CME never scores lower.
///
/// # Examples
/// ```
/// use space_weather::{demo_storm, predict_satellite_damage, SatelliteRiskLevel};
///
/// let prediction = predict_satellite_damage(&demo_storm());
/// assert_eq!(prediction.risk_level, SatelliteRiskLevel::Critical);
/// ```
pub fn predict_satellite_damage(event: &CmeEvent) -> SatelliteDamagePrediction {
    let speed = event.effective_speed();
    let intensity = event.intensity;
    let half_angle = event.effective_half_angle();

    let risk_score = (speed / 1000.0) * SPEED_WEIGHT
        + (intensity / 10.0) * INTENSITY_WEIGHT
        + (half_angle / 90.0) * HALF_ANGLE_WEIGHT;

    let risk_level = SatelliteRiskLevel::classify(risk_score);

    SatelliteDamagePrediction {
        risk_level,
        risk_score,
        confidence: risk_level.confidence(),
        affected_satellites: risk_level
            .affected_satellites()
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
        damage_types: risk_level
            .damage_types()
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
        estimated_downtime: risk_level.estimated_downtime().to_string(),
        protection_measures: PROTECTION_MEASURES.iter().map(|s| (*s).to_string()).collect(),
    }
}
