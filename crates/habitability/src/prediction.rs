//! Derived predictions layered over the habitability score
//!
//! Beyond the score itself, callers want the "so what": how Earth-like is
//! the planet, could we detect life there, what might live there, and could
//! we ever visit. All of it is derived deterministically from the score and
//! the record's distance.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::planet::PlanetRecord;
use crate::score::HabitabilityScore;

/// How realistic an investigation mission is with current technology
///
/// Note the ordering quirk: nearby planets classify as merely
/// `Challenging` while distant ones are `Impossible`, i.e. the scale runs
/// opposite to "closer is easier". Pinned by test; see DESIGN.md.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum MissionFeasibility {
    /// Beyond 50 parsecs
    Impossible,

    /// Between 10 and 50 parsecs
    VeryDifficult,

    /// Within 10 parsecs
    Challenging,

    /// Part of the public vocabulary but not produced by the current
    /// distance ladder
    Feasible,
}

impl MissionFeasibility {
    /// Classify mission feasibility from distance in parsecs
    pub fn from_distance(distance_pc: f64) -> Self {
        match distance_pc {
            d if d < 10.0 => Self::Challenging,
            d if d < 50.0 => Self::VeryDifficult,
            _ => Self::Impossible,
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Impossible => "Impossible",
            Self::VeryDifficult => "Very Difficult",
            Self::Challenging => "Challenging",
            Self::Feasible => "Feasible",
        }
    }
}

impl fmt::Display for MissionFeasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Full habitability assessment for one planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct HabitabilityPrediction {
    /// Sub-scores, overall score, tier, and annotations
    pub habitability_score: HabitabilityScore,
    /// Similarity to Earth on a 0-1 scale
    pub similar_earth: f64,
    /// Likelihood of detectable biosignatures on a 0-1 scale
    pub biosignature_potential: f64,
    /// Life forms the conditions could plausibly support (cumulative)
    pub estimated_life_types: Vec<String>,
    /// Rough study duration in years with current technology
    pub time_to_investigate: f64,
    /// Mission classification from distance
    pub mission_feasibility: MissionFeasibility,
}

/// Assess a planet's habitability and derive its predictions
///
/// Pure function over the input record: no I/O, no shared state, no
/// randomness. Scoring the same record twice yields identical output, and
/// concurrent calls need no coordination.
///
/// # Examples
/// ```
/// use habitability::planet::earth_analog;
/// use habitability::{predict_habitability, HabitabilityClass};
///
/// let prediction = predict_habitability(&earth_analog());
/// assert_eq!(prediction.habitability_score.overall, 100.0);
/// assert_eq!(
///     prediction.habitability_score.classification,
///     HabitabilityClass::HighlyHabitable,
/// );
/// ```
pub fn predict_habitability(planet: &PlanetRecord) -> HabitabilityPrediction {
    let score = HabitabilityScore::assess(planet);

    let similar_earth = (score.overall / 100.0).min(1.0);

    // Uses the post-tidal-adjustment temperature score
    let biosignature_potential =
        ((score.water + score.atmosphere + score.temperature) / 300.0).min(1.0);

    let mut estimated_life_types = Vec::new();
    if score.water > 60.0 {
        estimated_life_types.push("Aquatic microorganisms".to_string());
    }
    if score.atmosphere > 70.0 {
        estimated_life_types.push("Atmospheric bacteria".to_string());
    }
    if score.overall > 70.0 {
        estimated_life_types.push("Complex multicellular life".to_string());
    }
    if score.overall > 85.0 {
        estimated_life_types.push("Potentially intelligent life".to_string());
    }

    HabitabilityPrediction {
        similar_earth,
        biosignature_potential,
        estimated_life_types,
        time_to_investigate: (planet.distance * 2.5).round(),
        mission_feasibility: MissionFeasibility::from_distance(planet.distance),
        habitability_score: score,
    }
}
