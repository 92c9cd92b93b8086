//! Habitability sub-scores, weighted combination, and tier classification
//!
//! Six independent sub-scores (temperature, size, orbit, star, water,
//! atmosphere), each clamped to [0, 100], are combined under fixed weights
//! into an overall score, which a monotonic threshold ladder maps to one of
//! four habitability tiers. Every branch that moves a score also records a
//! human-readable reason or risk.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use scoring::{clamp_score, weighted_sum, Knowledge};

use crate::planet::PlanetRecord;

/// Earth's mean surface temperature reference (Kelvin)
pub const EARTH_REFERENCE_TEMP: f64 = 288.0;

/// Solar effective temperature reference (Kelvin)
pub const SOLAR_REFERENCE_TEMP: f64 = 5778.0;

/// Stellar temperature window considered suitable for life (Kelvin)
pub const STELLAR_TEMP_WINDOW: (f64, f64) = (3500.0, 6500.0);

// Fixed combination weights; must sum to 1.0 exactly
const TEMPERATURE_WEIGHT: f64 = 0.25;
const WATER_WEIGHT: f64 = 0.20;
const ATMOSPHERE_WEIGHT: f64 = 0.20;
const SIZE_WEIGHT: f64 = 0.15;
const ORBIT_WEIGHT: f64 = 0.15;
const STAR_WEIGHT: f64 = 0.05;

/// Habitability tier, ordered from worst to best
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum HabitabilityClass {
    /// Overall score below 40
    Uninhabitable,

    /// Overall score 40-60
    MarginallyHabitable,

    /// Overall score 60-80
    PotentiallyHabitable,

    /// Overall score 80 and above
    HighlyHabitable,
}

impl HabitabilityClass {
    /// Classify an overall score into a habitability tier
    ///
    /// Thresholds are inclusive at the lower edge: an overall of exactly
    /// 80.0 is `HighlyHabitable`, 79.999 is `PotentiallyHabitable`.
    ///
    /// # Examples
    /// ```
    /// use habitability::HabitabilityClass;
    ///
    /// assert_eq!(HabitabilityClass::classify(80.0), HabitabilityClass::HighlyHabitable);
    /// assert_eq!(HabitabilityClass::classify(79.999), HabitabilityClass::PotentiallyHabitable);
    /// assert_eq!(HabitabilityClass::classify(12.0), HabitabilityClass::Uninhabitable);
    /// ```
    pub fn classify(overall: f64) -> Self {
        match overall {
            s if s >= 80.0 => Self::HighlyHabitable,
            s if s >= 60.0 => Self::PotentiallyHabitable,
            s if s >= 40.0 => Self::MarginallyHabitable,
            _ => Self::Uninhabitable,
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uninhabitable => "Uninhabitable",
            Self::MarginallyHabitable => "Marginally Habitable",
            Self::PotentiallyHabitable => "Potentially Habitable",
            Self::HighlyHabitable => "Highly Habitable",
        }
    }
}

impl fmt::Display for HabitabilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The liquid-water orbital zone around a star
///
/// Bounds scale with the square root of stellar mass: a dimmer, lighter
/// star pulls its habitable zone inward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct HabitableZone {
    /// Inner edge in AU
    pub inner_edge: f64,
    /// Outer edge in AU
    pub outer_edge: f64,
}

impl HabitableZone {
    /// Whether an orbit at the given semi-major axis lies inside the zone
    pub fn contains(&self, semi_major_axis_au: f64) -> bool {
        (self.inner_edge..=self.outer_edge).contains(&semi_major_axis_au)
    }

    /// Distance in AU from the nearest zone edge
    ///
    /// Zero for orbits inside the zone.
    pub fn distance_from(&self, semi_major_axis_au: f64) -> f64 {
        if self.contains(semi_major_axis_au) {
            return 0.0;
        }
        (semi_major_axis_au - self.inner_edge)
            .abs()
            .min((semi_major_axis_au - self.outer_edge).abs())
    }
}

/// Habitable zone bounds for a star of the given mass
///
/// # Examples
/// ```
/// use habitability::habitable_zone;
///
/// let hz = habitable_zone(1.0);
/// assert_eq!(hz.inner_edge, 0.7);
/// assert_eq!(hz.outer_edge, 1.5);
/// assert!(hz.contains(1.0));
/// ```
pub fn habitable_zone(stellar_mass_solar: f64) -> HabitableZone {
    let scale = stellar_mass_solar.sqrt();
    HabitableZone {
        inner_edge: 0.7 * scale,
        outer_edge: 1.5 * scale,
    }
}

/// The six sub-scores, overall score, and annotations for one planet
///
/// All score fields are full-precision `f64` in [0, 100]; ranking and
/// comparisons use these values directly, and any rounding is left to the
/// presentation layer so displayed order can never disagree with sort
/// order. `overall` is always the fixed convex combination of the six
/// sub-scores, and `classification` is a deterministic function of
/// `overall`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct HabitabilityScore {
    /// Closeness of equilibrium temperature to Earth's 288 K
    pub temperature: f64,
    /// Atmospheric evidence quality
    pub atmosphere: f64,
    /// Water evidence quality
    pub water: f64,
    /// Mass/radius closeness to Earth
    pub size: f64,
    /// Habitable-zone placement
    pub orbit: f64,
    /// Host star suitability
    pub star: f64,
    /// Weighted combination of the six sub-scores
    pub overall: f64,
    /// How much observational data backs this assessment (0-100)
    pub confidence: f64,
    /// Tier derived from `overall`
    pub classification: HabitabilityClass,
    /// Factors favoring habitability
    pub reasons: Vec<String>,
    /// Factors against habitability
    pub risks: Vec<String>,
}

impl HabitabilityScore {
    /// Score a planet record
    ///
    /// Pure and infallible for structurally valid input; optional fields
    /// that are absent select "no evidence" branches and lower `confidence`
    /// rather than failing. See [`PlanetRecord::validate`] for the input
    /// contract.
    pub fn assess(planet: &PlanetRecord) -> Self {
        let mut reasons = Vec::new();
        let mut risks = Vec::new();

        // Temperature: distance from Earth's 288 K reference
        let temp_diff = (planet.equilibrium_temp - EARTH_REFERENCE_TEMP).abs();
        let mut temperature = if temp_diff < 50.0 {
            reasons.push("Temperature similar to Earth".to_string());
            100.0 - temp_diff * 1.5
        } else if temp_diff < 100.0 {
            reasons.push("Temperature moderately different from Earth".to_string());
            70.0 - temp_diff * 0.5
        } else {
            risks.push("Extreme temperature conditions".to_string());
            50.0 - temp_diff * 0.3
        };
        temperature = clamp_score(temperature);

        // Size: average of mass and radius closeness to Earth
        let mass_score = clamp_score(100.0 - (planet.mass - 1.0).abs() * 30.0);
        let radius_score = clamp_score(100.0 - (planet.radius - 1.0).abs() * 40.0);
        let size = (mass_score + radius_score) / 2.0;

        if planet.mass > 1.5 {
            risks.push("High mass may retain thick atmosphere".to_string());
        } else if planet.mass < 0.5 {
            risks.push("Low mass may not retain atmosphere".to_string());
        } else {
            reasons.push("Size compatible with surface conditions".to_string());
        }

        // Orbit: habitable-zone placement, bounds scaled by stellar mass
        let zone = habitable_zone(planet.stellar_mass);
        let orbit = if zone.contains(planet.semi_major_axis) {
            reasons.push("Located in habitable zone".to_string());
            100.0
        } else {
            risks.push("Outside optimal habitable zone".to_string());
            clamp_score(80.0 - zone.distance_from(planet.semi_major_axis) * 100.0)
        };

        // Star: suitability window, with falloff from the solar reference
        let (window_min, window_max) = STELLAR_TEMP_WINDOW;
        let star = if (window_min..=window_max).contains(&planet.stellar_temp) {
            reasons.push("Host star suitable for life".to_string());
            100.0
        } else {
            if planet.stellar_temp < window_min {
                risks.push("Red dwarf host - potential tidal locking".to_string());
            } else {
                risks.push("Very hot host star".to_string());
            }
            clamp_score(100.0 - (planet.stellar_temp - SOLAR_REFERENCE_TEMP).abs() / 100.0)
        };

        // Water: evidence ladder, falling back to favorable conditions
        let water = if planet.has_water.is_confirmed() {
            reasons.push("Water detected in atmosphere".to_string());
            100.0
        } else if planet.atmosphere_mentions("H2O") {
            reasons.push("Water vapor signatures detected".to_string());
            90.0
        } else if temperature > 50.0 && orbit > 50.0 {
            reasons.push("Conditions may allow liquid water".to_string());
            60.0
        } else {
            risks.push("No evidence of water".to_string());
            20.0
        };

        // Atmosphere: evidence ladder
        let mut atmosphere = if planet.has_atmosphere_tag("Earth-like") {
            reasons.push("Potentially Earth-like atmosphere".to_string());
            100.0
        } else if planet.atmosphere_mentions("H2O") {
            reasons.push("Complex atmospheric composition".to_string());
            80.0
        } else if planet.surface_pressure.is_some() {
            70.0
        } else {
            risks.push("Atmospheric composition unknown".to_string());
            30.0
        };

        // Tidal locking penalizes the day/night-sensitive scores, after the
        // base ladders. Unknown is not a lock.
        if planet.tidally_locked == Knowledge::Known(true) {
            temperature *= 0.7;
            atmosphere *= 0.8;
            risks.push("Tidally locked - extreme temperature differences".to_string());
        }

        let overall = weighted_sum(&[
            (temperature, TEMPERATURE_WEIGHT),
            (water, WATER_WEIGHT),
            (atmosphere, ATMOSPHERE_WEIGHT),
            (size, SIZE_WEIGHT),
            (orbit, ORBIT_WEIGHT),
            (star, STAR_WEIGHT),
        ]);

        let confidence = Self::confidence(planet);

        Self {
            temperature,
            atmosphere,
            water,
            size,
            orbit,
            star,
            overall,
            confidence,
            classification: HabitabilityClass::classify(overall),
            reasons,
            risks,
        }
    }

    /// How much observational data backs an assessment
    ///
    /// Orbital mechanics are always known (35 base points); each determined
    /// optional observation adds its share, capped at 100. A negative
    /// measurement counts as much as a positive one.
    fn confidence(planet: &PlanetRecord) -> f64 {
        let mut confidence: f64 = 35.0;
        if planet.has_water.is_determined() {
            confidence += 20.0;
        }
        if planet.atmosphere_composition.is_some() {
            confidence += 30.0;
        }
        if planet.has_magnetic_field.is_determined() {
            confidence += 15.0;
        }
        confidence.min(100.0)
    }
}
