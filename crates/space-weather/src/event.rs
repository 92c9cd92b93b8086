//! CME event records
//!
//! A [`CmeEvent`] is the normalized input to both predictors. Records reach
//! this shape from the DONKI catalog (see [`crate::donki`]), from seeded
//! simulation (see [`crate::simulation`]), or by direct construction.
//! Kinematic fields that a source may omit carry conventional defaults:
//! a missing plasma speed falls back to `intensity * 100` km/s and a
//! missing half-angle to 30 degrees.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::flare_class::FlareClass;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Half-angle assumed when the source did not report one, in degrees
pub const DEFAULT_HALF_ANGLE_DEG: f64 = 30.0;

/// Where an event record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum EventSource {
    /// NASA DONKI CME analysis catalog
    Donki,
    /// Locally simulated
    Simulation,
}

impl EventSource {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Donki => "donki",
            Self::Simulation => "simulation",
        }
    }
}

/// A coronal mass ejection event
///
/// Kinematics (`cme_speed`, `half_angle`, origin coordinates) drive the
/// predictors; `region`, `duration_minutes`, and `effects` are carried for
/// catalog fidelity and reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct CmeEvent {
    /// Event identifier
    pub id: String,

    /// Identifier of the associated CME in the source catalog, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_cme_id: Option<String>,

    /// Source catalog name, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,

    /// Flare classification
    pub flare_class: FlareClass,

    /// Flare intensity on a 0-10 scale
    pub intensity: f64,

    /// Event time (UTC)
    pub timestamp: DateTime<Utc>,

    /// Heliographic latitude of the CME origin, in degrees
    pub latitude: f64,

    /// Heliographic longitude of the CME origin, in degrees
    pub longitude: f64,

    /// Angular half-width of the CME cone, in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub half_angle: Option<f64>,

    /// Plasma speed in km/s
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cme_speed: Option<f64>,

    /// Active region designation or origin coordinates as text
    pub region: String,

    /// Event duration in minutes
    pub duration_minutes: u32,

    /// Observed or expected terrestrial effects
    pub effects: Vec<String>,

    /// Where this record came from
    pub source: EventSource,
}

impl CmeEvent {
    /// Plasma speed in km/s, falling back to `intensity * 100` when the
    /// source reported no speed (or a zero one)
    pub fn effective_speed(&self) -> f64 {
        match self.cme_speed {
            Some(speed) if speed > 0.0 => speed,
            _ => self.intensity * 100.0,
        }
    }

    /// Half-angle in degrees, falling back to 30 when unreported
    pub fn effective_half_angle(&self) -> f64 {
        match self.half_angle {
            Some(angle) if angle > 0.0 => angle,
            _ => DEFAULT_HALF_ANGLE_DEG,
        }
    }

    /// Check the record is structurally sound before scoring
    pub fn validate(&self) -> Result<(), CmeEventError> {
        if self.id.trim().is_empty() {
            return Err(CmeEventError::EmptyId);
        }
        for (field, value) in [
            ("intensity", self.intensity),
            ("latitude", self.latitude),
            ("longitude", self.longitude),
        ] {
            if !value.is_finite() {
                return Err(CmeEventError::NonFinite { field });
            }
        }
        if let Some(speed) = self.cme_speed {
            if !speed.is_finite() || speed < 0.0 {
                return Err(CmeEventError::NegativeSpeed { speed });
            }
        }
        if let Some(angle) = self.half_angle {
            if !angle.is_finite() || angle < 0.0 {
                return Err(CmeEventError::NegativeHalfAngle { angle });
            }
        }
        if !(0.0..=10.0).contains(&self.intensity) {
            return Err(CmeEventError::IntensityOutOfRange {
                intensity: self.intensity,
            });
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(CmeEventError::LatitudeOutOfRange {
                latitude: self.latitude,
            });
        }
        Ok(())
    }
}

/// Why a CME event record failed validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CmeEventError {
    /// Identifier is empty or whitespace
    #[error("event id is empty")]
    EmptyId,

    /// A numeric field is NaN or infinite
    #[error("field `{field}` is not finite")]
    NonFinite { field: &'static str },

    /// Reported speed is negative or not finite
    #[error("cme speed {speed} km/s is invalid")]
    NegativeSpeed { speed: f64 },

    /// Reported half-angle is negative or not finite
    #[error("half angle {angle} deg is invalid")]
    NegativeHalfAngle { angle: f64 },

    /// Intensity outside the 0-10 scale
    #[error("intensity {intensity} is outside 0-10")]
    IntensityOutOfRange { intensity: f64 },

    /// Latitude outside -90..=90
    #[error("latitude {latitude} deg is outside -90..=90")]
    LatitudeOutOfRange { latitude: f64 },
}

/// Expected terrestrial effects for a CME of the given speed
///
/// Cumulative ladder: every threshold the speed clears adds its effect, so
/// a faster CME always reports a superset of a slower one's effects.
pub fn effects_from_speed(speed_km_s: f64) -> Vec<String> {
    let ladder: [(f64, &str); 5] = [
        (400.0, "Radio Blackout"),
        (600.0, "GPS Interference"),
        (800.0, "Satellite Anomalies"),
        (1000.0, "Power Grid Alert"),
        (1200.0, "Aurora Visible"),
    ];

    ladder
        .iter()
        .filter(|(threshold, _)| speed_km_s > *threshold)
        .map(|(_, effect)| (*effect).to_string())
        .collect()
}
