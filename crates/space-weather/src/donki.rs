//! NASA DONKI catalog interop
//!
//! The Space Weather Database Of Notifications, Knowledge, Information
//! (DONKI) publishes CME analyses as JSON. [`CmeAnalysisRecord`] mirrors
//! that payload shape; [`CmeAnalysisRecord::into_event`] normalizes a
//! record into a [`CmeEvent`] ready for the predictors.
//!
//! DONKI carries no flare classification of its own, so conversion infers
//! one from the plasma speed and derives intensity and duration the same
//! way.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::event::{effects_from_speed, CmeEvent, EventSource};
use crate::flare_class::{FlareClass, FlareLetter};

/// Timestamp format used by DONKI ("2025-03-13T12:36Z", no seconds)
const DONKI_TIME_FORMAT: &str = "%Y-%m-%dT%H:%MZ";

/// One CME analysis as published by the DONKI API
///
/// Field names mirror the JSON payload. Measurement metadata the
/// predictors never read (tilt, image type, version) is accepted and
/// ignored by deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmeAnalysisRecord {
    /// Time the CME front reached 21.5 solar radii
    #[serde(rename = "time21_5")]
    pub time21_5: String,

    /// Heliographic latitude of the origin, in degrees
    pub latitude: f64,

    /// Heliographic longitude of the origin, in degrees
    pub longitude: f64,

    /// Angular half-width of the cone, in degrees
    pub half_angle: f64,

    /// Plasma speed in km/s
    pub speed: f64,

    /// Analysis type code (e.g. "S", "C", "O")
    #[serde(rename = "type", default)]
    pub analysis_type: Option<String>,

    /// Whether DONKI marks this the most accurate analysis for the CME
    #[serde(default)]
    pub is_most_accurate: bool,

    /// Identifier of the parent CME activity record
    #[serde(rename = "associatedCMEID")]
    pub associated_cme_id: String,

    /// Catalog the analysis belongs to (e.g. "M2M_CATALOG")
    pub catalog: String,

    /// Data quality level ("0" real-time through "2" retrospective)
    #[serde(default)]
    pub data_level: Option<String>,

    /// Analyst note, often empty
    #[serde(default)]
    pub note: Option<String>,

    /// When the analysis was submitted
    #[serde(default)]
    pub submission_time: Option<String>,

    /// Link back to the DONKI record
    #[serde(default)]
    pub link: Option<String>,
}

/// Why a DONKI record could not be converted to an event
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DonkiConversionError {
    /// The `time21_5` field did not parse as a DONKI timestamp
    #[error("unparseable DONKI timestamp `{0}`")]
    BadTimestamp(String),

    /// The record carries a negative or non-finite speed
    #[error("DONKI record has invalid speed {0} km/s")]
    BadSpeed(f64),
}

impl CmeAnalysisRecord {
    /// Parse the `time21_5` timestamp
    pub fn timestamp(&self) -> Result<DateTime<Utc>, DonkiConversionError> {
        NaiveDateTime::parse_from_str(&self.time21_5, DONKI_TIME_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(|_| DonkiConversionError::BadTimestamp(self.time21_5.clone()))
    }

    /// Normalize this analysis into a [`CmeEvent`]
    ///
    /// Derived fields: flare class from the speed ladder (>1000 M, >500 C,
    /// else B), `intensity = min(speed / 100, 10)`, `duration = floor(speed
    /// / 10)` minutes, and a region string from the origin coordinates.
    pub fn into_event(self) -> Result<CmeEvent, DonkiConversionError> {
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(DonkiConversionError::BadSpeed(self.speed));
        }
        let timestamp = self.timestamp()?;

        Ok(CmeEvent {
            id: self.associated_cme_id.clone(),
            associated_cme_id: Some(self.associated_cme_id),
            catalog: Some(self.catalog),
            flare_class: FlareClass::bare(FlareLetter::from_speed(self.speed)),
            intensity: (self.speed / 100.0).min(10.0),
            timestamp,
            latitude: self.latitude,
            longitude: self.longitude,
            half_angle: Some(self.half_angle),
            cme_speed: Some(self.speed),
            region: format!("{:.1}°, {:.1}°", self.latitude, self.longitude),
            duration_minutes: (self.speed / 10.0).floor() as u32,
            effects: effects_from_speed(self.speed),
            source: EventSource::Donki,
        })
    }
}

/// Convert a batch of DONKI analyses, in order
///
/// Fails on the first bad record rather than silently dropping it.
pub fn convert_analyses(
    records: Vec<CmeAnalysisRecord>,
) -> Result<Vec<CmeEvent>, DonkiConversionError> {
    records
        .into_iter()
        .map(CmeAnalysisRecord::into_event)
        .collect()
}
