//! Boundary validation for planet records
//!
//! The scorer assumes well-formed input: finite numbers, positive masses and
//! temperatures, eccentricity in [0, 1]. Malformed records are a caller
//! contract violation and are rejected here, before scoring, so the scoring
//! functions themselves never need error paths.

use thiserror::Error;

use crate::planet::PlanetRecord;

/// Why a planet record was rejected at the boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanetRecordError {
    /// A required identity string was empty
    #[error("field `{0}` must be non-empty")]
    EmptyField(&'static str),

    /// A numeric field held NaN or infinity
    #[error("field `{0}` must be finite")]
    NonFinite(&'static str),

    /// A physically positive quantity was zero or negative
    #[error("field `{0}` must be positive, got {1}")]
    NonPositive(&'static str, f64),

    /// A bounded quantity fell outside its valid interval
    #[error("field `{0}` must be in [{1}, {2}], got {3}")]
    OutOfRange(&'static str, f64, f64, f64),
}

impl PlanetRecord {
    /// Check the record against the scorer's input contract
    ///
    /// Returns the first violation found. Optional observational fields are
    /// never an error; absence is modeled as [`scoring::Knowledge::Unknown`]
    /// and merely lowers confidence downstream.
    pub fn validate(&self) -> Result<(), PlanetRecordError> {
        if self.name.is_empty() {
            return Err(PlanetRecordError::EmptyField("name"));
        }
        if self.host_star.is_empty() {
            return Err(PlanetRecordError::EmptyField("hostStar"));
        }

        let positive = [
            ("mass", self.mass),
            ("radius", self.radius),
            ("orbitalPeriod", self.orbital_period),
            ("semiMajorAxis", self.semi_major_axis),
            ("equilibriumTemp", self.equilibrium_temp),
            ("stellarMass", self.stellar_mass),
            ("stellarTemp", self.stellar_temp),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(PlanetRecordError::NonFinite(field));
            }
            if value <= 0.0 {
                return Err(PlanetRecordError::NonPositive(field, value));
            }
        }

        if !self.eccentricity.is_finite() {
            return Err(PlanetRecordError::NonFinite("eccentricity"));
        }
        if !(0.0..=1.0).contains(&self.eccentricity) {
            return Err(PlanetRecordError::OutOfRange(
                "eccentricity",
                0.0,
                1.0,
                self.eccentricity,
            ));
        }

        if !self.distance.is_finite() {
            return Err(PlanetRecordError::NonFinite("distance"));
        }
        if self.distance < 0.0 {
            return Err(PlanetRecordError::OutOfRange(
                "distance",
                0.0,
                f64::INFINITY,
                self.distance,
            ));
        }

        if let Some(pressure) = self.surface_pressure {
            if !pressure.is_finite() {
                return Err(PlanetRecordError::NonFinite("surfacePressure"));
            }
            if pressure < 0.0 {
                return Err(PlanetRecordError::OutOfRange(
                    "surfacePressure",
                    0.0,
                    f64::INFINITY,
                    pressure,
                ));
            }
        }

        Ok(())
    }
}
