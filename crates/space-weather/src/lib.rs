//! Space-weather impact scoring
//!
//! This crate assesses the downstream consequences of a coronal mass
//! ejection: how much damage satellites in orbit should expect, and how
//! likely and how severe a geomagnetic impact on Earth will be. Both
//! assessments follow the same shape as the habitability scorer: normalize
//! the event's kinematics into factors, combine them under fixed weights,
//! classify into an ordered risk tier, and annotate from static per-tier
//! content tables.
//!
//! Event records come from three places: the NASA DONKI CME analysis
//! catalog (see [`donki`]), seeded simulation (see [`simulation`]), or
//! direct construction.

pub mod donki;
pub mod earth_impact;
pub mod event;
pub mod flare_class;
pub mod satellite;
pub mod simulation;

// Re-export key types at crate root
pub use donki::{convert_analyses, CmeAnalysisRecord, DonkiConversionError};
pub use earth_impact::{predict_earth_impact, EarthImpactLevel, EarthImpactPrediction};
pub use event::{effects_from_speed, CmeEvent, CmeEventError, EventSource};
pub use flare_class::{FlareClass, FlareLetter};
pub use satellite::{predict_satellite_damage, SatelliteDamagePrediction, SatelliteRiskLevel};
pub use simulation::{demo_storm, simulate_event};

#[cfg(test)]
mod donki_test;
#[cfg(test)]
mod earth_impact_test;
#[cfg(test)]
mod flare_class_test;
#[cfg(test)]
mod simulation_test;
