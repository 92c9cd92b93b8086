//! Exoplanet habitability scoring
//!
//! This crate assesses how hospitable an exoplanet might be from its
//! physical, orbital, and stellar parameters. The pipeline is: normalize
//! inputs into six named sub-scores, combine them under fixed weights into
//! an overall score, classify the result into a habitability tier, and
//! annotate it with human-readable reasons, risks, and derived predictions
//! (Earth similarity, biosignature potential, mission feasibility).
//!
//! All scoring is pure and synchronous; a `PlanetRecord` goes in and a
//! fully-populated `HabitabilityPrediction` comes out, with no shared state
//! between calls.

pub mod catalog;
pub mod planet;
pub mod prediction;
pub mod score;
pub mod validation;

// Re-export key types at crate root
pub use planet::{DiscoveryMethod, PlanetRecord};
pub use prediction::{predict_habitability, HabitabilityPrediction, MissionFeasibility};
pub use score::{habitable_zone, HabitabilityClass, HabitabilityScore, HabitableZone};
pub use validation::PlanetRecordError;
