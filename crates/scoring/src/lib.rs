//! Shared scoring primitives
//!
//! This crate provides the small vocabulary of types used by the habitability
//! and space-weather scorers: a clamped 0-100 score space, a tri-state
//! representation of uncertain observations, and explicit value ranges for
//! uncertain outputs.

pub mod knowledge;
pub mod range;
pub mod score;

// Re-export key types at crate root
pub use knowledge::Knowledge;
pub use range::ValueRange;
pub use score::{clamp_score, weighted_sum, SCORE_MAX, SCORE_MIN};

#[cfg(test)]
mod knowledge_test;
#[cfg(test)]
mod score_test;
