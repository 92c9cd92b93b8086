//! Explicit value ranges for uncertain outputs
//!
//! Tier lookup tables express confidence and severity as a range rather than
//! a point estimate. The range is the output; callers decide whether to
//! display the bounds, take the midpoint, or draw a seeded sample. Keeping
//! the random draw out of the scoring functions keeps them pure and makes
//! identical inputs produce identical outputs.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// An inclusive numeric range communicating uncertainty
///
/// Invariant: `low <= high`. Constructed only through [`ValueRange::new`],
/// which normalizes inverted bounds.
///
/// # Examples
/// ```
/// use scoring::ValueRange;
///
/// let confidence = ValueRange::new(85.0, 95.0);
/// assert_eq!(confidence.midpoint(), 90.0);
/// assert!(confidence.contains(88.0));
/// assert!(!confidence.contains(96.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ValueRange {
    /// Inclusive lower bound
    pub low: f64,
    /// Inclusive upper bound
    pub high: f64,
}

impl ValueRange {
    /// Create a range, swapping bounds if given in the wrong order
    pub fn new(low: f64, high: f64) -> Self {
        if low <= high {
            Self { low, high }
        } else {
            Self {
                low: high,
                high: low,
            }
        }
    }

    /// The midpoint of the range
    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// The width of the range
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Whether a value falls inside the range (inclusive)
    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }

    /// Draw a uniform sample from the range
    ///
    /// The caller supplies the generator, which keeps concurrent scoring
    /// calls stream-isolated.
    pub fn sample(&self, rng: &mut impl Rng) -> f64 {
        if self.width() == 0.0 {
            return self.low;
        }
        rng.random_range(self.low..=self.high)
    }
}

impl std::fmt::Display for ValueRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}
