//! Tri-state observational knowledge
//!
//! Catalog data distinguishes "we looked and the answer is no" from "nobody
//! has looked yet". A nullable boolean conflates the two under a careless
//! comparison, so uncertain observations are a tagged variant instead.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// What is known about a yes/no property of an observed body
///
/// # Examples
/// ```
/// use scoring::Knowledge;
///
/// let confirmed = Knowledge::Known(true);
/// let ruled_out = Knowledge::Known(false);
/// let unobserved = Knowledge::Unknown;
///
/// assert!(confirmed.is_confirmed());
/// assert!(!ruled_out.is_confirmed());
/// assert!(!unobserved.is_confirmed());
///
/// // Only a measurement, either way, counts as determined
/// assert!(confirmed.is_determined());
/// assert!(ruled_out.is_determined());
/// assert!(!unobserved.is_determined());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum Knowledge {
    /// The property has been measured or confidently inferred
    Known(bool),

    /// No observation constrains the property
    #[default]
    Unknown,
}

impl Knowledge {
    /// True only when the property is known to hold
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Known(true))
    }

    /// True when the property has been measured at all, regardless of outcome
    ///
    /// Confidence scoring rewards determination, not the answer itself.
    pub fn is_determined(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl From<Option<bool>> for Knowledge {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(v) => Self::Known(v),
            None => Self::Unknown,
        }
    }
}
