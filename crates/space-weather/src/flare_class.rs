//! Solar flare classification
//!
//! Flares are classified by peak X-ray flux into five letter classes, each
//! ten times more powerful than the last, with an optional decimal
//! magnitude refining the position within a class ("X8.5" is an X-class
//! flare at 8.5).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Letter class of a solar flare, ordered weakest to strongest
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum FlareLetter {
    /// Background-level flux
    A,
    /// Small flare, no Earth effects
    B,
    /// Small flare, minor effects
    C,
    /// Medium flare, brief radio blackouts
    M,
    /// Major flare, planet-wide effects possible
    X,
}

impl FlareLetter {
    /// All letters, weakest first
    pub const ALL: [Self; 5] = [Self::A, Self::B, Self::C, Self::M, Self::X];

    /// Infer a letter class from CME speed in km/s
    ///
    /// Catalog CME analyses carry no flare class of their own; the speed
    /// ladder (>1000 M, >500 C, else B) is the conventional stand-in.
    pub fn from_speed(speed_km_s: f64) -> Self {
        match speed_km_s {
            s if s > 1000.0 => Self::M,
            s if s > 500.0 => Self::C,
            _ => Self::B,
        }
    }

    /// Peak flux relative to an A-class flare (each letter is 10x)
    pub fn relative_power(&self) -> f64 {
        match self {
            Self::A => 1.0,
            Self::B => 10.0,
            Self::C => 100.0,
            Self::M => 1000.0,
            Self::X => 10000.0,
        }
    }

    /// Single-letter name
    pub fn name(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::M => "M",
            Self::X => "X",
        }
    }
}

impl fmt::Display for FlareLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Why a flare class string could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlareClassParseError {
    /// The string was empty
    #[error("flare class string is empty")]
    Empty,

    /// The leading letter was not one of A, B, C, M, X
    #[error("unknown flare letter `{0}`")]
    UnknownLetter(char),

    /// The magnitude suffix was not a number
    #[error("invalid flare magnitude `{0}`")]
    InvalidMagnitude(String),
}

/// A full flare classification: letter plus optional magnitude
///
/// # Examples
/// ```
/// use space_weather::{FlareClass, FlareLetter};
///
/// let class: FlareClass = "X8.5".parse().unwrap();
/// assert_eq!(class.letter, FlareLetter::X);
/// assert_eq!(class.magnitude, Some(8.5));
/// assert_eq!(class.to_string(), "X8.5");
///
/// let bare: FlareClass = "M".parse().unwrap();
/// assert_eq!(bare.magnitude, None);
/// assert_eq!(bare.to_string(), "M");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct FlareClass {
    /// Letter class
    pub letter: FlareLetter,
    /// Decimal refinement within the class, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<f64>,
}

impl FlareClass {
    /// Construct from a letter with no magnitude
    pub fn bare(letter: FlareLetter) -> Self {
        Self {
            letter,
            magnitude: None,
        }
    }

    /// Construct from a letter and magnitude
    pub fn new(letter: FlareLetter, magnitude: f64) -> Self {
        Self {
            letter,
            magnitude: Some(magnitude),
        }
    }

    /// Peak flux relative to an A1.0 flare
    pub fn relative_power(&self) -> f64 {
        self.letter.relative_power() * self.magnitude.unwrap_or(1.0)
    }
}

impl FromStr for FlareClass {
    type Err = FlareClassParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let first = chars.next().ok_or(FlareClassParseError::Empty)?;

        let letter = match first.to_ascii_uppercase() {
            'A' => FlareLetter::A,
            'B' => FlareLetter::B,
            'C' => FlareLetter::C,
            'M' => FlareLetter::M,
            'X' => FlareLetter::X,
            other => return Err(FlareClassParseError::UnknownLetter(other)),
        };

        let rest = chars.as_str().trim();
        if rest.is_empty() {
            return Ok(Self::bare(letter));
        }

        let magnitude = rest
            .parse::<f64>()
            .map_err(|_| FlareClassParseError::InvalidMagnitude(rest.to_string()))?;
        Ok(Self::new(letter, magnitude))
    }
}

impl fmt::Display for FlareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.magnitude {
            Some(magnitude) => write!(f, "{}{}", self.letter, magnitude),
            None => write!(f, "{}", self.letter),
        }
    }
}
