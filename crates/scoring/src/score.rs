//! The 0-100 score space
//!
//! Every sub-score and overall score produced by the scorers lives in the
//! closed interval [0, 100]. Keeping the clamp in one place makes the
//! interval invariant auditable.

/// Lower bound of the score space
pub const SCORE_MIN: f64 = 0.0;

/// Upper bound of the score space
pub const SCORE_MAX: f64 = 100.0;

/// Clamp a raw score into the [0, 100] score space
///
/// Raw sub-score formulas can run negative (distance penalties) or above 100
/// (never in practice, but the clamp makes the invariant unconditional).
///
/// # Examples
/// ```
/// use scoring::clamp_score;
///
/// assert_eq!(clamp_score(42.5), 42.5);
/// assert_eq!(clamp_score(-3.0), 0.0);
/// assert_eq!(clamp_score(140.0), 100.0);
/// ```
pub fn clamp_score(raw: f64) -> f64 {
    raw.clamp(SCORE_MIN, SCORE_MAX)
}

/// Combine named sub-scores under fixed weights
///
/// Returns the convex combination `Σ weight_i · score_i`. Callers are
/// responsible for weights summing to 1.0; the result is clamped so the
/// [0, 100] invariant holds even under small floating-point drift.
pub fn weighted_sum(pairs: &[(f64, f64)]) -> f64 {
    let sum = pairs
        .iter()
        .map(|(score, weight)| score * weight)
        .sum::<f64>();
    clamp_score(sum)
}
