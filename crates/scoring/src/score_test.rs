//! Tests for the score space helpers

use approx::assert_relative_eq;

use crate::score::{clamp_score, weighted_sum, SCORE_MAX, SCORE_MIN};

#[test]
fn test_clamp_passes_through_in_range() {
    assert_eq!(clamp_score(0.0), 0.0);
    assert_eq!(clamp_score(50.0), 50.0);
    assert_eq!(clamp_score(100.0), 100.0);
}

#[test]
fn test_clamp_negative() {
    assert_eq!(clamp_score(-0.001), SCORE_MIN);
    assert_eq!(clamp_score(-500.0), SCORE_MIN);
}

#[test]
fn test_clamp_above_max() {
    assert_eq!(clamp_score(100.001), SCORE_MAX);
    assert_eq!(clamp_score(1e9), SCORE_MAX);
}

#[test]
fn test_weighted_sum_convex_combination() {
    // Weights sum to 1.0, so the result stays between min and max input
    let pairs = [(100.0, 0.25), (40.0, 0.25), (60.0, 0.5)];
    assert_relative_eq!(weighted_sum(&pairs), 65.0);
}

#[test]
fn test_weighted_sum_all_max() {
    let pairs = [(100.0, 0.6), (100.0, 0.4)];
    assert_relative_eq!(weighted_sum(&pairs), 100.0);
}

#[test]
fn test_weighted_sum_clamps_drift() {
    // Slightly over-unity weights must not escape the score space
    let pairs = [(100.0, 0.7), (100.0, 0.31)];
    assert_eq!(weighted_sum(&pairs), 100.0);
}
