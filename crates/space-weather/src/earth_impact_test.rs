//! Tests for Earth impact prediction

use approx::assert_relative_eq;
use chrono::{TimeZone, Utc};

use crate::earth_impact::{
    predict_earth_impact, travel_time_s, EarthImpactLevel, RECOMMENDATIONS,
};
use crate::event::{CmeEvent, EventSource};
use crate::flare_class::{FlareClass, FlareLetter};
use crate::simulation::demo_storm;

fn event_with(speed: f64, intensity: f64, latitude: f64) -> CmeEvent {
    CmeEvent {
        id: "TEST-EARTH".to_string(),
        associated_cme_id: None,
        catalog: None,
        flare_class: FlareClass::bare(FlareLetter::from_speed(speed)),
        intensity,
        timestamp: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        latitude,
        longitude: 0.0,
        half_angle: Some(45.0),
        cme_speed: Some(speed),
        region: "AR1000".to_string(),
        duration_minutes: 60,
        effects: vec![],
        source: EventSource::Simulation,
    }
}

// ========== Travel time ==========

#[test]
fn test_travel_time_at_1000_km_s() {
    // 1.496e11 m / 1e6 m/s = 149600 s, about 41.6 hours
    let seconds = travel_time_s(1000.0).unwrap();
    assert_relative_eq!(seconds, 149_600.0, epsilon = 1e-6);
}

#[test]
fn test_travel_time_undefined_at_zero_speed() {
    assert!(travel_time_s(0.0).is_none());
    assert!(travel_time_s(-100.0).is_none());
}

#[test]
fn test_arrival_time_follows_timestamp() {
    let event = event_with(1000.0, 5.0, 0.0);
    let prediction = predict_earth_impact(&event);

    let arrival = prediction.arrival_time.unwrap();
    let elapsed = arrival - event.timestamp;
    assert_eq!(elapsed.num_seconds(), 149_600);
}

#[test]
fn test_faster_cme_arrives_sooner() {
    let slow = predict_earth_impact(&event_with(500.0, 5.0, 0.0));
    let fast = predict_earth_impact(&event_with(1500.0, 5.0, 0.0));
    assert!(fast.arrival_time.unwrap() < slow.arrival_time.unwrap());
}

// ========== Impact probability ==========

#[test]
fn test_probability_saturates_at_100() {
    // Head-on, fast, maximum intensity: every factor at its ceiling
    let prediction = predict_earth_impact(&event_with(3000.0, 10.0, 0.0));
    assert_eq!(prediction.impact_probability, 100.0);
}

#[test]
fn test_probability_monotonic_in_speed_and_intensity() {
    let base = predict_earth_impact(&event_with(800.0, 5.0, 20.0));
    let faster = predict_earth_impact(&event_with(1200.0, 5.0, 20.0));
    let stronger = predict_earth_impact(&event_with(800.0, 8.0, 20.0));

    assert!(faster.impact_probability > base.impact_probability);
    assert!(stronger.impact_probability > base.impact_probability);
}

#[test]
fn test_probability_drops_away_from_ecliptic() {
    let head_on = predict_earth_impact(&event_with(800.0, 5.0, 0.0));
    let oblique = predict_earth_impact(&event_with(800.0, 5.0, 60.0));
    let polar = predict_earth_impact(&event_with(800.0, 5.0, 90.0));

    assert!(head_on.impact_probability > oblique.impact_probability);
    assert!(oblique.impact_probability > polar.impact_probability);
}

#[test]
fn test_direction_factor_symmetric_in_latitude() {
    let north = predict_earth_impact(&event_with(800.0, 5.0, 30.0));
    let south = predict_earth_impact(&event_with(800.0, 5.0, -30.0));
    assert_relative_eq!(
        north.impact_probability,
        south.impact_probability,
        epsilon = 1e-12
    );
}

// ========== Compound tier classification ==========

#[test]
fn test_extreme_needs_both_probability_and_speed() {
    assert_eq!(
        EarthImpactLevel::classify(80.0, 1200.0),
        EarthImpactLevel::Extreme
    );
    // High probability but slow: capped at High
    assert_eq!(
        EarthImpactLevel::classify(80.0, 900.0),
        EarthImpactLevel::High
    );
    // Fast but unlikely to hit: no more than Moderate
    assert_eq!(
        EarthImpactLevel::classify(40.0, 1500.0),
        EarthImpactLevel::Moderate
    );
}

#[test]
fn test_tier_boundaries_are_strict() {
    assert_eq!(
        EarthImpactLevel::classify(75.0, 1200.0),
        EarthImpactLevel::High
    );
    assert_eq!(
        EarthImpactLevel::classify(80.0, 1000.0),
        EarthImpactLevel::High
    );
    assert_eq!(
        EarthImpactLevel::classify(50.0, 800.0),
        EarthImpactLevel::Moderate
    );
    assert_eq!(
        EarthImpactLevel::classify(25.0, 500.0),
        EarthImpactLevel::Low
    );
}

#[test]
fn test_tiers_ordered() {
    assert!(EarthImpactLevel::Low < EarthImpactLevel::Moderate);
    assert!(EarthImpactLevel::Moderate < EarthImpactLevel::High);
    assert!(EarthImpactLevel::High < EarthImpactLevel::Extreme);
}

// ========== Pinned scenarios ==========

#[test]
fn test_demo_storm_is_high() {
    // direction (1 - 15/90) * 0.4 + speed (1200/2000) * 0.4
    // + intensity 0.85 * 0.2 = 0.7433 -> 74.3%, speed 1200 -> High
    let prediction = predict_earth_impact(&demo_storm());

    assert_relative_eq!(prediction.impact_probability, 74.333333, epsilon = 1e-4);
    assert_eq!(prediction.risk_level, EarthImpactLevel::High);
    assert_eq!(prediction.severity.low, 6.0);
    assert_eq!(prediction.severity.high, 8.0);
    assert_eq!(prediction.duration, "6-24 hours");
    assert!(prediction
        .affected_regions
        .contains(&"Northern Europe".to_string()));
}

#[test]
fn test_quiet_sun_is_low() {
    let prediction = predict_earth_impact(&event_with(200.0, 1.0, 60.0));

    // (1/3) * 0.4 + 0.1 * 0.4 + 0.1 * 0.2 = 0.1933 -> 19.3%
    assert_relative_eq!(prediction.impact_probability, 19.333333, epsilon = 1e-4);
    assert_eq!(prediction.risk_level, EarthImpactLevel::Low);
    assert_eq!(prediction.severity.low, 1.0);
    assert_eq!(prediction.severity.high, 3.0);
    assert_eq!(prediction.affected_regions, vec!["Minimal Surface Impact"]);
}

#[test]
fn test_recommendations_always_included() {
    let prediction = predict_earth_impact(&event_with(200.0, 1.0, 60.0));
    assert_eq!(prediction.recommendations.len(), RECOMMENDATIONS.len());
    assert!(prediction
        .recommendations
        .contains(&"Monitor space weather alerts".to_string()));
}

#[test]
fn test_prediction_is_deterministic() {
    let event = event_with(900.0, 7.0, 10.0);
    assert_eq!(predict_earth_impact(&event), predict_earth_impact(&event));
}
