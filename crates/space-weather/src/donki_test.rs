//! Tests for DONKI catalog interop

use chrono::{TimeZone, Utc};

use crate::donki::{convert_analyses, CmeAnalysisRecord, DonkiConversionError};
use crate::event::EventSource;
use crate::flare_class::FlareLetter;

fn sample_record() -> CmeAnalysisRecord {
    CmeAnalysisRecord {
        time21_5: "2025-03-13T12:36Z".to_string(),
        latitude: -15.0,
        longitude: 120.0,
        half_angle: 35.0,
        speed: 1150.0,
        analysis_type: Some("C".to_string()),
        is_most_accurate: true,
        associated_cme_id: "2025-03-13T10:24:00-CME-001".to_string(),
        catalog: "M2M_CATALOG".to_string(),
        data_level: Some("0".to_string()),
        note: None,
        submission_time: None,
        link: None,
    }
}

// ========== Deserialization ==========

#[test]
fn test_deserialize_donki_payload() {
    let json = r#"{
        "time21_5": "2025-03-13T12:36Z",
        "latitude": -15.0,
        "longitude": 120.0,
        "halfAngle": 35.0,
        "speed": 1150.0,
        "type": "C",
        "isMostAccurate": true,
        "associatedCMEID": "2025-03-13T10:24:00-CME-001",
        "catalog": "M2M_CATALOG",
        "dataLevel": "0"
    }"#;

    let record: CmeAnalysisRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record, sample_record());
}

#[test]
fn test_deserialize_tolerates_missing_metadata() {
    let json = r#"{
        "time21_5": "2025-03-13T12:36Z",
        "latitude": 0.0,
        "longitude": 0.0,
        "halfAngle": 30.0,
        "speed": 600.0,
        "associatedCMEID": "CME-XYZ",
        "catalog": "M2M_CATALOG"
    }"#;

    let record: CmeAnalysisRecord = serde_json::from_str(json).unwrap();
    assert!(record.note.is_none());
    assert!(!record.is_most_accurate);
}

// ========== Timestamp parsing ==========

#[test]
fn test_timestamp_parses_donki_format() {
    let record = sample_record();
    assert_eq!(
        record.timestamp().unwrap(),
        Utc.with_ymd_and_hms(2025, 3, 13, 12, 36, 0).unwrap()
    );
}

#[test]
fn test_bad_timestamp_rejected() {
    let mut record = sample_record();
    record.time21_5 = "not a time".to_string();
    assert!(matches!(
        record.into_event(),
        Err(DonkiConversionError::BadTimestamp(_))
    ));
}

// ========== Conversion ==========

#[test]
fn test_conversion_derives_event_fields() {
    let event = sample_record().into_event().unwrap();

    assert_eq!(event.id, "2025-03-13T10:24:00-CME-001");
    assert_eq!(event.source, EventSource::Donki);
    assert_eq!(event.catalog.as_deref(), Some("M2M_CATALOG"));

    // Speed 1150 km/s: class M, intensity capped at 10, duration 115 min
    assert_eq!(event.flare_class.letter, FlareLetter::M);
    assert_eq!(event.flare_class.magnitude, None);
    assert_eq!(event.intensity, 10.0);
    assert_eq!(event.duration_minutes, 115);

    assert_eq!(event.region, "-15.0°, 120.0°");
    assert_eq!(event.cme_speed, Some(1150.0));
    assert_eq!(event.half_angle, Some(35.0));
    assert!(event.effects.contains(&"Power Grid Alert".to_string()));
    assert!(!event.effects.contains(&"Aurora Visible".to_string()));
}

#[test]
fn test_conversion_intensity_scales_below_cap() {
    let mut record = sample_record();
    record.speed = 650.0;

    let event = record.into_event().unwrap();
    assert_eq!(event.intensity, 6.5);
    assert_eq!(event.flare_class.letter, FlareLetter::C);
    assert_eq!(event.duration_minutes, 65);
}

#[test]
fn test_converted_event_passes_validation() {
    let event = sample_record().into_event().unwrap();
    assert!(event.validate().is_ok());
}

#[test]
fn test_negative_speed_rejected() {
    let mut record = sample_record();
    record.speed = -300.0;
    assert!(matches!(
        record.into_event(),
        Err(DonkiConversionError::BadSpeed(_))
    ));
}

#[test]
fn test_batch_conversion_preserves_order() {
    let mut slow = sample_record();
    slow.speed = 450.0;
    slow.associated_cme_id = "CME-SLOW".to_string();

    let events = convert_analyses(vec![sample_record(), slow]).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, "2025-03-13T10:24:00-CME-001");
    assert_eq!(events[1].id, "CME-SLOW");
}

#[test]
fn test_batch_conversion_fails_on_bad_record() {
    let mut bad = sample_record();
    bad.time21_5 = "garbage".to_string();

    assert!(convert_analyses(vec![sample_record(), bad]).is_err());
}
