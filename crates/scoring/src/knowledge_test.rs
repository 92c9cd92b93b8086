//! Tests for tri-state knowledge

use crate::knowledge::Knowledge;

#[test]
fn test_confirmed_only_for_known_true() {
    assert!(Knowledge::Known(true).is_confirmed());
    assert!(!Knowledge::Known(false).is_confirmed());
    assert!(!Knowledge::Unknown.is_confirmed());
}

#[test]
fn test_determined_for_both_known_variants() {
    assert!(Knowledge::Known(true).is_determined());
    assert!(Knowledge::Known(false).is_determined());
    assert!(!Knowledge::Unknown.is_determined());
}

#[test]
fn test_known_false_is_not_unknown() {
    // The whole point of the tagged variant: a negative measurement and a
    // missing measurement are different values
    assert_ne!(Knowledge::Known(false), Knowledge::Unknown);
}

#[test]
fn test_default_is_unknown() {
    assert_eq!(Knowledge::default(), Knowledge::Unknown);
}

#[test]
fn test_from_option() {
    assert_eq!(Knowledge::from(Some(true)), Knowledge::Known(true));
    assert_eq!(Knowledge::from(Some(false)), Knowledge::Known(false));
    assert_eq!(Knowledge::from(None), Knowledge::Unknown);
}

#[test]
fn test_serde_round_trip() {
    let json = serde_json::to_string(&Knowledge::Known(true)).unwrap();
    let back: Knowledge = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Knowledge::Known(true));

    let json = serde_json::to_string(&Knowledge::Unknown).unwrap();
    let back: Knowledge = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Knowledge::Unknown);
}
