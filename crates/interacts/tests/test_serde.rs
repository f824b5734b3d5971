//! Serialization of widget state (requires the `serde` feature).

#![cfg(feature = "serde")]

use interacts::prelude::*;

#[test]
fn test_slider_state_roundtrip() {
    let config = EscapeConfig::<f64>::builder()
        .radius(8.0)
        .max_iterations(250)
        .build()
        .unwrap();
    let rule = presets::rule_90();

    let json = serde_json::json!({ "escape": config, "rule": rule });
    assert_eq!(json["escape"]["max_iterations"], 250);
    assert_eq!(json["rule"], serde_json::json!([0, 1, 0, 1, 1, 0, 1, 0]));

    let back: EscapeConfig<f64> = serde_json::from_value(json["escape"].clone()).unwrap();
    assert_eq!(back, config);
    let back: RuleTable = serde_json::from_value(json["rule"].clone()).unwrap();
    assert_eq!(back, rule);
}

#[test]
fn test_outcome_serializes() {
    let outcome = escape_orbit_with_parameter(
        &MandelbrotMap,
        Complex::new(1.0f64, 1.0),
        &EscapeConfig::with_iterations(3),
    );
    let json = serde_json::to_value(outcome).unwrap();
    assert_eq!(json["steps"], 1);
    assert_eq!(json["escaped"], true);
    assert_eq!(json["value"], serde_json::json!([1.0, 3.0]));
}
