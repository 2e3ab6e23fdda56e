//! Traces and configs survive a trip through JSON.

use std::time::Duration;

use integration_tests::sample_trace;
use serde_json::json;
use sift_core::{Phase, Trace};
use sift_playback::Config;
use sift_search::AlgorithmKind;

#[test]
fn trace_round_trips() {
    let trace = sample_trace(AlgorithmKind::Exponential, 11);

    let text = serde_json::to_string(&trace).expect("trace should serialize");
    let back: Trace = serde_json::from_str(&text).expect("trace should deserialize");

    assert_eq!(back, trace);
}

#[test]
fn phases_serialize_in_snake_case() {
    let trace = sample_trace(AlgorithmKind::Jump, 70);
    let value = serde_json::to_value(&trace).expect("trace should serialize");

    assert_eq!(value["target"], json!(70));
    assert_eq!(value["steps"][0]["phase"], json!("jump"));
    assert_eq!(value["steps"][5]["matched"], json!(true));
    assert_eq!(
        serde_json::to_value(Phase::Expand).expect("phase should serialize"),
        json!("expand")
    );
}

#[test]
fn algorithm_kind_uses_snake_case() {
    let kind: AlgorithmKind =
        serde_json::from_value(json!("interpolation")).expect("kind should deserialize");
    assert_eq!(kind, AlgorithmKind::Interpolation);
}

#[test]
fn config_uses_milliseconds() {
    let config = Config::new(Duration::from_millis(500)).expect("nonzero cadence");

    assert_eq!(
        serde_json::to_value(config).expect("config should serialize"),
        json!({ "cadence_ms": 500 })
    );

    let back: Config =
        serde_json::from_value(json!({ "cadence_ms": 1000 })).expect("config should deserialize");
    assert_eq!(back.cadence(), Duration::from_secs(1));
}

#[test]
fn config_rejects_zero_cadence() {
    let error = serde_json::from_value::<Config>(json!({ "cadence_ms": 0 }))
        .expect_err("zero cadence should be rejected");

    assert!(error.to_string().contains("cadence must be greater than zero"));
}

#[test]
fn tampered_trace_is_rejected() {
    let trace = sample_trace(AlgorithmKind::Binary, 50);
    let mut value = serde_json::to_value(&trace).expect("trace should serialize");

    value["steps"][0]["matched"] = json!(true);
    let error = serde_json::from_value::<Trace>(value.clone())
        .expect_err("early match should be rejected");
    assert!(error.to_string().contains("step 0 matched but is not the last step"));

    value["steps"][0]["matched"] = json!(false);
    value["len"] = json!(3);
    let error = serde_json::from_value::<Trace>(value)
        .expect_err("short sequence should be rejected");
    assert!(error.to_string().contains("outside a sequence of 3"));
}

#[test]
fn exponential_markers_stay_in_bounds() {
    let kind = AlgorithmKind::Exponential;
    for target in 0..=16 {
        let trace = sample_trace(kind, target);
        let text = serde_json::to_string(&trace).expect("trace should serialize");
        let back: Trace = serde_json::from_str(&text).expect("generated traces are valid");
        assert_eq!(back, trace, "target {target}");
    }
}
