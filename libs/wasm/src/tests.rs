//! Tests for the WASM-facing preview helpers.

use super::*;
use serde_json::Value;

fn parse(json: &str) -> Value {
    serde_json::from_str(json).expect("helpers emit valid JSON")
}

/// A single block serializes as split coordinate and index columns.
#[test]
fn preview_3d_block_buffers() {
    let json = preview_3d_internal("BLOCK 1, 1, 1", "{}", 500).expect("valid parameters");
    let value = parse(&json);

    let mesh = &value["meshes"][0];
    assert_eq!(mesh["name"], "BLOCK");
    assert_eq!(mesh["x"].as_array().unwrap().len(), 8);
    assert_eq!(mesh["i"].as_array().unwrap().len(), 12);
    assert_eq!(value["wires"].as_array().unwrap().len(), 12);
    assert_eq!(value["warnings"], Value::Array(vec![]));
}

/// Parameters from the editor seed script variables.
#[test]
fn preview_2d_uses_parameters() {
    let json = preview_2d_internal("CIRCLE2 0, 0, R", r#"{"r": 2.5}"#, 500).unwrap();
    let value = parse(&json);
    assert_eq!(value["circles"][0]["radius"], 2.5);
}

/// Malformed parameter JSON is a caller error, not a warning.
#[test]
fn rejects_malformed_parameters() {
    let err = preview_2d_internal("LINE2 0, 0, 1, 1", "{not json", 500).unwrap_err();
    assert!(matches!(err, PreviewError::Parameters(_)));
    assert!(err.to_string().starts_with("invalid parameters"));

    assert!(preview_3d_internal("", "[1, 2]", 500).is_err());
    assert!(preview_3d_internal("", r#"{"a": {"b": 1}}"#, 500).is_err());
}

/// Script problems come back inside the JSON.
#[test]
fn script_warnings_are_serialized() {
    let json = preview_3d_internal("FOOBAR 1, 2, 3", "", 500).unwrap();
    let value = parse(&json);
    assert_eq!(value["warnings"][0], "line 1: unsupported command FOOBAR, skipped");
}

/// The combined helper merges warnings, 2D first.
#[test]
fn preview_both_merges_warnings() {
    let json = preview_both_internal("X2", "X3", "{}", 500).unwrap();
    let value = parse(&json);
    assert_eq!(
        value["warnings"],
        serde_json::json!([
            "line 1: unsupported command X2, skipped",
            "line 1: unsupported command X3, skipped"
        ])
    );
    assert!(value["preview_2d"].is_object());
    assert!(value["preview_3d"].is_object());
}

/// A limit below one is clamped instead of rejected.
#[test]
fn clamps_limit() {
    let json = preview_3d_internal("FOR i = 1 TO 2\nNEXT i", "{}", 0).unwrap();
    assert!(json.contains("exceeded limit 1"));
}

#[test]
fn default_limit_matches_config() {
    assert_eq!(default_for_limit(), 500);
}
