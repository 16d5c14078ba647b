use chart_bridge::api::{ChangeGate, SpecChanges};
use chart_bridge::core::ChartSpec;
use serde_json::json;

fn spec(data: serde_json::Value, layout: serde_json::Value) -> ChartSpec {
    ChartSpec::from_values(data, layout).expect("valid spec")
}

#[test]
fn separately_built_identical_specs_are_unchanged() {
    let a = spec(json!([{ "x": [1, 2], "y": [3, 4] }]), json!({ "title": "t" }));
    let b = spec(json!([{ "x": [1, 2], "y": [3, 4] }]), json!({ "title": "t" }));
    assert!(!ChangeGate::changed(&a, &b));
}

#[test]
fn mapping_key_order_is_ignored() {
    let a: ChartSpec =
        serde_json::from_str(r#"{"data":[{"x":[1],"y":[2]}],"layout":{"a":1,"b":{"c":2,"d":3}}}"#)
            .expect("spec a");
    let b: ChartSpec =
        serde_json::from_str(r#"{"data":[{"y":[2],"x":[1]}],"layout":{"b":{"d":3,"c":2},"a":1}}"#)
            .expect("spec b");
    assert_eq!(ChangeGate::compare(&a, &b), SpecChanges::default());
}

#[test]
fn sequence_order_is_significant() {
    let a = spec(json!([{ "name": "a" }, { "name": "b" }]), json!({}));
    let b = spec(json!([{ "name": "b" }, { "name": "a" }]), json!({}));
    assert!(ChangeGate::data_changed(&a, &b));

    let a = spec(json!([{ "y": [3, 4] }]), json!({}));
    let b = spec(json!([{ "y": [4, 3] }]), json!({}));
    assert!(ChangeGate::changed(&a, &b));
}

#[test]
fn deeply_nested_difference_is_detected() {
    let a = spec(json!([]), json!({ "xaxis": { "range": [0, 10], "tick": { "len": 5 } } }));
    let b = spec(json!([]), json!({ "xaxis": { "range": [0, 10], "tick": { "len": 6 } } }));
    let changes = ChangeGate::compare(&a, &b);
    assert!(changes.layout);
    assert!(!changes.data);
}

#[test]
fn extra_or_missing_keys_are_changes() {
    let a = spec(json!([]), json!({ "title": "t" }));
    let b = spec(json!([]), json!({ "title": "t", "showlegend": false }));
    assert!(ChangeGate::layout_changed(&a, &b));
    assert!(ChangeGate::layout_changed(&b, &a));
}

#[test]
fn explicit_null_differs_from_missing_key() {
    let a = spec(json!([{ "marker": null }]), json!({}));
    let b = spec(json!([{}]), json!({}));
    assert!(ChangeGate::changed(&a, &b));
}

#[test]
fn null_spec_halves_equal_empty_ones() {
    let from_nulls = spec(json!(null), json!(null));
    assert!(!ChangeGate::changed(&from_nulls, &ChartSpec::default()));
}
