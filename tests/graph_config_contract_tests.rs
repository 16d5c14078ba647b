use chart_bridge::BridgeError;
use chart_bridge::api::{GRAPH_CONFIG_JSON_SCHEMA_V1, GraphConfig};
use chart_bridge::core::Dimension;
use serde_json::json;

#[test]
fn missing_options_take_declared_defaults() {
    let config = GraphConfig::from_json_str(r#"{"id":"graph"}"#).expect("parse");
    assert_eq!(config.id, "graph");
    assert!(!config.bind_click);
    assert!(!config.bind_hover);
    assert!(config.data.is_empty());
    assert!(config.layout.is_empty());
    assert_eq!(config.height, Dimension::css("600px"));
    assert_eq!(config.width, Dimension::css("100%"));
}

#[test]
fn camel_case_options_and_numeric_dimensions_parse() {
    let config = GraphConfig::from_json_str(
        r#"{"id":"g","bindClick":true,"bindHover":true,"height":400,"width":"50%",
            "data":[{"type":"bar","y":[1,2]}],"layout":{"title":"t"}}"#,
    )
    .expect("parse");
    assert!(config.bind_click && config.bind_hover);
    assert_eq!(config.height, Dimension::Pixels(400.0));
    assert_eq!(config.height.to_css(), "400px");
    assert_eq!(config.data, vec![json!({ "type": "bar", "y": [1, 2] })]);
    assert_eq!(config.layout.get("title"), Some(&json!("t")));
}

#[test]
fn null_data_and_layout_mean_empty() {
    let config =
        GraphConfig::from_json_str(r#"{"id":"g","data":null,"layout":null}"#).expect("parse");
    assert!(config.spec().is_empty());
}

#[test]
fn blank_id_is_rejected() {
    let err = GraphConfig::from_json_str(r#"{"bindClick":true}"#).expect_err("id required");
    assert!(matches!(err, BridgeError::InvalidConfig(_)));
}

#[test]
fn malformed_json_is_invalid_data() {
    let err = GraphConfig::from_json_str(r#"{"id":"#).expect_err("malformed");
    assert!(matches!(err, BridgeError::InvalidData(_)));
    let err = GraphConfig::from_json_str(r#"{"id":"g","data":{}}"#).expect_err("wrong shape");
    assert!(matches!(err, BridgeError::InvalidData(_)));
}

#[test]
fn versioned_contract_round_trips() {
    let config = GraphConfig::new("graph")
        .with_bind_click(true)
        .with_size(640u32, "480px");
    let json = config.to_json_contract_v1_pretty().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("json");
    assert_eq!(value["schema_version"], json!(GRAPH_CONFIG_JSON_SCHEMA_V1));
    assert_eq!(value["config"]["bindClick"], json!(true));

    let parsed = GraphConfig::from_json_str(&json).expect("parse contract");
    assert_eq!(parsed, config);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let err = GraphConfig::from_json_str(r#"{"schema_version":2,"config":{"id":"g"}}"#)
        .expect_err("unsupported version");
    assert!(matches!(err, BridgeError::InvalidData(_)));
}
