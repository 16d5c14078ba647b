use std::cell::RefCell;
use std::rc::Rc;

use chart_bridge::api::{GraphBridge, GraphConfig, GraphProps, RebuildReason, UpdateOutcome};
use chart_bridge::core::ChartSpec;
use chart_bridge::engine::{RecordedCall, RecordingEngine};
use chart_bridge::interaction::{InteractionKind, PartialState, RawInteractionEvent};
use serde_json::json;

fn spec(data: serde_json::Value, layout: serde_json::Value) -> ChartSpec {
    ChartSpec::from_values(data, layout).expect("valid spec")
}

#[test]
fn bridge_smoke_flow() {
    let engine = RecordingEngine::new();
    let received = Rc::new(RefCell::new(Vec::<PartialState>::new()));
    let sink = Rc::clone(&received);

    let initial = spec(json!([{ "x": [1, 2], "y": [3, 4] }]), json!({}));
    let config = GraphConfig::new("graph")
        .with_spec(initial.clone())
        .with_bind_click(true);
    let mut bridge = GraphBridge::new(engine.clone());
    bridge
        .attach(GraphProps::new(config, move |state: PartialState| {
            sink.borrow_mut().push(state)
        }))
        .expect("attach");
    assert_eq!(engine.create_count(), 1);
    assert!(engine.has_instance("graph"));

    let outcome = bridge.receive_update(initial).expect("identical update");
    assert_eq!(outcome, UpdateOutcome::Unchanged);
    assert_eq!(engine.create_count(), 1);
    assert_eq!(engine.destroy_count(), 0);

    let next = spec(json!([{ "x": [1, 2], "y": [5, 4] }]), json!({}));
    let outcome = bridge.receive_update(next.clone()).expect("data update");
    assert_eq!(outcome, UpdateOutcome::Rebuilt(RebuildReason::Data));
    assert_eq!(engine.create_count(), 2);
    let last_create = engine
        .calls()
        .into_iter()
        .rev()
        .find(|call| matches!(call, RecordedCall::Create { .. }))
        .expect("rebuild create call");
    assert_eq!(
        last_create,
        RecordedCall::Create {
            container_id: "graph".to_owned(),
            data: next.data.clone(),
            layout: next.layout.clone(),
        }
    );

    let event = RawInteractionEvent::from_value(json!({
        "points": [{ "x": 1, "y": 5, "curveNumber": 0, "pointNumber": 0, "fullData": {} }]
    }))
    .expect("raw event");
    assert_eq!(engine.emit("graph", InteractionKind::Click, &event), 1);
    assert_eq!(received.borrow().len(), 1);

    bridge.detach().expect("detach");
    assert_eq!(engine.live_listener_count(), 0);
    assert_eq!(engine.on_count(), engine.off_count());
}

#[cfg(not(feature = "telemetry"))]
#[test]
fn default_tracing_is_opt_in() {
    assert!(!chart_bridge::telemetry::init_default_tracing());
}
