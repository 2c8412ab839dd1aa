#![allow(clippy::unwrap_used)]

// Integration tests: drive a NodeStore with model events as they arrive
// from the topology feed, and render labels under the display toggles.

use forcetopo_core::{
    Applied, CoreError, DisplayToggles, HostLabelToggle, LabelToggle, ModelEvent, NodeStore,
    NodeType, node_label,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn event(value: serde_json::Value) -> ModelEvent {
    serde_json::from_value(value).unwrap()
}

fn device_added(id: &str, name: &str) -> ModelEvent {
    event(json!({
        "type": "DEVICE_ADDED_OR_UPDATED",
        "memo": "added",
        "subject": id,
        "data": {
            "type": "switch",
            "online": true,
            "layer": "pkt",
            "props": { "name": name }
        }
    }))
}

fn host_added(id: &str, ip: &str) -> ModelEvent {
    event(json!({
        "type": "HOST_ADDED_OR_UPDATED",
        "memo": "added",
        "subject": id,
        "data": { "ips": [ip], "configured": false, "props": { "name": "" } }
    }))
}

#[test]
fn device_lifecycle() {
    let mut store = NodeStore::new();

    let applied = store.apply(device_added("of:0000000000000001", "leaf-1")).unwrap();
    assert_eq!(applied, Applied::Added);

    store.get_mut("of:0000000000000001").unwrap().pin(120.0, 80.0);

    let update = event(json!({
        "type": "DEVICE_ADDED_OR_UPDATED",
        "memo": "updated",
        "subject": "of:0000000000000001",
        "data": { "type": "switch", "online": false, "props": { "name": "leaf-1" } }
    }));
    assert_eq!(store.apply(update).unwrap(), Applied::Updated);

    let node = store.get("of:0000000000000001").unwrap();
    assert!(!node.as_device().unwrap().online);
    assert_eq!((node.fx, node.fy), (Some(120.0), Some(80.0)));

    let removal = event(json!({
        "type": "DEVICE_REMOVED",
        "memo": "removed",
        "subject": "of:0000000000000001"
    }));
    assert_eq!(store.apply(removal).unwrap(), Applied::Removed);
    assert!(store.is_empty());
}

#[test]
fn removing_unknown_host_fails() {
    let mut store = NodeStore::new();
    let removal = event(json!({
        "type": "HOST_REMOVED",
        "memo": "removed",
        "subject": "00:00:00:00:00:09/None"
    }));
    let err = store.apply(removal).unwrap_err();
    assert!(matches!(err, CoreError::NodeNotFound { ref id } if id == "00:00:00:00:00:09/None"));
}

#[test]
fn host_removal_does_not_touch_devices() {
    let mut store = NodeStore::new();
    store.apply(device_added("of:1", "spine")).unwrap();
    let removal = event(json!({ "type": "HOST_REMOVED", "memo": "removed", "subject": "of:1" }));
    let err = store.apply(removal).unwrap_err();
    assert!(matches!(
        err,
        CoreError::NodeTypeMismatch {
            expected: NodeType::Host,
            found: NodeType::Device,
            ..
        }
    ));
    assert!(store.contains("of:1"));
}

#[test]
fn link_events_are_ignored() {
    let mut store = NodeStore::new();
    let link = event(json!({
        "type": "LINK_ADDED_OR_UPDATED",
        "memo": "added",
        "subject": "of:1/2-of:2/1",
        "data": { "online": true }
    }));
    assert_eq!(store.apply(link).unwrap(), Applied::Ignored);
    assert_eq!(store.version(), 0);
}

#[test]
fn malformed_payload_is_a_deserialization_error() {
    let mut store = NodeStore::new();
    let bad = event(json!({
        "type": "HOST_ADDED_OR_UPDATED",
        "memo": "added",
        "subject": "00:00:00:00:00:01/None",
        "data": { "ips": "10.0.0.1" }
    }));
    assert!(matches!(
        store.apply(bad),
        Err(CoreError::Deserialization { .. })
    ));
    assert!(store.is_empty());
}

#[test]
fn labels_follow_toggle_presses() {
    let mut store = NodeStore::new();
    store.apply(device_added("of:2", "core-2")).unwrap();
    store
        .apply(host_added("00:00:00:00:00:02/None", "10.0.0.2"))
        .unwrap();

    let mut toggles = DisplayToggles::default();
    let labels = |store: &NodeStore, toggles: &DisplayToggles| -> Vec<Option<String>> {
        store
            .iter()
            .map(|n| {
                node_label(
                    n,
                    toggles.device_labels.current(),
                    toggles.host_labels.current(),
                )
            })
            .collect()
    };

    // Unnamed host falls back to its id under the friendly-name mode.
    assert_eq!(
        labels(&store, &toggles),
        vec![
            Some("core-2".to_owned()),
            Some("00:00:00:00:00:02/None".to_owned())
        ]
    );

    assert_eq!(toggles.device_labels.advance(), LabelToggle::None);
    assert_eq!(toggles.host_labels.advance(), HostLabelToggle::Ip);
    assert_eq!(
        labels(&store, &toggles),
        vec![None, Some("10.0.0.2".to_owned())]
    );

    assert_eq!(toggles.device_labels.advance(), LabelToggle::Id);
    assert_eq!(toggles.host_labels.advance(), HostLabelToggle::Mac);
    assert_eq!(
        labels(&store, &toggles),
        vec![
            Some("of:2".to_owned()),
            Some("00:00:00:00:00:02".to_owned())
        ]
    );
}

#[test]
fn one_bad_host_ip_rejects_the_whole_event() {
    let mut store = NodeStore::new();
    let bad = event(json!({
        "type": "HOST_ADDED_OR_UPDATED",
        "memo": "added",
        "subject": "00:00:00:00:00:03/None",
        "data": { "ips": ["10.0.0.3", "10.0.0.999"] }
    }));
    assert!(matches!(
        store.apply(bad),
        Err(CoreError::Deserialization { .. })
    ));
    assert!(store.is_empty());
    assert_eq!(store.version(), 0);
}
