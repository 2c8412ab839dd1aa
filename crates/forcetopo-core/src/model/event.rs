// ── Topology model events ──
//
// Envelope and tags of the change notifications emitted by the topology
// feed. The store consumes them; nothing in this crate produces them.

use serde::{Deserialize, Serialize};

use super::node::NodeType;

/// What kind of element changed and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ModelEventType {
    HostAddedOrUpdated,
    LinkAddedOrUpdated,
    DeviceAddedOrUpdated,
    DeviceRemoved,
    HostRemoved,
}

impl ModelEventType {
    /// Node kind the event targets; `None` for link events.
    pub fn node_type(self) -> Option<NodeType> {
        match self {
            Self::HostAddedOrUpdated | Self::HostRemoved => Some(NodeType::Host),
            Self::DeviceAddedOrUpdated | Self::DeviceRemoved => Some(NodeType::Device),
            Self::LinkAddedOrUpdated => None,
        }
    }

    pub fn is_removal(self) -> bool {
        matches!(self, Self::DeviceRemoved | Self::HostRemoved)
    }
}

/// Free-text memo the feed attaches to each event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModelEventMemo {
    Added,
    Removed,
    Updated,
}

/// One change notification: `subject` is the element id, `data` its body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEvent {
    #[serde(rename = "type")]
    pub event_type: ModelEventType,
    pub memo: ModelEventMemo,
    pub subject: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn event_from_feed_json() {
        let event: ModelEvent = serde_json::from_str(
            r#"{
                "type": "DEVICE_ADDED_OR_UPDATED",
                "memo": "added",
                "subject": "of:0000000000000001",
                "data": { "type": "switch", "online": true }
            }"#,
        )
        .unwrap();

        assert_eq!(event.event_type, ModelEventType::DeviceAddedOrUpdated);
        assert_eq!(event.memo, ModelEventMemo::Added);
        assert_eq!(event.subject, "of:0000000000000001");
        assert_eq!(event.data["online"], true);
    }

    #[test]
    fn removal_without_data() {
        let event: ModelEvent = serde_json::from_str(
            r#"{"type": "HOST_REMOVED", "memo": "removed", "subject": "00:00:00:00:00:01/None"}"#,
        )
        .unwrap();
        assert!(event.event_type.is_removal());
        assert!(event.data.is_null());
    }

    #[test]
    fn event_targets() {
        assert_eq!(
            ModelEventType::HostAddedOrUpdated.node_type(),
            Some(NodeType::Host)
        );
        assert_eq!(
            ModelEventType::DeviceRemoved.node_type(),
            Some(NodeType::Device)
        );
        assert_eq!(ModelEventType::LinkAddedOrUpdated.node_type(), None);
        assert_eq!(
            ModelEventType::LinkAddedOrUpdated.to_string(),
            "LINK_ADDED_OR_UPDATED"
        );
    }
}
