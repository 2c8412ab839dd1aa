// ── Node store ──
//
// The rendering collection: owns every node of the current view, keyed
// by node id in arrival order. Model events mutate it in place so layout
// state survives property updates. Every mutation bumps a version counter
// that renderers compare against to skip redundant redraws.

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::model::{Device, Host, ModelEvent, ModelEventType, Node, NodeType, SubRegion};

/// Outcome of applying one model event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Added,
    Updated,
    Removed,
    /// The event does not concern nodes (e.g. link updates).
    Ignored,
}

#[derive(Debug, Default)]
pub struct NodeStore {
    nodes: IndexMap<String, Node>,
    version: u64,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a model event from the topology feed.
    pub fn apply(&mut self, event: ModelEvent) -> Result<Applied, CoreError> {
        debug!(
            event_type = %event.event_type,
            memo = %event.memo,
            subject = %event.subject,
            "applying model event"
        );

        match event.event_type {
            ModelEventType::DeviceAddedOrUpdated => {
                let device: Device = serde_json::from_value(event.data)?;
                self.upsert(Node::device(event.subject, device))
            }
            ModelEventType::HostAddedOrUpdated => {
                let host: Host = serde_json::from_value(event.data)?;
                self.upsert(Node::host(event.subject, host))
            }
            ModelEventType::DeviceRemoved => self
                .remove_typed(&event.subject, NodeType::Device)
                .map(|_| Applied::Removed),
            ModelEventType::HostRemoved => self
                .remove_typed(&event.subject, NodeType::Host)
                .map(|_| Applied::Removed),
            ModelEventType::LinkAddedOrUpdated => {
                debug!(subject = %event.subject, "link event ignored by node store");
                Ok(Applied::Ignored)
            }
        }
    }

    /// Insert a node, or replace an existing one of the same type while
    /// keeping its layout state.
    pub fn upsert(&mut self, mut node: Node) -> Result<Applied, CoreError> {
        let applied = match self.nodes.get(&node.id) {
            Some(existing) if existing.node_type() != node.node_type() => {
                let found = node.node_type();
                return Err(CoreError::NodeTypeMismatch {
                    expected: existing.node_type(),
                    found,
                    id: node.id,
                });
            }
            Some(existing) => {
                node.adopt_layout(existing);
                Applied::Updated
            }
            None => Applied::Added,
        };

        self.nodes.insert(node.id.clone(), node);
        self.bump_version();
        Ok(applied)
    }

    /// Remove a node by id.
    pub fn remove(&mut self, id: &str) -> Option<Node> {
        let removed = self.nodes.shift_remove(id);
        if removed.is_some() {
            self.bump_version();
        }
        removed
    }

    /// Remove a node, failing if it is missing or of another type.
    pub fn remove_typed(&mut self, id: &str, expected: NodeType) -> Result<Node, CoreError> {
        let found = self
            .nodes
            .get(id)
            .map(Node::node_type)
            .ok_or_else(|| CoreError::NodeNotFound { id: id.to_owned() })?;
        if found != expected {
            return Err(CoreError::NodeTypeMismatch {
                id: id.to_owned(),
                expected,
                found,
            });
        }
        self.remove(id)
            .ok_or_else(|| CoreError::NodeNotFound { id: id.to_owned() })
    }

    /// Replace every sub-region node with `regions`.
    ///
    /// Regions that survive keep their layout. Ids already taken by a
    /// device or host are skipped. Returns the number of regions stored.
    pub fn set_sub_regions(
        &mut self,
        regions: impl IntoIterator<Item = (String, SubRegion)>,
    ) -> usize {
        let mut previous: HashMap<String, Node> = HashMap::new();
        self.nodes.retain(|id, node| {
            if node.node_type() == NodeType::Region {
                previous.insert(id.clone(), node.clone());
                false
            } else {
                true
            }
        });

        let mut stored = 0;
        for (id, region) in regions {
            if self.nodes.contains_key(&id) {
                warn!(id = %id, "sub-region id collides with an existing node; skipped");
                continue;
            }
            let mut node = Node::sub_region(id, region);
            if let Some(old) = previous.get(&node.id) {
                node.adopt_layout(old);
            }
            self.nodes.insert(node.id.clone(), node);
            stored += 1;
        }

        debug!(stored, dropped = previous.len(), "sub-regions replaced");
        self.bump_version();
        stored
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Mutable access for layout updates. Counts as a mutation.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Node> {
        if !self.nodes.contains_key(id) {
            return None;
        }
        self.bump_version();
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn devices(&self) -> impl Iterator<Item = (&str, &Device)> {
        self.nodes
            .values()
            .filter_map(|n| n.as_device().map(|d| (n.id.as_str(), d)))
    }

    pub fn hosts(&self) -> impl Iterator<Item = (&str, &Host)> {
        self.nodes
            .values()
            .filter_map(|n| n.as_host().map(|h| (n.id.as_str(), h)))
    }

    pub fn sub_regions(&self) -> impl Iterator<Item = (&str, &SubRegion)> {
        self.nodes
            .values()
            .filter_map(|n| n.as_sub_region().map(|r| (n.id.as_str(), r)))
    }

    /// Monotonic mutation counter.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.bump_version();
    }

    fn bump_version(&mut self) {
        self.version += 1;
    }
}
