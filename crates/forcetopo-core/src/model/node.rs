// ── Node: the unit the force layout positions ──

use serde::{Deserialize, Serialize};

use super::device::Device;
use super::host::Host;
use super::region::SubRegion;

/// Discriminant carried on the wire as `nodeType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NodeType {
    Region,
    Device,
    Host,
}

/// Per-kind payload of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodeType")]
pub enum NodeKind {
    #[serde(rename = "region")]
    SubRegion(SubRegion),
    #[serde(rename = "device")]
    Device(Device),
    #[serde(rename = "host")]
    Host(Host),
}

/// A positioned element of the topology graph.
///
/// `index`, velocities and pinned coordinates belong to the force
/// simulation. They are absent until the simulation first touches the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vx: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fx: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fy: Option<f64>,
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl Node {
    /// A node at the origin with no simulation state.
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            index: None,
            x: 0.0,
            y: 0.0,
            vx: None,
            vy: None,
            fx: None,
            fy: None,
            kind,
        }
    }

    pub fn device(id: impl Into<String>, device: Device) -> Self {
        Self::new(id, NodeKind::Device(device))
    }

    pub fn host(id: impl Into<String>, host: Host) -> Self {
        Self::new(id, NodeKind::Host(host))
    }

    pub fn sub_region(id: impl Into<String>, region: SubRegion) -> Self {
        Self::new(id, NodeKind::SubRegion(region))
    }

    pub fn node_type(&self) -> NodeType {
        match self.kind {
            NodeKind::SubRegion(_) => NodeType::Region,
            NodeKind::Device(_) => NodeType::Device,
            NodeKind::Host(_) => NodeType::Host,
        }
    }

    pub fn as_device(&self) -> Option<&Device> {
        match &self.kind {
            NodeKind::Device(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_host(&self) -> Option<&Host> {
        match &self.kind {
            NodeKind::Host(h) => Some(h),
            _ => None,
        }
    }

    pub fn as_sub_region(&self) -> Option<&SubRegion> {
        match &self.kind {
            NodeKind::SubRegion(r) => Some(r),
            _ => None,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Fix the node at `(x, y)` so the simulation stops moving it.
    pub fn pin(&mut self, x: f64, y: f64) {
        self.fx = Some(x);
        self.fy = Some(y);
    }

    pub fn unpin(&mut self) {
        self.fx = None;
        self.fy = None;
    }

    pub fn is_pinned(&self) -> bool {
        self.fx.is_some() && self.fy.is_some()
    }

    /// Carry simulation state over from an earlier version of this node.
    pub fn adopt_layout(&mut self, previous: &Self) {
        self.index = previous.index;
        self.x = previous.x;
        self.y = previous.y;
        self.vx = previous.vx;
        self.vy = previous.vy;
        self.fx = previous.fx;
        self.fy = previous.fy;
    }
}
