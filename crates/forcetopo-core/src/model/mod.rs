// ── Topology view model ──
//
// Node shapes as they arrive from the topology event feed. Each node is
// a common layout header plus a per-kind payload; nothing here carries
// behavior beyond field access and layout bookkeeping.

pub mod device;
pub mod event;
pub mod host;
pub mod location;
pub mod node;
pub mod region;

// ── Re-exports ──────────────────────────────────────────────────────

pub use device::{Device, DeviceProps};
pub use event::{ModelEvent, ModelEventMemo, ModelEventType};
pub use host::{Host, HostProps};
pub use location::{EquivLoc, LayerType, Location, LocationType, MetaUi};
pub use node::{Node, NodeKind, NodeType};
pub use region::{RegionProps, SubRegion};
