//! View model for force-directed network topology views.
//!
//! This crate holds the state a topology view keeps between frames:
//!
//! - **Display toggles** ([`toggle`]): [`LabelToggle`], [`HostLabelToggle`]
//!   and [`GridDisplayToggle`], stepped in a fixed circular order by
//!   [`next()`](toggle::next). [`ToggleCycle`] owns the active value for a
//!   UI control; [`DisplayToggles`] bundles the three a view carries.
//!
//! - **Domain model** ([`model`]): [`Node`] with its per-kind payload
//!   ([`Device`], [`Host`], [`SubRegion`]) and the [`ModelEvent`] envelope
//!   emitted by the topology feed.
//!
//! - **[`NodeStore`]**: the rendering collection. Applies model events,
//!   keeping layout state across updates.
//!
//! - **Labels** ([`label`]): the text drawn beside each node under the
//!   active toggles.

pub mod error;
pub mod label;
pub mod model;
pub mod store;
pub mod toggle;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::CoreError;
pub use label::{device_label, host_label, node_label, region_label};
pub use store::{Applied, NodeStore};
pub use toggle::{
    DisplayToggles, GridDisplayToggle, HostLabelToggle, LabelToggle, Toggle, ToggleCycle,
    announcement, next, shows_geo_grid, shows_grid_1000,
};

pub use model::{
    Device, DeviceProps, Host, HostProps, LayerType, Location, LocationType, MetaUi, ModelEvent,
    ModelEventMemo, ModelEventType, Node, NodeKind, NodeType, RegionProps, SubRegion,
};
