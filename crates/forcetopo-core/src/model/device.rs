// ── Device domain types ──

use serde::{Deserialize, Serialize};

use super::location::{LayerType, Location, LocationType, MetaUi};

/// Display properties attached to a device by the topology feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceProps {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub name: String,
    pub loc_type: Option<LocationType>,
    /// Glyph hint for the renderer (e.g. "switch", "roadm").
    pub ui_type: Option<String>,
}

/// A network element: switch, router, ROADM and the like.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Device {
    pub layer: LayerType,
    pub location: Option<Location>,
    pub meta_ui: Option<MetaUi>,
    /// Controller instance currently mastering the device.
    pub master: Option<String>,
    pub online: bool,
    pub props: DeviceProps,
    #[serde(rename = "type")]
    pub device_type: String,
}

impl Device {
    /// Friendly name, if the feed supplied a non-empty one.
    pub fn name(&self) -> Option<&str> {
        Some(self.props.name.as_str()).filter(|n| !n.is_empty())
    }
}
