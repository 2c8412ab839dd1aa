// ── Host domain types ──

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use super::location::{LayerType, Location, LocationType};

/// Display properties attached to a host by the topology feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostProps {
    pub grid_x: Option<f64>,
    pub grid_y: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub loc_type: Option<LocationType>,
    pub name: String,
}

/// An end station attached to the network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Host {
    /// Whether the host was provisioned rather than discovered.
    pub configured: bool,
    pub ips: Vec<IpAddr>,
    pub layer: LayerType,
    pub location: Option<Location>,
    pub props: HostProps,
}

impl Host {
    pub fn name(&self) -> Option<&str> {
        Some(self.props.name.as_str()).filter(|n| !n.is_empty())
    }
}

/// MAC address portion of a host id (`MAC/VLAN`).
pub fn mac_from_host_id(id: &str) -> &str {
    id.split_once('/').map_or(id, |(mac, _vlan)| mac)
}
