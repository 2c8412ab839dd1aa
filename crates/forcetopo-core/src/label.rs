// ── Label resolution ──
//
// Turns a node and the active label toggles into the text drawn beside
// it. `None` means no label at all.

use crate::model::host::mac_from_host_id;
use crate::model::{Device, Host, Node, NodeKind, SubRegion};
use crate::toggle::{HostLabelToggle, LabelToggle};

/// Label for a device node. Friendly names fall back to the id.
pub fn device_label(id: &str, device: &Device, mode: LabelToggle) -> Option<String> {
    match mode {
        LabelToggle::None => None,
        LabelToggle::Id => Some(id.to_owned()),
        LabelToggle::Name => Some(device.name().unwrap_or(id).to_owned()),
    }
}

/// Label for a host node.
pub fn host_label(id: &str, host: &Host, mode: HostLabelToggle) -> Option<String> {
    match mode {
        HostLabelToggle::None => None,
        HostLabelToggle::Name => Some(host.name().unwrap_or(id).to_owned()),
        HostLabelToggle::Ip => {
            if host.ips.is_empty() {
                return None;
            }
            let ips: Vec<String> = host.ips.iter().map(ToString::to_string).collect();
            Some(ips.join(", "))
        }
        HostLabelToggle::Mac => Some(mac_from_host_id(id).to_owned()),
    }
}

/// Label for a sub-region node: its name, unless device labels are off.
pub fn region_label(id: &str, region: &SubRegion, mode: LabelToggle) -> Option<String> {
    match mode {
        LabelToggle::None => None,
        LabelToggle::Id | LabelToggle::Name => Some(region.name().unwrap_or(id).to_owned()),
    }
}

/// Label for any node under the given toggles.
pub fn node_label(node: &Node, labels: LabelToggle, host_labels: HostLabelToggle) -> Option<String> {
    match &node.kind {
        NodeKind::Device(d) => device_label(&node.id, d, labels),
        NodeKind::Host(h) => host_label(&node.id, h, host_labels),
        NodeKind::SubRegion(r) => region_label(&node.id, r, labels),
    }
}
