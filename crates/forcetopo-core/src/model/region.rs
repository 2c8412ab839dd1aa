// ── Sub-region domain types ──

use serde::{Deserialize, Serialize};

use super::location::Location;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionProps {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub name: String,
}

/// A nested region drawn as a single collapsible node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubRegion {
    pub location: Option<Location>,
    pub n_devs: u32,
    pub n_hosts: u32,
    pub name: String,
    pub props: RegionProps,
}

impl SubRegion {
    /// Region name, falling back to the name in its props.
    pub fn name(&self) -> Option<&str> {
        [self.name.as_str(), self.props.name.as_str()]
            .into_iter()
            .find(|n| !n.is_empty())
    }
}
