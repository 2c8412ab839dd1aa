// ── Placement and layering types shared by every node kind ──

use serde::{Deserialize, Serialize};

/// Network layer a topology element belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum LayerType {
    #[serde(rename = "opt")]
    #[strum(serialize = "optical")]
    Optical,
    #[serde(rename = "pkt")]
    #[strum(serialize = "packet")]
    Packet,
    #[default]
    #[serde(rename = "def")]
    #[strum(serialize = "default")]
    Default,
}

/// Coordinate system a location is expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LocationType {
    #[default]
    Geo,
    Grid,
}

/// Pinned placement of a node: lat/long for `geo`, y/x for `grid`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub loc_type: LocationType,
    #[serde(default)]
    pub lat_or_y: f64,
    #[serde(default)]
    pub long_or_x: f64,
}

impl Location {
    pub fn geo(latitude: f64, longitude: f64) -> Self {
        Self {
            loc_type: LocationType::Geo,
            lat_or_y: latitude,
            long_or_x: longitude,
        }
    }

    pub fn grid(x: f64, y: f64) -> Self {
        Self {
            loc_type: LocationType::Grid,
            lat_or_y: y,
            long_or_x: x,
        }
    }
}

/// Geographic equivalent of a screen position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EquivLoc {
    pub lat: f64,
    pub lng: f64,
}

/// Position a user saved for a node by dragging it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaUi {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equiv_loc: Option<EquivLoc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn layer_uses_short_wire_names() {
        let layer: LayerType = serde_json::from_str("\"pkt\"").unwrap();
        assert_eq!(layer, LayerType::Packet);
        assert_eq!(serde_json::to_string(&LayerType::Optical).unwrap(), "\"opt\"");
        assert_eq!(LayerType::Default.to_string(), "default");
    }

    #[test]
    fn grid_location_maps_x_and_y() {
        assert_eq!(
            Location::grid(120.0, 45.0),
            Location {
                loc_type: LocationType::Grid,
                lat_or_y: 45.0,
                long_or_x: 120.0,
            }
        );
    }

    #[test]
    fn location_from_json() {
        let loc: Location =
            serde_json::from_str(r#"{"locType":"geo","latOrY":37.4,"longOrX":-122.1}"#).unwrap();
        assert_eq!(loc, Location::geo(37.4, -122.1));
    }
}
