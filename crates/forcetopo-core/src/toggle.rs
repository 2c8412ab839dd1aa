// ── Display-mode toggles ──
//
// Each toggle is a closed enum stepped one value per user action. The
// cycle order lives in one lookup table per enum and `next()` walks it,
// wrapping from the last entry back to the first. Numeric values follow
// declaration order, which is also cycle order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, EnumMessage, IntoStaticStr};
use tracing::debug;

use crate::error::CoreError;

/// A closed set of display modes with a fixed circular order.
pub trait Toggle: Copy + Eq + fmt::Debug + Into<&'static str> + 'static {
    /// Name used in log fields and error messages.
    const NAME: &'static str;

    /// Every value, in cycle order.
    const CYCLE: &'static [Self];
}

/// Return the value after `current` in its cycle.
pub fn next<T: Toggle>(current: T) -> T {
    let cycle = T::CYCLE;
    let position = cycle.iter().position(|v| *v == current);
    // Every variant is listed in its CYCLE table, so the lookup always hits.
    debug_assert!(
        position.is_some(),
        "{current:?} missing from the {} cycle table",
        T::NAME
    );
    position
        .and_then(|i| cycle.get((i + 1) % cycle.len()))
        .copied()
        .unwrap_or(current)
}

/// User-facing message announcing that `value` is now active.
pub fn announcement<T: Toggle + EnumMessage>(value: T) -> &'static str {
    value.get_message().unwrap_or_default()
}

/// Look up a toggle by its numeric value.
pub fn from_ordinal<T: Toggle>(raw: u8) -> Result<T, CoreError> {
    T::CYCLE
        .get(usize::from(raw))
        .copied()
        .ok_or_else(|| CoreError::InvalidToggle {
            toggle: T::NAME,
            value: raw.to_string(),
        })
}

/// Parse a toggle from its serialized name, ignoring ASCII case.
pub fn parse<T: Toggle>(raw: &str) -> Result<T, CoreError> {
    let wanted = raw.trim();
    T::CYCLE
        .iter()
        .copied()
        .find(|v| {
            let name: &'static str = (*v).into();
            name.eq_ignore_ascii_case(wanted)
        })
        .ok_or_else(|| CoreError::InvalidToggle {
            toggle: T::NAME,
            value: raw.to_owned(),
        })
}

// ── LabelToggle ─────────────────────────────────────────────────────

/// How device labels are displayed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
    EnumMessage,
    IntoStaticStr,
    strum::Display,
)]
#[serde(rename_all = "snake_case", try_from = "String")]
#[strum(serialize_all = "snake_case")]
pub enum LabelToggle {
    #[strum(message = "Hide device labels")]
    None,
    #[strum(message = "Show device ID labels")]
    Id,
    #[strum(message = "Show friendly device labels")]
    Name,
}

impl Toggle for LabelToggle {
    const NAME: &'static str = "device label toggle";
    const CYCLE: &'static [Self] = &[Self::None, Self::Id, Self::Name];
}

// ── HostLabelToggle ─────────────────────────────────────────────────

/// How host labels are displayed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
    EnumMessage,
    IntoStaticStr,
    strum::Display,
)]
#[serde(rename_all = "snake_case", try_from = "String")]
#[strum(serialize_all = "snake_case")]
pub enum HostLabelToggle {
    #[strum(message = "Hide host labels")]
    None,
    #[strum(message = "Show friendly host labels")]
    Name,
    #[strum(message = "Show host IP addresses")]
    Ip,
    #[strum(message = "Show host MAC addresses")]
    Mac,
}

impl Toggle for HostLabelToggle {
    const NAME: &'static str = "host label toggle";
    const CYCLE: &'static [Self] = &[Self::None, Self::Name, Self::Ip, Self::Mac];
}

// ── GridDisplayToggle ───────────────────────────────────────────────

/// Which background grids are drawn.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
    EnumMessage,
    IntoStaticStr,
    strum::Display,
)]
#[serde(try_from = "String")]
pub enum GridDisplayToggle {
    #[serde(rename = "gridnone")]
    #[strum(serialize = "gridnone", message = "Hide grid")]
    GridNone,
    #[serde(rename = "grid1000")]
    #[strum(serialize = "grid1000", message = "Show 1000 x 1000 grid")]
    Grid1000,
    #[serde(rename = "gridgeo")]
    #[strum(serialize = "gridgeo", message = "Show geo grid")]
    GridGeo,
    #[serde(rename = "gridboth")]
    #[strum(serialize = "gridboth", message = "Show both grids")]
    GridBoth,
}

impl Toggle for GridDisplayToggle {
    const NAME: &'static str = "grid display toggle";
    const CYCLE: &'static [Self] = &[Self::GridNone, Self::Grid1000, Self::GridGeo, Self::GridBoth];
}

/// Whether the 1000 x 1000 layout grid is drawn in `mode`.
pub fn shows_grid_1000(mode: GridDisplayToggle) -> bool {
    matches!(mode, GridDisplayToggle::Grid1000 | GridDisplayToggle::GridBoth)
}

/// Whether the geographic grid is drawn in `mode`.
pub fn shows_geo_grid(mode: GridDisplayToggle) -> bool {
    matches!(mode, GridDisplayToggle::GridGeo | GridDisplayToggle::GridBoth)
}

// ── String / numeric conversions ────────────────────────────────────

impl FromStr for LabelToggle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl FromStr for HostLabelToggle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl FromStr for GridDisplayToggle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

// Deserialization goes through `parse`, so config and env values accept
// any ASCII case and reject unknown names with `InvalidToggle`.

impl TryFrom<String> for LabelToggle {
    type Error = CoreError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        parse(&raw)
    }
}

impl TryFrom<String> for HostLabelToggle {
    type Error = CoreError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        parse(&raw)
    }
}

impl TryFrom<String> for GridDisplayToggle {
    type Error = CoreError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        parse(&raw)
    }
}

impl TryFrom<u8> for LabelToggle {
    type Error = CoreError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        from_ordinal(raw)
    }
}

impl TryFrom<u8> for HostLabelToggle {
    type Error = CoreError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        from_ordinal(raw)
    }
}

impl TryFrom<u8> for GridDisplayToggle {
    type Error = CoreError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        from_ordinal(raw)
    }
}

// ── ToggleCycle ─────────────────────────────────────────────────────

/// Holds the active value of one toggle on behalf of a UI control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleCycle<T: Toggle> {
    current: T,
}

impl<T: Toggle> ToggleCycle<T> {
    pub fn new(initial: T) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> T {
        self.current
    }

    pub fn set(&mut self, value: T) {
        self.current = value;
    }

    /// Step to the next mode and return it.
    pub fn advance(&mut self) -> T {
        let previous = self.current;
        self.current = next(previous);
        debug!(
            toggle = T::NAME,
            from = ?previous,
            to = ?self.current,
            "display toggle advanced"
        );
        self.current
    }
}

// ── DisplayToggles ──────────────────────────────────────────────────

/// The three toggles a topology view carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayToggles {
    pub device_labels: ToggleCycle<LabelToggle>,
    pub host_labels: ToggleCycle<HostLabelToggle>,
    pub grid: ToggleCycle<GridDisplayToggle>,
}

impl DisplayToggles {
    pub fn new(
        device_labels: LabelToggle,
        host_labels: HostLabelToggle,
        grid: GridDisplayToggle,
    ) -> Self {
        Self {
            device_labels: ToggleCycle::new(device_labels),
            host_labels: ToggleCycle::new(host_labels),
            grid: ToggleCycle::new(grid),
        }
    }
}

impl Default for DisplayToggles {
    fn default() -> Self {
        Self::new(
            LabelToggle::Name,
            HostLabelToggle::Name,
            GridDisplayToggle::GridNone,
        )
    }
}
