//! Persisted display preferences for forcetopo views.
//!
//! TOML file + environment layering, translation to and from the
//! [`DisplayToggles`] a view holds at runtime, and tracing setup.

pub mod logging;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use forcetopo_core::{DisplayToggles, GridDisplayToggle, HostLabelToggle, LabelToggle};

pub use logging::{LoggingConfig, init_tracing};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayPrefs,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial state of the topology view's display toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplayPrefs {
    #[serde(default = "default_device_labels")]
    pub device_labels: LabelToggle,

    #[serde(default = "default_host_labels")]
    pub host_labels: HostLabelToggle,

    #[serde(default = "default_grid")]
    pub grid: GridDisplayToggle,
}

impl Default for DisplayPrefs {
    fn default() -> Self {
        Self {
            device_labels: default_device_labels(),
            host_labels: default_host_labels(),
            grid: default_grid(),
        }
    }
}

fn default_device_labels() -> LabelToggle {
    LabelToggle::Name
}
fn default_host_labels() -> HostLabelToggle {
    HostLabelToggle::Name
}
fn default_grid() -> GridDisplayToggle {
    GridDisplayToggle::GridNone
}

impl DisplayPrefs {
    /// Runtime toggles starting from these preferences.
    pub fn toggles(&self) -> DisplayToggles {
        DisplayToggles::new(self.device_labels, self.host_labels, self.grid)
    }
}

impl From<&DisplayToggles> for DisplayPrefs {
    fn from(toggles: &DisplayToggles) -> Self {
        Self {
            device_labels: toggles.device_labels.current(),
            host_labels: toggles.host_labels.current(),
            grid: toggles.grid.current(),
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("io", "forcetopo", "forcetopo").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("forcetopo");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from `path`, layered over defaults and under
/// `FORCETOPO_`-prefixed environment variables (`__` separates sections,
/// e.g. `FORCETOPO_DISPLAY__GRID=gridgeo`).
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("FORCETOPO_").split("__"));

    let config: Config = figment.extract()?;
    config.logging.validate()?;
    tracing::debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}

/// Load config, returning a default if the file is missing or invalid.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "falling back to default configuration");
        Config::default()
    })
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(&config_path(), cfg)
}

pub fn save_config_to(path: &Path, cfg: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
