// ── Tracing setup ──
//
// `RUST_LOG` always wins; otherwise the configured level applies.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::ConfigError;

const LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace", "off"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Fallback filter when `RUST_LOG` is unset: a level name such as
    /// `"warn"`, or a full directive like `"forcetopo_core=debug"`.
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "warn".into()
}

impl LoggingConfig {
    /// Reject bare words that are not level names. Directives containing
    /// `=` or `,` are left to `EnvFilter` to parse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.level.trim();
        if level.contains('=') || level.contains(',') {
            return Ok(());
        }
        if LEVELS.iter().any(|l| l.eq_ignore_ascii_case(level)) {
            Ok(())
        } else {
            Err(ConfigError::Validation {
                field: "logging.level".into(),
                reason: format!("expected one of {}, got '{}'", LEVELS.join(", "), self.level),
            })
        }
    }
}

/// Install the global subscriber, writing to stderr.
pub fn init_tracing(cfg: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&cfg.level).map_err(|e| ConfigError::Logging(e.to_string()))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = if cfg.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| ConfigError::Logging(e.to_string()))
}
