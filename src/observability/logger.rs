//! Logging setup
//!
//! One log line = one event. JSON output by default so lines can be shipped
//! as-is; plain text for local runs. `RUST_LOG` wins over the configured
//! level when set.

use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Log configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive, e.g. "info" or "techedu=debug,tower_http=info"
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable text
    #[serde(default = "default_json")]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_json() -> bool {
    true
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: default_json(),
        }
    }
}

impl LogConfig {
    /// Checks that `level` parses as a filter directive and that every
    /// directive names a known level. A bare word must itself be a level.
    pub fn validate(&self) -> Result<(), String> {
        EnvFilter::try_new(&self.level)
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))?;

        for directive in self.level.split(',').map(str::trim) {
            let level = match directive.rsplit_once('=') {
                Some((_, level)) => level,
                None => directive,
            };
            if level.parse::<LevelFilter>().is_err() {
                return Err(format!(
                    "Invalid log level '{}': unknown level '{}'",
                    self.level, level
                ));
            }
        }

        Ok(())
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new(default_level()))
    }
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), String> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_target(true);

    let result = if config.json {
        builder.json().with_current_span(false).try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| format!("Failed to initialize logging: {}", e))
}
