//! Configuration file
//!
//! ```json
//! {
//!   "server": { "host": "0.0.0.0", "port": 5000, "cors_origins": [], "admin_endpoints": true },
//!   "log": { "level": "info", "json": true },
//!   "seed_catalog": true
//! }
//! ```
//!
//! Every field is optional. A missing file means all defaults.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::observability::LogConfig;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub log: LogConfig,

    /// Load the sample courses, instructors and testimonials at startup
    #[serde(default = "default_seed_catalog")]
    pub seed_catalog: bool,
}

fn default_seed_catalog() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            log: LogConfig::default(),
            seed_catalog: default_seed_catalog(),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults if the file
    /// does not exist
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(CliError::config_error(format!(
                    "Failed to read config '{}': {}",
                    path.display(),
                    e
                )))
            }
        };

        let config: Config = serde_json::from_str(&content).map_err(|e| {
            CliError::config_error(format!("Invalid config JSON '{}': {}", path.display(), e))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        self.server.validate().map_err(CliError::config_error)?;
        self.log.validate().map_err(CliError::config_error)?;
        Ok(())
    }

    /// Apply a command-line port override
    pub fn with_port_override(mut self, port: Option<u16>) -> CliResult<Self> {
        if let Some(port) = port {
            self.server.port = port;
            self.validate()?;
        }
        Ok(self)
    }
}
