//! CLI module for techedu
//!
//! Provides command-line interface for:
//! - serve: Build the store and run the HTTP API
//! - catalog: Print the seeded catalog and exit
//! - check-config: Validate a config file and print the effective settings

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{build_store, catalog, check_config, run, run_command, serve, CatalogDump};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_json;
