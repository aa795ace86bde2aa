//! CLI command implementations
//!
//! `serve` is the only command that starts the runtime. The store is built
//! here and handed to the HTTP server; nothing else holds it.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::schema::{Course, Instructor, Testimonial};
use crate::storage::{MemoryStore, Storage};

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Catalog dump printed by `techedu catalog`
#[derive(Debug, Serialize)]
pub struct CatalogDump {
    pub courses: Vec<Course>,
    pub instructors: Vec<Instructor>,
    pub testimonials: Vec<Testimonial>,
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::Catalog { config } => catalog(&config),
        Command::CheckConfig { config } => check_config(&config),
    }
}

/// Build the store described by the config
pub fn build_store(config: &Config) -> CliResult<MemoryStore> {
    if config.seed_catalog {
        Ok(MemoryStore::seeded()?)
    } else {
        Ok(MemoryStore::new())
    }
}

/// Start the HTTP server and block until shutdown
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let config = Config::load(config_path)?.with_port_override(port)?;

    init_logging(&config.log).map_err(CliError::boot_failed)?;

    let store: Arc<dyn Storage> = Arc::new(build_store(&config)?);
    tracing::info!(
        config = %config_path.display(),
        seeded = config.seed_catalog,
        courses = store.list_courses()?.len(),
        "store ready"
    );

    let server = HttpServer::new(config.server, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Print the catalog a server with this config would start with
pub fn catalog(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    write_json(&catalog_dump(&build_store(&config)?)?)
}

/// Load, validate and echo the effective configuration
pub fn check_config(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    write_json(&config)
}

fn catalog_dump(store: &dyn Storage) -> CliResult<CatalogDump> {
    Ok(CatalogDump {
        courses: store.list_courses()?,
        instructors: store.list_instructors()?,
        testimonials: store.list_testimonials()?,
    })
}
