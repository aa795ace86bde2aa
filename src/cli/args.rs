//! CLI argument definitions using clap
//!
//! Commands:
//! - techedu serve [--config <path>] [--port <port>]
//! - techedu catalog [--config <path>]
//! - techedu check-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// techedu - course catalog and enrollment API
#[derive(Parser, Debug)]
#[command(name = "techedu")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        /// Path to configuration file (defaults apply if it does not exist)
        #[arg(long, default_value = "./techedu.json")]
        config: PathBuf,

        /// Port to listen on, overriding the config file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the seeded catalog as JSON and exit
    Catalog {
        /// Path to configuration file
        #[arg(long, default_value = "./techedu.json")]
        config: PathBuf,
    },

    /// Validate a configuration file and print the effective settings
    CheckConfig {
        /// Path to configuration file
        #[arg(long, default_value = "./techedu.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_with_port() {
        let cli = Cli::try_parse_from(["techedu", "serve", "--port", "8081"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert_eq!(config, PathBuf::from("./techedu.json"));
                assert_eq!(port, Some(8081));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_check_config_path() {
        let cli =
            Cli::try_parse_from(["techedu", "check-config", "--config", "/etc/techedu.json"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Command::CheckConfig { config } if config == PathBuf::from("/etc/techedu.json")
        ));
    }

    #[test]
    fn test_bad_port_rejected() {
        assert!(Cli::try_parse_from(["techedu", "serve", "--port", "70000"]).is_err());
    }
}
