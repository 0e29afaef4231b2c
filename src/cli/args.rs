//! CLI argument definitions using clap
//!
//! Commands:
//! - client-registry serve [--config <path>] [--port <port>]
//! - client-registry config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// In-memory client records service
#[derive(Parser, Debug)]
#[command(name = "client-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Seed the store and serve the HTTP API until ctrl-c
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to bind, overriding the configuration file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the effective configuration as JSON and exit
    Config {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
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
    fn test_parse_serve_with_port() {
        let cli = Cli::try_parse_from(["client-registry", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert!(config.is_none());
                assert_eq!(port, Some(9000));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_config_path() {
        let cli =
            Cli::try_parse_from(["client-registry", "config", "--config", "./c.json"]).unwrap();
        match cli.command {
            Command::Config { config } => assert_eq!(config, Some(PathBuf::from("./c.json"))),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_missing_subcommand_fails() {
        assert!(Cli::try_parse_from(["client-registry"]).is_err());
    }
}
