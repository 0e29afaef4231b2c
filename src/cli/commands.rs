//! CLI command implementations
//!
//! `serve` boots in a fixed order: load config, seed the store, bind,
//! serve. Nothing is shared between runs.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::store::seed::{seeded_store, SeedConfig};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Upper bound on generated sample records
pub const MAX_SEED_COUNT: usize = 10_000;

/// Configuration file structure. Every field has a default, so an empty
/// object (or no file at all) is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener and CORS
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Sample records loaded at startup
    #[serde(default)]
    pub seed: SeedConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Replace the configured port
    pub fn with_port_override(mut self, port: Option<u16>) -> CliResult<Self> {
        if let Some(port) = port {
            self.server.port = port;
            self.validate()?;
        }
        Ok(self)
    }

    fn validate(&self) -> CliResult<()> {
        self.server
            .validate()
            .map_err(|e| CliError::config_error(e.to_string()))?;

        if self.seed.count > MAX_SEED_COUNT {
            return Err(CliError::config_error(format!(
                "seed.count must be <= {}, got {}",
                MAX_SEED_COUNT, self.seed.count
            )));
        }

        Ok(())
    }
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Config { config } => print_config(config.as_deref()),
    }
}

/// Seed the store and serve until ctrl-c
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    log_event(Event::BootStart);

    let config = Config::resolve(config_path)?.with_port_override(port)?;
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("addr", config.server.socket_addr().as_str()),
            ("seed_count", config.seed.count.to_string().as_str()),
        ],
    );

    let store = seeded_store(&config.seed);
    log_event_with_fields(
        Event::StoreSeeded,
        &[("count", store.len().to_string().as_str())],
    );

    let server = HttpServer::new(config.server, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start()).map_err(|e| {
        let message = format!("HTTP server failed: {}", e);
        log_event_with_fields(Event::BootFailed, &[("error", message.as_str())]);
        CliError::boot_failed(message)
    })
}

/// Print the effective configuration to stdout
pub fn print_config(config_path: Option<&Path>) -> CliResult<()> {
    let config = Config::resolve(config_path)?;
    write_config(&config, &mut io::stdout().lock())
}

fn write_config<W: Write>(config: &Config, out: &mut W) -> CliResult<()> {
    let rendered = serde_json::to_string_pretty(config)
        .map_err(|e| CliError::config_error(format!("Failed to render config: {}", e)))?;
    writeln!(out, "{}", rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_object_is_default() {
        let file = config_file("{}");
        assert_eq!(Config::load(file.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config() {
        let file = config_file(r#"{"server": {"port": 7000}, "seed": {"count": 3, "rng_seed": 1}}"#);
        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.server.port, 7000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.seed.count, 3);
        assert_eq!(config.seed.rng_seed, Some(1));
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let file = config_file("{not json");
        let err = Config::load(file.path()).unwrap_err();
        assert_eq!(err.code(), "CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = Config::load(Path::new("/nonexistent/client-registry.json")).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_oversized_seed_is_rejected() {
        let file = config_file(r#"{"seed": {"count": 10001}}"#);
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_port_override() {
        let config = Config::default().with_port_override(Some(6000)).unwrap();
        assert_eq!(config.server.port, 6000);

        assert!(Config::default().with_port_override(Some(0)).is_err());
        assert_eq!(
            Config::default().with_port_override(None).unwrap(),
            Config::default()
        );
    }

    #[test]
    fn test_invalid_cors_origin_is_config_error() {
        let file = config_file(r#"{"server": {"cors_origins": ["localhost:3000"]}}"#);
        let err = Config::load(file.path()).unwrap_err();
        assert_eq!(err.code(), "CLI_CONFIG_ERROR");
        assert!(err.to_string().contains("localhost:3000"));
    }

    #[test]
    fn test_blank_host_is_rejected() {
        let file = config_file(r#"{"server": {"host": " "}}"#);
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_write_config_round_trips() {
        let mut out = Vec::new();
        write_config(&Config::default(), &mut out).unwrap();

        let printed: Config = serde_json::from_slice(&out).unwrap();
        assert_eq!(printed, Config::default());
    }

    #[test]
    fn test_closed_output_is_io_error() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = write_config(&Config::default(), &mut Closed).unwrap_err();
        assert_eq!(err.code(), "CLI_IO_ERROR");
    }

    #[test]
    fn test_resolve_without_path() {
        assert_eq!(Config::resolve(None).unwrap(), Config::default());
    }
}
