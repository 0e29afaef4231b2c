//! CLI module
//!
//! Provides command-line interface for:
//! - serve: seed the store and run the HTTP API
//! - config: print the effective configuration

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{print_config, run, run_command, serve, Config, MAX_SEED_COUNT};
pub use errors::{CliError, CliResult};
