//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::io;

use thiserror::Error;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing, unreadable or invalid
    #[error("CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// Writing command output failed
    #[error("CLI_IO_ERROR: {0}")]
    Io(#[from] io::Error),

    /// Server could not be started
    #[error("CLI_BOOT_FAILED: {0}")]
    BootFailed(String),
}

impl CliError {
    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        CliError::Config(msg.into())
    }

    /// Boot failed
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        CliError::BootFailed(msg.into())
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "CLI_CONFIG_ERROR",
            CliError::Io(_) => "CLI_IO_ERROR",
            CliError::BootFailed(_) => "CLI_BOOT_FAILED",
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::config_error("bad port");
        assert_eq!(err.to_string(), "CLI_CONFIG_ERROR: bad port");
        assert_eq!(err.code(), "CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_io_error_conversion() {
        let err: CliError = io::Error::new(io::ErrorKind::AddrInUse, "taken").into();
        assert_eq!(err.code(), "CLI_IO_ERROR");
        assert!(err.to_string().contains("taken"));
    }
}
