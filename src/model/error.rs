//! Error types for kexplain.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level startup/shutdown failures
//!   - [`ConfigError`](crate::config::ConfigError) - config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - tracing subscriber setup
//!   - `std::io::Error` - terminal setup and rendering failures
//! - [`LookupError`] - the explain command could not be run at all
//!
//! # Error Recovery Strategy
//!
//! Lookup errors are **non-fatal**: the session shows the error text as the new
//! buffer and keeps running. A non-zero exit from the explain command is not an
//! error at all; its stderr becomes the buffer. Only terminal, config and logging
//! setup failures reach `main`.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Top-level application error.
///
/// Every variant is fatal: `main` reports it on stderr and exits non-zero.
#[derive(Debug, Error)]
pub enum AppError {
    /// Config file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// The explain command could not be invoked.
///
/// Raised for process-level failures only (binary missing, pipe I/O). The
/// session renders the message as a single-line buffer.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The process could not be spawned or its output could not be collected.
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program that was being invoked.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn lookup_spawn_error_names_program() {
        let err = LookupError::Spawn {
            program: "kubectl".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let msg = err.to_string();
        assert!(msg.contains("kubectl"), "got: {}", msg);
        assert!(msg.contains("No such file or directory"), "got: {}", msg);
    }

    #[test]
    fn app_error_from_io_error() {
        let err: AppError = io::Error::other("broken pipe").into();
        assert!(matches!(err, AppError::Terminal(_)));
        assert!(err.to_string().starts_with("Terminal error"));
    }

    #[test]
    fn app_error_from_config_error() {
        let err: AppError = ConfigError::InvalidPath("bad".to_string()).into();
        assert!(matches!(err, AppError::Config(_)));
    }
}
