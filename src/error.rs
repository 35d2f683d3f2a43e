//! Error types for gitgate operations.
//!
//! This module defines [`GitGateError`], the crate-level error type, and a
//! [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The gate itself only ever fails with [`GateError`]
//! - Configuration and I/O problems surface as `GitGateError`
//! - Use `anyhow::Error` (via `GitGateError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

pub use crate::requirements::GateError;

/// Core error type for gitgate operations.
#[derive(Debug, Error)]
pub enum GitGateError {
    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The version gate rejected the installed tool.
    #[error(transparent)]
    Gate(#[from] GateError),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for gitgate operations.
pub type Result<T> = std::result::Result<T, GitGateError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::MinimumVersion;

    #[test]
    fn config_not_found_displays_path() {
        let err = GitGateError::ConfigNotFound {
            path: PathBuf::from("/foo/gitgate.yml"),
        };
        assert!(err.to_string().contains("/foo/gitgate.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = GitGateError::ConfigParseError {
            path: PathBuf::from("/work/.gitgate.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/work/.gitgate.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = GitGateError::ConfigValidationError {
            message: "minimum must look like 2.01".into(),
        };
        assert!(err.to_string().contains("minimum must look like 2.01"));
    }

    #[test]
    fn gate_error_is_transparent() {
        let err: GitGateError = GateError::VersionTooLow {
            minimum: MinimumVersion::new(2, 1),
        }
        .into();
        assert!(matches!(err, GitGateError::Gate(_)));
        assert!(err.to_string().contains("2.01"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GitGateError = io_err.into();
        assert!(matches!(err, GitGateError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(GitGateError::Gate(GateError::NotInstalled))
        }
        assert!(returns_error().is_err());
    }
}
