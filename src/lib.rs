//! gitgate - Check that git is installed and new enough.
//!
//! gitgate runs `git --version`, reads the banner, and compares it against
//! a minimum version (2.01 unless configured otherwise). Missing or old
//! installs are reported as typed errors along with install guidance.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - The version gate and banner parsing
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use gitgate::requirements::{GateError, VersionGate};
//! use std::path::Path;
//!
//! let gate = VersionGate::git();
//! let result = gate.validate_with(|_: &Path| Ok("git version 2.43.0".to_string()));
//! assert!(result.is_ok());
//!
//! let result = gate.validate_with(|_: &Path| Ok("git version 2.00.0".to_string()));
//! assert!(matches!(result, Err(GateError::VersionTooLow { .. })));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod ui;

pub use error::{GitGateError, Result};
pub use requirements::{GateError, VersionGate};
