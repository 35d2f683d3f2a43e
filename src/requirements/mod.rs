//! Git requirement checking.
//!
//! This module decides whether the git found on this machine is usable:
//! installed, runnable, and at least a minimum version.
//!
//! # Modules
//!
//! - [`gate`] - The [`VersionGate`] service
//! - [`hints`] - Install and upgrade guidance text
//! - [`probe`] - Running the tool and capturing its banner
//! - [`status`] - Assessment outcomes and reportable events
//! - [`version`] - Banner parsing and version comparison
//!
//! # Example
//!
//! ```
//! use gitgate::requirements::{GateError, VersionGate};
//!
//! let gate = VersionGate::git();
//! let assessment = gate.assess("git version 1.99.0");
//! assert!(matches!(assessment.outcome, Err(GateError::VersionTooLow { .. })));
//! ```

pub mod gate;
pub mod hints;
pub mod probe;
pub mod status;
pub mod version;

pub use gate::VersionGate;
pub use status::{emit, logs_at, Assessment, EventLevel, GateEvent, GateStatus};
pub use version::{parse_banner, MinimumVersion, VersionInfo, GIT_MARKER};

use thiserror::Error;

/// Why the gate rejected the installed tool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// Git could not be run or did not print a recognizable version.
    #[error("git not found. Please check and try again")]
    NotInstalled,

    /// Git runs but is older than `minimum`.
    #[error("git version is lower than {minimum}. Please check and try again")]
    VersionTooLow { minimum: MinimumVersion },
}
