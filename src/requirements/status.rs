//! Outcome and event types produced by the version gate.
//!
//! The gate decides first and logs afterwards: every assessment carries
//! the events that should be reported, and [`emit`] turns them into log
//! records.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::version::{MinimumVersion, VersionInfo};
use super::GateError;

/// Something the gate wants reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateEvent {
    /// The tool could not be run at all.
    ExecutionFailed {
        /// Program that was invoked
        program: PathBuf,
        /// Why the invocation failed
        reason: String,
    },

    /// The tool runs but is older than required.
    MinimumNotMet {
        /// Version reported by the tool
        found: VersionInfo,
        /// Oldest acceptable version
        minimum: MinimumVersion,
    },

    /// How to install or upgrade the tool.
    InstallHint { text: String },
}

/// Severity a [`GateEvent`] is logged at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventLevel {
    Error,
    Info,
}

impl GateEvent {
    /// The log severity for this event.
    pub fn level(&self) -> EventLevel {
        match self {
            GateEvent::ExecutionFailed { .. } | GateEvent::MinimumNotMet { .. } => {
                EventLevel::Error
            }
            GateEvent::InstallHint { .. } => EventLevel::Info,
        }
    }
}

impl fmt::Display for GateEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateEvent::ExecutionFailed { program, reason } => write!(
                f,
                "Could not check git version with {}: {}",
                program.display(),
                reason
            ),
            GateEvent::MinimumNotMet { found, minimum } => write!(
                f,
                "git {} is installed but version {} or newer is required",
                found, minimum
            ),
            GateEvent::InstallHint { text } => f.write_str(text),
        }
    }
}

/// Log each event at its severity.
pub fn emit(events: &[GateEvent]) {
    for event in events {
        match event.level() {
            EventLevel::Error => tracing::error!("{}", event),
            EventLevel::Info => tracing::info!("{}", event),
        }
    }
}

/// Whether [`emit`] output at `level` reaches the active log filter.
pub fn logs_at(level: EventLevel) -> bool {
    match level {
        EventLevel::Error => tracing::enabled!(tracing::Level::ERROR),
        EventLevel::Info => tracing::enabled!(tracing::Level::INFO),
    }
}

/// Result of assessing a version banner, plus the events to report.
#[derive(Debug, Clone)]
pub struct Assessment {
    /// The parsed version on success.
    pub outcome: Result<VersionInfo, GateError>,
    /// Events in the order they should be reported.
    pub events: Vec<GateEvent>,
}

impl Assessment {
    /// A passing assessment with nothing to report.
    pub fn passed(version: VersionInfo) -> Self {
        Self {
            outcome: Ok(version),
            events: Vec::new(),
        }
    }

    /// A failing assessment.
    pub fn failed(error: GateError, events: Vec<GateEvent>) -> Self {
        Self {
            outcome: Err(error),
            events,
        }
    }

    /// Whether the tool passed the gate.
    pub fn is_satisfied(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The install hint text, if one was produced.
    pub fn install_hint(&self) -> Option<&str> {
        self.events.iter().find_map(|e| match e {
            GateEvent::InstallHint { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Collapse into a serializable status.
    pub fn status(&self) -> GateStatus {
        match &self.outcome {
            Ok(_) => GateStatus::Ok,
            Err(GateError::NotInstalled) => GateStatus::NotInstalled,
            Err(GateError::VersionTooLow { .. }) => GateStatus::VersionTooLow,
        }
    }
}

/// Machine-readable gate status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateStatus {
    Ok,
    NotInstalled,
    VersionTooLow,
}

impl GateStatus {
    /// The serialized name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            GateStatus::Ok => "ok",
            GateStatus::NotInstalled => "not_installed",
            GateStatus::VersionTooLow => "version_too_low",
        }
    }
}
