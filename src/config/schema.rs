//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration, read from `.gitgate.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitGateConfig {
    /// How git is located and judged
    pub git: GitSettings,

    /// Default output verbosity
    pub output: OutputMode,
}

/// Settings for the git requirement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitSettings {
    /// Binary name or path (defaults to `git` on PATH)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<PathBuf>,

    /// Oldest accepted version as `<major>.<minor>`, e.g. "2.01"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<String>,

    /// Replacement for the built-in install guidance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_hint: Option<String>,
}

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Normal,
    Quiet,
    Silent,
}
