//! Configuration file discovery and loading.
//!
//! An explicit `--config` path must exist. Without one, `.gitgate.yml` in
//! the working directory is used if present; otherwise defaults apply.

use crate::config::schema::GitGateConfig;
use crate::error::{GitGateError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".gitgate.yml";

/// Find `.gitgate.yml` in `dir`.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load configuration, from `explicit` if given, else by discovery in `dir`.
///
/// # Errors
///
/// Returns `ConfigNotFound` if `explicit` doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<GitGateConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match find_config(dir) {
            Some(path) => path,
            None => {
                tracing::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
                return Ok(GitGateConfig::default());
            }
        },
    };

    tracing::debug!("Loading config from {}", path.display());
    load_config_file(&path)
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<GitGateConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GitGateError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GitGateError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a config.
///
/// An empty file is treated as an empty mapping.
pub fn parse_config(content: &str, source_path: &Path) -> Result<GitGateConfig> {
    if content.trim().is_empty() {
        return Ok(GitGateConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| GitGateError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
