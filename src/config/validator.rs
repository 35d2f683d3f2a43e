//! Configuration validation rules.
//!
//! - `git.minimum` must look like `<major>.<minor>` with a minor of at most 99
//! - `git.program` must not be empty
//! - `git.install_hint` must not be blank

use crate::config::schema::GitGateConfig;
use crate::error::{GitGateError, Result};
use crate::requirements::MinimumVersion;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Config key the error is about
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &GitGateConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let git = &config.git;

    if let Some(minimum) = &git.minimum {
        if let Err(message) = minimum.parse::<MinimumVersion>() {
            errors.push(ValidationError {
                field: "git.minimum".to_string(),
                message,
            });
        }
    }

    if git
        .program
        .as_ref()
        .is_some_and(|p| p.as_os_str().is_empty())
    {
        errors.push(ValidationError {
            field: "git.program".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    if git
        .install_hint
        .as_ref()
        .is_some_and(|h| h.trim().is_empty())
    {
        errors.push(ValidationError {
            field: "git.install_hint".to_string(),
            message: "must not be blank".to_string(),
        });
    }

    errors
}

/// Validate a configuration, failing on the first batch of errors.
pub fn validate(config: &GitGateConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        Err(GitGateError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
