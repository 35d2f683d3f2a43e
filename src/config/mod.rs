//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use gitgate::config::{parse_config, validate};
//! use std::path::Path;
//!
//! let config = parse_config("git:\n  minimum: '2.20'\n", Path::new(".gitgate.yml")).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.git.minimum.as_deref(), Some("2.20"));
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{GitGateConfig, GitSettings, OutputMode};
pub use validator::{validate, validate_config, ValidationError};
