//! Configuration module for aas-semantics.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation of configured templates
//! - YAML config file loading and discovery
//! - Command-line overrides
//!
//! # Quick Start
//!
//! ```
//! use aas_semantics::config::{AppConfig, OutputFormat};
//!
//! let config = AppConfig::builder()
//!     .output_format(OutputFormat::Json)
//!     .fail_on_no_match(true)
//!     .build();
//!
//! assert_eq!(config.templates.catalog().len(), 9);
//! ```
//!
//! # Configuration File
//!
//! Place a `.aas-semantics.yaml` file in your project root or
//! `~/.config/aas-semantics/`:
//!
//! ```yaml
//! output:
//!   format: json
//! behavior:
//!   fail_on_no_match: true
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, OutputConfig, OutputFormat, TemplatesConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    CliOverrides, ConfigFileError, discover_config_file, generate_example_config, load_config_file,
    load_or_default,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.aas-semantics.yaml`.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
