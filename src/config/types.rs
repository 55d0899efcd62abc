//! Configuration types for aas-semantics.

use crate::templates::{SubmodelTemplate, TemplateCatalog};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments override file settings (see [`AppConfig::apply_overrides`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (format, pretty printing)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Submodel template catalog configuration
    pub templates: TemplatesConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the output format.
    pub const fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Pretty-print JSON output.
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.config.output.pretty = pretty;
        self
    }

    /// Exit with a failure code when a check finds no match.
    pub const fn fail_on_no_match(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_no_match = fail;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Include or skip the built-in template table.
    pub const fn include_builtin_templates(mut self, include: bool) -> Self {
        self.config.templates.include_builtins = include;
        self
    }

    /// Add a template to the catalog.
    pub fn template(mut self, template: SubmodelTemplate) -> Self {
        self.config.templates.extra.push(template);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section Configurations
// ============================================================================

/// Output format of command results.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Structured JSON
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 when `check` finds no match
    pub fail_on_no_match: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

/// Submodel template catalog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Start from the built-in IDTA template table
    pub include_builtins: bool,
    /// Additional templates, appended after the built-ins
    pub extra: Vec<SubmodelTemplate>,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            include_builtins: true,
            extra: Vec::new(),
        }
    }
}

impl TemplatesConfig {
    /// Build the template catalog this configuration describes.
    #[must_use]
    pub fn catalog(&self) -> TemplateCatalog {
        let mut catalog = if self.include_builtins {
            TemplateCatalog::with_builtins()
        } else {
            TemplateCatalog::new()
        };
        catalog.extend(self.extra.iter().cloned());
        catalog
    }
}
