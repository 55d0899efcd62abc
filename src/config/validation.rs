//! Configuration validation for aas-semantics.

use super::types::{AppConfig, TemplatesConfig};
use crate::matching::Notation;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        self.templates.validate()
    }
}

impl Validatable for TemplatesConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        for (i, template) in self.extra.iter().enumerate() {
            if template.name.trim().is_empty() {
                errors.push(ConfigError {
                    field: format!("templates.extra[{i}].name"),
                    message: "Template name must not be empty".to_string(),
                });
            }

            let notation = template.notation();
            if notation == Notation::Unknown {
                errors.push(ConfigError {
                    field: format!("templates.extra[{i}].semantic_id"),
                    message: format!(
                        "Semantic id '{}' is not an IRI, ECLASS IRDI or IEC CDD identifier",
                        template.semantic_id
                    ),
                });
            }
        }

        errors
    }
}
