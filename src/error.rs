//! Error types for aas-semantics.
//!
//! The matching engine itself never fails: every check returns `false` or
//! an empty result for unusable input. Errors only arise at the edges, when
//! reading documents and configuration from disk.

use crate::model::Element;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for aas-semantics operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SemanticsError {
    /// Errors while reading an AAS document
    #[error("Failed to read AAS document: {context}")]
    Document {
        context: String,
        #[source]
        source: DocumentErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Specific document error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DocumentErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Missing modelType in {0}")]
    MissingModelType(String),

    #[error("Not a container element: {model_type} (expected Submodel, SubmodelElementCollection or SubmodelElementList)")]
    NotAContainer { model_type: String },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for aas-semantics operations
pub type Result<T> = std::result::Result<T, SemanticsError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl SemanticsError {
    /// Create a document error with context
    pub fn document(context: impl Into<String>, source: DocumentErrorKind) -> Self {
        Self::Document {
            context: context.into(),
            source,
        }
    }

    /// Create a document error for an element without modelType
    pub fn missing_model_type(context: impl Into<String>) -> Self {
        let context = context.into();
        Self::document(
            format!("at {context}"),
            DocumentErrorKind::MissingModelType(context),
        )
    }

    /// Create a document error for a leaf element used as a container
    pub fn not_a_container(model_type: impl Into<String>) -> Self {
        Self::document(
            "element has no children to search",
            DocumentErrorKind::NotAContainer {
                model_type: model_type.into(),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for SemanticsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for SemanticsError {
    fn from(err: serde_json::Error) -> Self {
        Self::document(
            "JSON deserialization",
            DocumentErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain outermost first, e.g.
/// `"loading document: JSON deserialization"`.
///
/// # Example
///
/// ```
/// use aas_semantics::error::{ErrorContext, Result};
/// use aas_semantics::model::Element;
///
/// fn parse(json: &str) -> Result<Element> {
///     Element::from_json(json).context("parsing submodel")
/// }
///
/// let err = parse("{").unwrap_err();
/// assert!(err.to_string().contains("parsing submodel"));
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    ///
    /// The context string is prepended to the error's existing context.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, only evaluated on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<SemanticsError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: SemanticsError, new_ctx: &str) -> SemanticsError {
    match err {
        SemanticsError::Document {
            context: existing,
            source,
        } => SemanticsError::Document {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SemanticsError::Io {
            path,
            message,
            source,
        } => SemanticsError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

// ============================================================================
// Document loading
// ============================================================================

/// Read a Submodel or SubmodelElement from an AAS JSON file.
///
/// The root must carry a `modelType`.
pub fn load_element(path: &Path) -> Result<Element> {
    let content = std::fs::read_to_string(path).map_err(|e| SemanticsError::io(path, e))?;
    let element = Element::from_json(&content)
        .with_context(|| format!("parsing {}", path.display()))?;

    if element.model_type().is_none() {
        return Err(SemanticsError::missing_model_type(path.display().to_string()));
    }
    Ok(element)
}
