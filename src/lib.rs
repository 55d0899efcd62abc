//! **Semantic identifier matching for Asset Administration Shells.**
//!
//! `aas-semantics` decides whether two AAS semantic identifiers denote the
//! same concept, even when one is written as an ECLASS IRDI in hash notation
//! and the other as an ECLASS URL, or when only one of them carries a
//! version. On top of that equivalence it finds elements by semantic id in
//! AAS JSON documents and identifies which IDTA submodel template a
//! submodel implements.
//!
//! ## Supported notations
//!
//! - **IEC CDD**: `0112/2///61987#ABN590#002`
//! - **ECLASS IRDI**: `0173-1#01-AHF578#001` and `0173/1///01#AHF578#001`
//! - **ECLASS URL**: `https://api.eclass-cdp.com/0173-1-01-AHF578-001`
//! - **IRI**: `https://admin-shell.io/zvei/nameplate/2/0/Nameplate`
//!
//! ## Core Concepts & Modules
//!
//! - **[`matching`]**: notation classification, the per-notation checkers,
//!   the cross-notation canonicalizer and the document lookups built on
//!   [`check_semantic_id`].
//! - **[`model`]**: the minimal AAS element tree ([`Element`], [`Reference`],
//!   [`Key`]) and the [`HasSemanticId`] trait the checkers accept.
//! - **[`templates`]**: the [`TemplateCatalog`] of known submodel templates.
//! - **[`config`]**: YAML configuration for the command-line tool.
//!
//! Matching is directional: the element's key is the candidate, the
//! argument is the target. A versionless target matches every version of a
//! concept; a versioned target only that version.
//!
//! ## Getting Started
//!
//! ```
//! use aas_semantics::{Element, check_semantic_id, get_submodel_elements_by_semantic_id};
//!
//! let markings = Element::new("SubmodelElementCollection").with_children(vec![
//!     Element::new("SubmodelElementCollection")
//!         .with_id_short("Marking00")
//!         .with_semantic_id("https://admin-shell.io/zvei/nameplate/1/0/Nameplate/Markings/Marking"),
//!     Element::new("Property")
//!         .with_id_short("Note")
//!         .with_semantic_id("0173-1#02-AAO677#002"),
//! ]);
//!
//! let found = get_submodel_elements_by_semantic_id(
//!     "https://admin-shell.io/zvei/nameplate/1/0/Nameplate/Markings/Marking/",
//!     &markings,
//! );
//! assert_eq!(found.len(), 1);
//!
//! // Same ECLASS concept in URL notation, without version
//! let note = &markings.children()[1];
//! assert!(check_semantic_id(note, "https://api.eclass-cdp.com/0173-1-02-AAO677"));
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // # Errors sections are not written for the CLI handlers
    clippy::missing_errors_doc,
    // Variable names like `key`/`keys` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod matching;
pub mod model;
pub mod templates;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, OutputFormat, Validatable};
pub use error::{ErrorContext, Result, SemanticsError, load_element};
pub use matching::{
    MatchExplanation, MatchRule, Notation, VersionRevision, check_semantic_id,
    check_semantic_id_eclass_irdi, check_semantic_id_eclass_irdi_url, check_semantic_id_iec_cdd,
    check_semantic_id_iri, concept_description_lookup_ids, explain_semantic_id,
    extract_version_revision, get_equivalent_eclass_semantic_ids,
    get_equivalent_iri_semantic_ids, get_submodel_element_by_semantic_id,
    get_submodel_elements_by_semantic_id,
};
pub use model::{Element, HasSemanticId, Key, ModelType, Reference, check_id_short, get_semantic_id_value};
pub use templates::{SubmodelTemplate, TemplateCatalog};
