//! Semantic identifier equivalence and matching engine.
//!
//! Decides whether two semantic identifiers name the same concept even when
//! they are written in different notations or with and without a version.
//!
//! # Architecture
//!
//! Matching runs leaf-first:
//!
//! - [`Notation`]: prefix classification of an identifier
//! - per-notation checkers ([`check_semantic_id_iri`],
//!   [`check_semantic_id_eclass_irdi`], [`check_semantic_id_eclass_irdi_url`],
//!   [`check_semantic_id_iec_cdd`]) with their own version rules
//! - the canonicalizer ([`get_equivalent_eclass_semantic_ids`],
//!   [`get_equivalent_iri_semantic_ids`]) the checkers use to compare across
//!   notations
//! - [`check_semantic_id`], which routes an element's keys to a checker, and
//!   the lookup helpers built on it
//!
//! Matching is directional. The element's key is the candidate and the
//! second argument is the target: a versionless target matches any version
//! of the concept, a versioned target only that version.
//!
//! Every function is pure and total. Blank targets and unrecognized input
//! produce `false` or an empty result, never an error.
//!
//! # Example
//!
//! ```
//! use aas_semantics::matching::check_semantic_id;
//! use aas_semantics::model::Element;
//!
//! let element = Element::new("Property").with_semantic_id("0173/1///01#AHF578#001");
//!
//! assert!(check_semantic_id(&element, "0173-1#01-AHF578#001"));
//! assert!(check_semantic_id(&element, "https://api.eclass-cdp.com/0173-1-01-AHF578"));
//! assert!(!check_semantic_id(&element, "0173-1#01-AHF578#002"));
//! ```

mod eclass;
mod equivalents;
mod explain;
mod iec_cdd;
mod iri;
mod lookup;
mod notation;
mod version;

pub use eclass::{check_semantic_id_eclass_irdi, check_semantic_id_eclass_irdi_url};
pub use equivalents::{
    get_equivalent_eclass_semantic_ids, get_equivalent_iri_semantic_ids,
    get_equivalent_semantic_ids,
};
pub use explain::{MatchExplanation, MatchRule, explain_semantic_id};
pub use iec_cdd::check_semantic_id_iec_cdd;
pub use iri::check_semantic_id_iri;
pub use lookup::{
    concept_description_lookup_ids, get_submodel_element_by_semantic_id,
    get_submodel_elements_by_semantic_id,
};
pub use notation::{
    ECLASS_CDP_HOST, ECLASS_HASH_PREFIX, ECLASS_SLASH_PREFIX, ECLASS_URL_PREFIX, IEC_CDD_PREFIX,
    Notation, is_eclass, is_iri,
};
pub use version::{VersionRevision, extract_version_revision};

use crate::model::HasSemanticId;

/// Check whether the semanticId of `element` matches `semantic_id`.
///
/// Keys are visited in order. The first key written in a recognized
/// notation decides the outcome through that notation's checker. Keys of
/// unknown notation only ever produce a match by exact equality, otherwise
/// the next key is tried.
#[must_use]
pub fn check_semantic_id<E: HasSemanticId + ?Sized>(element: &E, semantic_id: &str) -> bool {
    matches!(decide(element, semantic_id), Decision::Decided { matched: true, .. })
}

/// Outcome of routing an element's keys against a target.
pub(crate) enum Decision<'a> {
    EmptyTarget,
    NoKeys,
    /// Only unknown-notation keys, none equal to the target
    NoLiteralMatch { last_key: &'a str },
    Decided {
        key: &'a str,
        notation: Notation,
        matched: bool,
    },
}

pub(crate) fn decide<'a, E: HasSemanticId + ?Sized>(
    element: &'a E,
    semantic_id: &str,
) -> Decision<'a> {
    let semantic_id = semantic_id.trim();
    if semantic_id.is_empty() {
        return Decision::EmptyTarget;
    }

    let keys = element.semantic_id_keys();
    let Some(last) = keys.last() else {
        return Decision::NoKeys;
    };

    for key in keys {
        let key_value = key.value.as_str();
        let notation = Notation::classify(key_value);
        let matched = match notation {
            Notation::IecCdd => check_semantic_id_iec_cdd(key_value, semantic_id),
            Notation::EclassHash | Notation::EclassSlash => {
                check_semantic_id_eclass_irdi(key_value, semantic_id)
            }
            Notation::EclassUrl => check_semantic_id_eclass_irdi_url(key_value, semantic_id),
            Notation::Iri => check_semantic_id_iri(key_value, semantic_id),
            Notation::Unknown => {
                if key_value == semantic_id {
                    true
                } else {
                    continue;
                }
            }
        };

        tracing::debug!(
            key = key_value,
            %notation,
            target_id = semantic_id,
            matched,
            "semantic id decided"
        );
        return Decision::Decided {
            key: key_value,
            notation,
            matched,
        };
    }

    Decision::NoLiteralMatch {
        last_key: last.value.as_str(),
    }
}
