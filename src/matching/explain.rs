//! Human-readable explanations of semantic id decisions.
//!
//! Useful for auditing why a template or element lookup picked (or skipped)
//! an element.

use super::notation::{IEC_CDD_PREFIX, Notation, is_eclass, is_iri};
use super::version::{
    has_eclass_irdi_version, has_eclass_url_version, has_iec_cdd_version, has_iri_version,
};
use super::{Decision, decide};
use crate::model::HasSemanticId;
use serde::Serialize;

/// The comparison rule applied to reach a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchRule {
    /// Target carries a version: only the same version in an equivalent notation matches
    VersionedExact,
    /// Target carries no version: any version of the concept matches
    VersionlessPrefix,
    /// Key of unknown notation compared by string equality
    Literal,
    /// Target is not written in a notation the key's checker accepts
    NotationMismatch,
    /// Target was blank
    EmptyTarget,
    /// Element has no semanticId keys
    NoKeys,
}

impl MatchRule {
    /// Pick the rule a checker for `notation` applies to `semantic_id`.
    #[must_use]
    pub fn for_target(notation: Notation, semantic_id: &str) -> Self {
        let semantic_id = semantic_id.trim();
        if semantic_id.is_empty() {
            return Self::EmptyTarget;
        }

        let versioned = match notation {
            Notation::IecCdd => {
                if !semantic_id.starts_with(IEC_CDD_PREFIX) {
                    return Self::NotationMismatch;
                }
                has_iec_cdd_version(semantic_id)
            }
            Notation::EclassHash | Notation::EclassSlash | Notation::EclassUrl
                if !is_eclass(semantic_id) =>
            {
                return Self::NotationMismatch;
            }
            Notation::EclassHash | Notation::EclassSlash => has_eclass_irdi_version(semantic_id),
            Notation::EclassUrl => has_eclass_url_version(semantic_id),
            Notation::Iri => {
                if !is_iri(semantic_id) {
                    return Self::NotationMismatch;
                }
                has_iri_version(semantic_id.strip_suffix('/').unwrap_or(semantic_id))
            }
            Notation::Unknown => return Self::Literal,
        };

        if versioned {
            Self::VersionedExact
        } else {
            Self::VersionlessPrefix
        }
    }

    /// Short description of the rule.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::VersionedExact => "versioned target, exact match across notations",
            Self::VersionlessPrefix => "versionless target, any version matches",
            Self::Literal => "unrecognized notation, literal comparison",
            Self::NotationMismatch => "target notation not accepted for this key",
            Self::EmptyTarget => "blank target",
            Self::NoKeys => "element has no semanticId keys",
        }
    }
}

/// Why an element's semanticId did or did not match a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchExplanation {
    /// The target semantic id (trimmed)
    pub semantic_id: String,
    /// The key value that decided the outcome, if any
    pub key: Option<String>,
    /// Notation of the deciding key
    pub notation: Option<Notation>,
    /// Rule applied
    pub rule: MatchRule,
    /// Final decision, always equal to `check_semantic_id`
    pub is_match: bool,
}

impl MatchExplanation {
    /// One-line summary of the decision.
    #[must_use]
    pub fn summary(&self) -> String {
        let verdict = if self.is_match { "MATCH" } else { "NO MATCH" };
        match (&self.key, self.notation) {
            (Some(key), Some(notation)) => format!(
                "{verdict}: {key} ({notation}) vs {} - {}",
                self.semantic_id,
                self.rule.description()
            ),
            _ => format!("{verdict}: {}", self.rule.description()),
        }
    }
}

/// Explain the outcome of [`check_semantic_id`](super::check_semantic_id).
#[must_use]
pub fn explain_semantic_id<E: HasSemanticId + ?Sized>(
    element: &E,
    semantic_id: &str,
) -> MatchExplanation {
    let target = semantic_id.trim().to_string();

    match decide(element, semantic_id) {
        Decision::EmptyTarget => MatchExplanation {
            semantic_id: target,
            key: None,
            notation: None,
            rule: MatchRule::EmptyTarget,
            is_match: false,
        },
        Decision::NoKeys => MatchExplanation {
            semantic_id: target,
            key: None,
            notation: None,
            rule: MatchRule::NoKeys,
            is_match: false,
        },
        Decision::NoLiteralMatch { last_key } => MatchExplanation {
            semantic_id: target,
            key: Some(last_key.to_string()),
            notation: Some(Notation::Unknown),
            rule: MatchRule::Literal,
            is_match: false,
        },
        Decision::Decided {
            key,
            notation,
            matched,
        } => MatchExplanation {
            rule: match MatchRule::for_target(notation, &target) {
                // a truncated id such as `0173-1` still matches an ECLASS key by prefix
                MatchRule::NotationMismatch if matched => MatchRule::VersionlessPrefix,
                rule => rule,
            },
            semantic_id: target,
            key: Some(key.to_string()),
            notation: Some(notation),
            is_match: matched,
        },
    }
}
