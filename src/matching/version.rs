//! Version, revision and cardinality detection.
//!
//! All patterns are compiled once and shared. Digit classes are spelled
//! `[0-9]` because identifiers only ever carry ASCII digits.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// `.../<version>/<revision>` followed by a slash or the end of the id.
static VERSION_REVISION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/([0-9]+)/([0-9]+)(?:/|$)").expect("static regex"));

/// Trailing `#NNN` or `-NNN` version segment.
static VERSION_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[#-][0-9]{3}$").expect("static regex"));

/// Trailing version segment followed by an IRDI cardinality marker (`#001*02`).
static VERSION_CARDINALITY_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[#-][0-9]{3}\*[0-9]+$").expect("static regex"));

/// Trailing version segment followed by a CDP URL cardinality marker (`-001~1`).
static URL_VERSION_CARDINALITY_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[#-][0-9]{3}~[0-9]+$").expect("static regex"));

/// Two-digit IRDI cardinality marker at the very end (`*02`).
static CARDINALITY_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*[0-9]{2}$").expect("static regex"));

/// IRI path ending in `/<version>/<revision>` (optionally slash-terminated).
static IRI_VERSION_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/[0-9]+/[0-9]+/?$").expect("static regex"));

/// IRI path with `/<version>/<revision>/` somewhere in the middle.
static IRI_VERSION_INNER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/[0-9]+/[0-9]+/").expect("static regex"));

/// Version and revision read from an IRI path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRevision {
    /// Version segment, empty if none was found
    pub version: String,
    /// Revision segment, empty if none was found
    pub revision: String,
}

impl VersionRevision {
    /// Whether a version/revision pair was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.version.is_empty() && self.revision.is_empty()
    }
}

/// Extract the first `/<version>/<revision>` pair of an identifier.
///
/// Returns empty strings for both fields when the id is blank or carries no
/// such segment.
#[must_use]
pub fn extract_version_revision(semantic_id: &str) -> VersionRevision {
    let semantic_id = semantic_id.trim();
    if semantic_id.is_empty() {
        return VersionRevision::default();
    }

    VERSION_REVISION
        .captures(semantic_id)
        .map(|caps| VersionRevision {
            version: caps.get(1).map_or_else(String::new, |m| m.as_str().to_string()),
            revision: caps.get(2).map_or_else(String::new, |m| m.as_str().to_string()),
        })
        .unwrap_or_default()
}

/// ECLASS IRDI (hash or slash) target carrying a version, with or without `*N` cardinality.
pub(crate) fn has_eclass_irdi_version(id: &str) -> bool {
    VERSION_TAIL.is_match(id) || VERSION_CARDINALITY_TAIL.is_match(id)
}

/// ECLASS CDP URL target carrying a version, with or without `~N` cardinality.
pub(crate) fn has_eclass_url_version(id: &str) -> bool {
    VERSION_TAIL.is_match(id) || URL_VERSION_CARDINALITY_TAIL.is_match(id)
}

/// IEC CDD target carrying a version.
pub(crate) fn has_iec_cdd_version(id: &str) -> bool {
    VERSION_TAIL.is_match(id)
}

/// IRI carrying a `/<version>/<revision>` segment at the end or mid-path.
pub(crate) fn has_iri_version(id: &str) -> bool {
    IRI_VERSION_TAIL.is_match(id) || IRI_VERSION_INNER.is_match(id)
}

/// The id without its trailing `*NN` cardinality marker, if it has one.
pub(crate) fn strip_cardinality(id: &str) -> Option<&str> {
    CARDINALITY_SUFFIX
        .find(id)
        .map(|suffix| &id[..suffix.start()])
}
