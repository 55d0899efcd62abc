//! Generic IRI checker.

use super::equivalents::get_equivalent_iri_semantic_ids;
use super::notation::is_iri;
use super::version::has_iri_version;

/// Check whether an IRI key value matches `semantic_id`.
///
/// Both sides lose one trailing slash before comparing, and the key is then
/// compared in both its slash-terminated and unterminated forms, ignoring
/// case. A target with a `/<version>/<revision>` segment requires equality;
/// a versionless target matches any key that starts with it.
///
/// ```
/// use aas_semantics::matching::check_semantic_id_iri;
///
/// let versioned = "https://admin-shell.io/idta/CarbonFootprint/ProductCarbonFootprint/0/9/";
/// let versionless = "https://admin-shell.io/idta/CarbonFootprint/ProductCarbonFootprint";
/// assert!(check_semantic_id_iri(versioned, versionless));
/// assert!(!check_semantic_id_iri(versionless, versioned));
/// ```
#[must_use]
pub fn check_semantic_id_iri(key_value: &str, semantic_id: &str) -> bool {
    let semantic_id = semantic_id.trim();
    if semantic_id.is_empty() {
        return false;
    }

    if !is_iri(semantic_id) || !is_iri(key_value) {
        return false;
    }

    let key_value = key_value.strip_suffix('/').unwrap_or(key_value);
    let semantic_id = semantic_id.strip_suffix('/').unwrap_or(semantic_id);
    let target = semantic_id.to_lowercase();
    let equivalents = get_equivalent_iri_semantic_ids(key_value);

    if has_iri_version(semantic_id) {
        equivalents
            .iter()
            .any(|equivalent| equivalent.to_lowercase() == target)
    } else {
        equivalents
            .iter()
            .any(|equivalent| equivalent.to_lowercase().starts_with(&target))
    }
}
