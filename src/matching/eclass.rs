//! ECLASS IRDI and ECLASS CDP URL checkers.

use super::equivalents::get_equivalent_eclass_semantic_ids;
use super::notation::Notation;
use super::version::{has_eclass_irdi_version, has_eclass_url_version, strip_cardinality};

/// Check whether an ECLASS IRDI key value (hash or slash notation) matches `semantic_id`.
///
/// A versioned target must equal one of the key's equivalent notations. A
/// versionless target matches when any equivalent notation starts with it,
/// so it accepts every version of the concept. A `*NN` cardinality marker
/// on a hash key is removed before comparing, and so is one on the target.
/// A target without its own marker is never shortened: cutting its last
/// three characters unconditionally would let `...#001*02` match `...#002`.
#[must_use]
pub fn check_semantic_id_eclass_irdi(key_value: &str, semantic_id: &str) -> bool {
    let semantic_id = semantic_id.trim();
    if semantic_id.is_empty() {
        return false;
    }

    match Notation::classify(key_value) {
        Notation::EclassHash => match strip_cardinality(key_value) {
            Some(key_value) => {
                let semantic_id = strip_cardinality(semantic_id).unwrap_or(semantic_id);
                matches_eclass_irdi(key_value, semantic_id)
            }
            None => matches_eclass_irdi(key_value, semantic_id),
        },
        Notation::EclassSlash => matches_eclass_irdi(key_value, semantic_id),
        _ => false,
    }
}

/// Check whether an ECLASS CDP URL key value matches `semantic_id`.
///
/// For a versioned target (`-NNN`, optionally `~N`), the key must be one of
/// the target's equivalent notations. A versionless target matches by prefix
/// against the key's equivalents.
#[must_use]
pub fn check_semantic_id_eclass_irdi_url(key_value: &str, semantic_id: &str) -> bool {
    let semantic_id = semantic_id.trim();
    if semantic_id.is_empty() {
        return false;
    }

    if Notation::classify(key_value) != Notation::EclassUrl {
        return false;
    }

    if has_eclass_url_version(semantic_id) {
        return get_equivalent_eclass_semantic_ids(semantic_id)
            .iter()
            .any(|equivalent| equivalent == key_value);
    }

    get_equivalent_eclass_semantic_ids(key_value)
        .iter()
        .any(|equivalent| equivalent.starts_with(semantic_id))
}

fn matches_eclass_irdi(key_value: &str, semantic_id: &str) -> bool {
    let equivalents = get_equivalent_eclass_semantic_ids(key_value);

    if has_eclass_irdi_version(semantic_id) {
        equivalents.iter().any(|equivalent| equivalent == semantic_id)
    } else {
        equivalents
            .iter()
            .any(|equivalent| equivalent.starts_with(semantic_id))
    }
}
