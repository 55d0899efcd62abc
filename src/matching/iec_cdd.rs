//! IEC CDD IRDI checker.

use super::notation::IEC_CDD_PREFIX;
use super::version::has_iec_cdd_version;

/// Check whether an IEC CDD key value matches `semantic_id`.
///
/// Both sides must be IEC CDD IRDIs. A versioned target (`#NNN`) must equal
/// the key; a versionless target matches every key that starts with it.
#[must_use]
pub fn check_semantic_id_iec_cdd(key_value: &str, semantic_id: &str) -> bool {
    let semantic_id = semantic_id.trim();
    if semantic_id.is_empty() {
        return false;
    }

    if !semantic_id.starts_with(IEC_CDD_PREFIX) || !key_value.starts_with(IEC_CDD_PREFIX) {
        return false;
    }

    if has_iec_cdd_version(semantic_id) {
        key_value == semantic_id
    } else {
        key_value.starts_with(semantic_id)
    }
}
