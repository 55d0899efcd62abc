#![no_main]
use aas_semantics::{
    Element, check_semantic_id, explain_semantic_id, extract_version_revision,
    get_equivalent_eclass_semantic_ids, get_equivalent_iri_semantic_ids,
};
use libfuzzer_sys::fuzz_target;

/// Fuzz the checkers and canonicalizers.
///
/// The input is split at the first newline into candidate and target.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let (candidate, target) = s.split_once('\n').unwrap_or((s, s));
        let element = Element::new("Property").with_semantic_id(candidate);

        let matched = check_semantic_id(&element, target);
        assert_eq!(explain_semantic_id(&element, target).is_match, matched);

        let _ = get_equivalent_eclass_semantic_ids(candidate);
        let _ = get_equivalent_iri_semantic_ids(candidate);
        let _ = extract_version_revision(target);
    }
});
