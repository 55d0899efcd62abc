#![no_main]
use aas_semantics::{
    Element, concept_description_lookup_ids, get_submodel_element_by_semantic_id,
    get_submodel_elements_by_semantic_id,
};
use libfuzzer_sys::fuzz_target;

/// Fuzz element parsing and the lookups on whatever parses.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data)
        && let Ok(element) = Element::from_json(s)
    {
        let _ = concept_description_lookup_ids(&element);
        let _ = get_submodel_element_by_semantic_id("0173-1#02-AAO677", &element);
        let _ = get_submodel_elements_by_semantic_id(
            "https://admin-shell.io/zvei/nameplate/2/0/Nameplate",
            &element,
        );
    }
});
