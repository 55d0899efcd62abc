//! Decision table for `check_semantic_id` and the canonicalizers.
//!
//! Each row names the target (e.g. a ConceptDescription id), the candidate
//! carried by the element's semanticId and the expected result.

use aas_semantics::{
    Element, check_semantic_id, get_equivalent_eclass_semantic_ids,
    get_equivalent_iri_semantic_ids,
};

const IRI_WITH_SLASH: &str = "https://admin-shell.io/zvei/nameplate/2/0/Nameplate/";
const IRI_WITHOUT_SLASH: &str = "https://admin-shell.io/zvei/nameplate/2/0/Nameplate";
const IRI_VERSION_SLASH: &str =
    "https://admin-shell.io/idta/CarbonFootprint/ProductCarbonFootprint/0/9/";
const IRI_VERSION: &str = "https://admin-shell.io/idta/CarbonFootprint/ProductCarbonFootprint/0/9";
const IRI_NO_VERSION_SLASH: &str =
    "https://admin-shell.io/idta/CarbonFootprint/ProductCarbonFootprint/";
const IRI_NO_VERSION: &str = "https://admin-shell.io/idta/CarbonFootprint/ProductCarbonFootprint";
const IRI_SM_CONTACT_INFORMATIONS: &str =
    "https://admin-shell.io/zvei/nameplate/1/0/ContactInformations";
const IRI_SMC_CONTACT_INFORMATION: &str =
    "https://admin-shell.io/zvei/nameplate/1/0/ContactInformations/ContactInformation";

const ECLASS_IRDI_VERSION: &str = "0173-1#01-AHF578#001";
const ECLASS_IRDI: &str = "0173-1#01-AHF578";
const ECLASS_IRDI_CARDINALITY: &str = "0173-1#02-ABI502#001/0173-1#01-AHF581#001*02";
const ECLASS_IRDI_NO_CARDINALITY: &str = "0173-1#02-ABI502#001/0173-1#01-AHF581#001";
const ECLASS_SLASH_VERSION: &str = "0173/1///01#AHF578#001";
const ECLASS_SLASH: &str = "0173/1///01#AHF578";
const ECLASS_URL_VERSION: &str = "https://api.eclass-cdp.com/0173-1-01-AHF578-001";
const ECLASS_URL: &str = "https://api.eclass-cdp.com/0173-1-01-AHF578";
const ECLASS_URL_CARDINALITY: &str = "https://api.eclass-cdp.com/0173-1-01-AHF578-001~1";

const IEC_CDD_VERSION: &str = "0112/2///61987#ABN590#002";
const IEC_CDD: &str = "0112/2///61987#ABN590";

/// (case id, target, candidate, expected)
type Case = (&'static str, &'static str, &'static str, bool);

fn replay(cases: &[Case]) {
    for &(id, target, candidate, expected) in cases {
        let element = Element::new("Property").with_semantic_id(candidate);
        assert_eq!(
            check_semantic_id(&element, target),
            expected,
            "case {id}: candidate {candidate} vs target {target}"
        );
    }
}

#[test]
fn iri_cases() {
    replay(&[
        ("892c1774", IRI_SM_CONTACT_INFORMATIONS, IRI_SMC_CONTACT_INFORMATION, false),
        ("b38afe86", IRI_SMC_CONTACT_INFORMATION, IRI_SM_CONTACT_INFORMATIONS, false),
        ("82f1c855", IRI_WITH_SLASH, IRI_WITH_SLASH, true),
        ("6d5797cf", IRI_WITH_SLASH, IRI_WITHOUT_SLASH, true),
        ("f48684c9", IRI_WITHOUT_SLASH, IRI_WITHOUT_SLASH, true),
        ("49c01e4d", IRI_WITHOUT_SLASH, IRI_WITH_SLASH, true),
        ("bc8ee131", IRI_VERSION_SLASH, IRI_VERSION_SLASH, true),
        ("2a8bc0bc", IRI_VERSION_SLASH, IRI_VERSION, true),
        ("b185ff3a", IRI_VERSION, IRI_VERSION, true),
        ("876c4b9c", IRI_VERSION, IRI_VERSION_SLASH, true),
        ("9364aac9", IRI_NO_VERSION_SLASH, IRI_NO_VERSION_SLASH, true),
        ("7d2c5afb", IRI_NO_VERSION_SLASH, IRI_NO_VERSION, true),
        ("d0de3e76", IRI_NO_VERSION, IRI_NO_VERSION, true),
        ("068e2995", IRI_NO_VERSION, IRI_NO_VERSION_SLASH, true),
        ("49e94635", IRI_VERSION_SLASH, IRI_NO_VERSION_SLASH, false),
        ("4af49942", IRI_VERSION_SLASH, IRI_NO_VERSION, false),
        ("0270ef6e", IRI_VERSION, IRI_NO_VERSION_SLASH, false),
        ("a81bc8a5", IRI_VERSION, IRI_NO_VERSION, false),
        ("bf18a7e3", IRI_NO_VERSION_SLASH, IRI_VERSION_SLASH, true),
        ("dbb08069", IRI_NO_VERSION_SLASH, IRI_VERSION, true),
        ("cde326ae", IRI_NO_VERSION, IRI_VERSION_SLASH, true),
        ("37aaa79f", IRI_NO_VERSION, IRI_VERSION, true),
    ]);
}

#[test]
fn iec_cdd_cases() {
    replay(&[
        ("d6f94546", IEC_CDD_VERSION, IEC_CDD_VERSION, true),
        ("1daf6f2c", IEC_CDD, IEC_CDD, true),
        ("2c8d1ce5", IEC_CDD_VERSION, IEC_CDD, false),
        ("9662075d", IEC_CDD, IEC_CDD_VERSION, true),
    ]);
}

#[test]
fn eclass_irdi_hash_cases() {
    replay(&[
        ("24d16939", ECLASS_IRDI_VERSION, ECLASS_IRDI_VERSION, true),
        ("de06d9a2", ECLASS_IRDI, ECLASS_IRDI, true),
        ("fe537c60", ECLASS_IRDI_VERSION, ECLASS_IRDI, false),
        ("202b728f", ECLASS_IRDI, ECLASS_IRDI_VERSION, true),
    ]);
}

#[test]
fn eclass_irdi_cardinality_cases() {
    replay(&[
        ("ec1566eb", ECLASS_IRDI_CARDINALITY, ECLASS_IRDI_CARDINALITY, true),
        ("e3ee74ed", ECLASS_IRDI_NO_CARDINALITY, ECLASS_IRDI_NO_CARDINALITY, true),
        ("8418f0c3", ECLASS_IRDI_CARDINALITY, ECLASS_IRDI_NO_CARDINALITY, false),
        ("7db389a3", ECLASS_IRDI_NO_CARDINALITY, ECLASS_IRDI_CARDINALITY, true),
    ]);
}

#[test]
fn eclass_irdi_slash_cases() {
    replay(&[
        ("a487d056", ECLASS_SLASH_VERSION, ECLASS_SLASH_VERSION, true),
        ("574d916e", ECLASS_SLASH, ECLASS_SLASH, true),
        ("8dff5406", ECLASS_SLASH_VERSION, ECLASS_SLASH, false),
        ("b1780374", ECLASS_SLASH, ECLASS_SLASH_VERSION, true),
    ]);
}

#[test]
fn eclass_url_cases() {
    replay(&[
        ("e0c9a3a2", ECLASS_URL_VERSION, ECLASS_URL_VERSION, true),
        ("ec20a616", ECLASS_URL, ECLASS_URL, true),
        ("955ea7bb", ECLASS_URL_VERSION, ECLASS_URL, false),
        ("8c65b235", ECLASS_URL, ECLASS_URL_VERSION, true),
    ]);
}

#[test]
fn eclass_url_cardinality_cases() {
    replay(&[
        ("ec1566eb-url", ECLASS_URL_CARDINALITY, ECLASS_URL_CARDINALITY, true),
        ("e3ee74ed-url", ECLASS_URL, ECLASS_URL, true),
        ("8418f0c3-url", ECLASS_URL_CARDINALITY, ECLASS_URL, false),
        ("7db389a3-url", ECLASS_URL, ECLASS_URL_CARDINALITY, true),
    ]);
}

#[test]
fn eclass_hash_vs_slash_cases() {
    replay(&[
        ("4b0dfe5e", ECLASS_IRDI_VERSION, ECLASS_SLASH_VERSION, true),
        ("7d421d96", ECLASS_SLASH_VERSION, ECLASS_IRDI_VERSION, true),
        ("6dd5d815", ECLASS_IRDI, ECLASS_SLASH, true),
        ("4fafecca", ECLASS_SLASH, ECLASS_IRDI, true),
        ("508e6c73", ECLASS_IRDI_VERSION, ECLASS_SLASH, false),
        ("a1052a73", ECLASS_SLASH, ECLASS_IRDI_VERSION, true),
        ("fbdf6322", ECLASS_IRDI, ECLASS_SLASH_VERSION, true),
        ("525ec3a2", ECLASS_SLASH_VERSION, ECLASS_IRDI, false),
    ]);
}

#[test]
fn eclass_hash_vs_url_cases() {
    replay(&[
        ("66deb956", ECLASS_IRDI_VERSION, ECLASS_URL_VERSION, true),
        ("71802bad", ECLASS_URL_VERSION, ECLASS_IRDI_VERSION, true),
        ("23299e0d", ECLASS_IRDI, ECLASS_URL, true),
        ("05f230df", ECLASS_URL, ECLASS_IRDI, true),
        ("4e4cf96e", ECLASS_IRDI_VERSION, ECLASS_URL, false),
        ("f8ccc6c0", ECLASS_URL, ECLASS_IRDI_VERSION, true),
        ("167fcf54", ECLASS_IRDI, ECLASS_URL_VERSION, true),
        ("6b12c5d7", ECLASS_URL_VERSION, ECLASS_IRDI, false),
    ]);
}

#[test]
fn eclass_slash_vs_url_cases() {
    replay(&[
        ("5bb7ed0f", ECLASS_SLASH_VERSION, ECLASS_URL_VERSION, true),
        ("19c3b5d2", ECLASS_URL_VERSION, ECLASS_SLASH_VERSION, true),
        ("5a745b0a", ECLASS_SLASH, ECLASS_URL, true),
        ("ba320f14", ECLASS_URL, ECLASS_SLASH, true),
        ("9207df96", ECLASS_SLASH_VERSION, ECLASS_URL, false),
        ("76fc30f2", ECLASS_URL, ECLASS_SLASH_VERSION, true),
        ("a24cda5d", ECLASS_SLASH, ECLASS_URL_VERSION, true),
        ("6c1845d8", ECLASS_URL_VERSION, ECLASS_SLASH, false),
    ]);
}

#[test]
fn eclass_equivalents_table() {
    let cases: &[(&str, &[&str])] = &[
        (
            "0173-1#01-AHF578#001",
            &[
                "0173-1#01-AHF578#001",
                "0173/1///01#AHF578#001",
                "https://api.eclass-cdp.com/0173-1-01-AHF578-001",
            ],
        ),
        (
            "0173-1#01-AHF578",
            &[
                "0173-1#01-AHF578",
                "0173/1///01#AHF578",
                "https://api.eclass-cdp.com/0173-1-01-AHF578",
            ],
        ),
    ];

    for (input, expected) in cases {
        let mut actual = get_equivalent_eclass_semantic_ids(input);
        actual.sort();
        let mut expected = expected.to_vec();
        expected.sort_unstable();
        assert_eq!(actual, expected, "equivalents of {input}");
    }
}

#[test]
fn eclass_equivalents_from_every_notation_agree() {
    let mut from_hash = get_equivalent_eclass_semantic_ids(ECLASS_IRDI_VERSION);
    let mut from_slash = get_equivalent_eclass_semantic_ids(ECLASS_SLASH_VERSION);
    let mut from_url = get_equivalent_eclass_semantic_ids(ECLASS_URL_VERSION);
    from_hash.sort();
    from_slash.sort();
    from_url.sort();
    assert_eq!(from_hash, from_slash);
    assert_eq!(from_hash, from_url);
}

#[test]
fn iri_equivalents_table() {
    for input in [IRI_WITH_SLASH, IRI_WITHOUT_SLASH] {
        let mut actual = get_equivalent_iri_semantic_ids(input);
        actual.sort();
        assert_eq!(
            actual,
            vec![IRI_WITHOUT_SLASH.to_string(), IRI_WITH_SLASH.to_string()],
            "equivalents of {input}"
        );
    }
}

#[test]
fn canonicalizers_reject_other_notations() {
    assert!(get_equivalent_eclass_semantic_ids(IEC_CDD_VERSION).is_empty());
    assert!(get_equivalent_eclass_semantic_ids(IRI_WITH_SLASH).is_empty());
    assert!(get_equivalent_eclass_semantic_ids("").is_empty());
    assert!(get_equivalent_iri_semantic_ids(ECLASS_IRDI_VERSION).is_empty());
    assert!(get_equivalent_iri_semantic_ids("").is_empty());
}
