//! Lookups over real-shaped AAS submodels loaded from `tests/fixtures/`.

use aas_semantics::{
    Element, TemplateCatalog, check_id_short, concept_description_lookup_ids,
    get_submodel_element_by_semantic_id, get_submodel_elements_by_semantic_id, load_element,
};
use std::path::PathBuf;

fn fixture(name: &str) -> Element {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    load_element(&path).unwrap_or_else(|e| panic!("failed to load {name}: {e}"))
}

fn id_short(element: Option<&Element>) -> Option<&str> {
    element.and_then(|e| e.id_short.as_deref())
}

#[test]
fn nameplate_properties_in_any_eclass_notation() {
    let nameplate = fixture("nameplate_submodel.json");

    // hash key, versionless hash target
    assert_eq!(
        id_short(get_submodel_element_by_semantic_id("0173-1#02-AAO677", &nameplate)),
        Some("ManufacturerName")
    );
    // slash key, versioned hash target
    assert_eq!(
        id_short(get_submodel_element_by_semantic_id("0173-1#02-AAW338#001", &nameplate)),
        Some("ManufacturerProductDesignation")
    );
    // URL key, versioned hash target
    assert_eq!(
        id_short(get_submodel_element_by_semantic_id("0173-1#02-AAM556#002", &nameplate)),
        Some("SerialNumber")
    );
    // URL key, versionless slash target
    assert_eq!(
        id_short(get_submodel_element_by_semantic_id("0173/1///02#AAM556", &nameplate)),
        Some("SerialNumber")
    );
    // other version
    assert!(get_submodel_element_by_semantic_id("0173-1#02-AAM556#003", &nameplate).is_none());
}

#[test]
fn nameplate_markings_collection() {
    let nameplate = fixture("nameplate_submodel.json");
    let markings = get_submodel_element_by_semantic_id(
        "https://admin-shell.io/zvei/nameplate/1/0/Nameplate/Markings",
        &nameplate,
    )
    .expect("Markings collection");

    let found = get_submodel_elements_by_semantic_id(
        "https://admin-shell.io/zvei/nameplate/1/0/Nameplate/Markings/Marking",
        markings,
    );
    let names: Vec<_> = found.iter().filter_map(|e| e.id_short.as_deref()).collect();
    assert_eq!(names, vec!["Marking00", "Marking01"]);
}

#[test]
fn lookups_do_not_descend_into_collections() {
    let nameplate = fixture("nameplate_submodel.json");
    assert!(get_submodel_element_by_semantic_id("0173-1#02-AAO198#002", &nameplate).is_none());

    let contact = get_submodel_element_by_semantic_id(
        "https://admin-shell.io/zvei/nameplate/1/0/ContactInformations/ContactInformation/",
        &nameplate,
    )
    .expect("ContactInformation collection");
    assert_eq!(
        id_short(get_submodel_element_by_semantic_id("0173-1#02-AAO198#002", contact)),
        Some("Email")
    );
}

#[test]
fn technical_properties_mixed_notations() {
    let technical_data = fixture("technical_data_submodel.json");
    let properties = get_submodel_element_by_semantic_id(
        "https://admin-shell.io/ZVEI/TechnicalData/TechnicalProperties/1/1",
        &technical_data,
    )
    .expect("TechnicalProperties collection");

    assert_eq!(
        id_short(get_submodel_element_by_semantic_id("0112/2///61987#ABN590", properties)),
        Some("RatedVoltage")
    );
    // unknown first key is skipped, the ECLASS key decides
    assert_eq!(
        id_short(get_submodel_element_by_semantic_id("0173/1///02#AAZ873", properties)),
        Some("MaxFlowRate")
    );
    // the unknown key still matches literally
    assert_eq!(
        id_short(get_submodel_element_by_semantic_id("urn:acme:pumps:max-flow-rate", properties)),
        Some("MaxFlowRate")
    );
}

#[test]
fn submodel_element_list_items() {
    let technical_data = fixture("technical_data_submodel.json");
    let properties = &technical_data.children()[0];
    let certifications =
        get_submodel_element_by_semantic_id("urn:acme:pumps:certifications", properties)
            .expect("Certifications list");

    let items = get_submodel_elements_by_semantic_id("urn:acme:pumps:certificate", certifications);
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|item| item.id_short.is_none()));
}

#[test]
fn leaf_elements_are_not_searched() {
    let technical_data = fixture("technical_data_submodel.json");
    let rated_voltage = &technical_data.children()[0].children()[0];
    assert!(
        get_submodel_elements_by_semantic_id("0112/2///61987#ABN590", rated_voltage).is_empty()
    );
}

#[test]
fn concept_description_lookup_ids_for_fixture_property() {
    let technical_data = fixture("technical_data_submodel.json");
    let max_flow_rate = &technical_data.children()[0].children()[1];

    assert_eq!(
        concept_description_lookup_ids(max_flow_rate),
        vec![
            "urn:acme:pumps:max-flow-rate",
            "0173-1#02-AAZ873#003",
            "0173/1///02#AAZ873#003",
            "https://api.eclass-cdp.com/0173-1-02-AAZ873-003",
        ]
    );
}

#[test]
fn template_catalog_identifies_fixtures() {
    let catalog = TemplateCatalog::with_builtins();

    let nameplate = fixture("nameplate_submodel.json");
    let found = catalog.identify(&nameplate);
    assert_eq!(found.len(), 1);
    assert_eq!((found[0].id_short.as_str(), found[0].version.as_str()), ("Nameplate", "2.0"));

    let technical_data = fixture("technical_data_submodel.json");
    let found = catalog.identify(&technical_data);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id_short, "TechnicalData");
}

#[test]
fn id_short_lookup_on_fixture() {
    let nameplate = fixture("nameplate_submodel.json");
    let markings = &nameplate.children()[4];
    assert!(check_id_short(markings, "markings", false, false));
    assert!(!check_id_short(markings, "markings", false, true));

    // instance names carry no multiplicity marker, so only the full name matches
    let marking = &markings.children()[0];
    assert!(check_id_short(marking, "Marking00", true, true));
    assert!(!check_id_short(marking, "Marking", true, true));
}
