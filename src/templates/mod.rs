//! Catalog of known submodel templates.
//!
//! Maps the semantic ids of published IDTA submodel templates to their name
//! and version so a loaded submodel can be identified. The built-in table
//! can be extended from the config file or from JSON.

use crate::matching::{Notation, check_semantic_id, check_semantic_id_iri};
use crate::model::{HasSemanticId, Key};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A published submodel template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmodelTemplate {
    /// Human-readable template name
    pub name: String,
    /// idShort the template prescribes for its submodel
    pub id_short: String,
    /// Semantic id of the template's submodel
    pub semantic_id: String,
    /// Template version, e.g. `2.0`
    pub version: String,
}

impl SubmodelTemplate {
    /// Create a template entry.
    pub fn new(
        name: impl Into<String>,
        id_short: impl Into<String>,
        semantic_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id_short: id_short.into(),
            semantic_id: semantic_id.into(),
            version: version.into(),
        }
    }

    /// Notation of the template's semantic id.
    #[must_use]
    pub fn notation(&self) -> Notation {
        Notation::classify(self.semantic_id.trim())
    }
}

/// Ordered collection of submodel templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateCatalog {
    templates: Vec<SubmodelTemplate>,
}

impl TemplateCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with the built-in IDTA templates.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        catalog.load_builtins();
        catalog
    }

    fn load_builtins(&mut self) {
        self.add(SubmodelTemplate::new(
            "Digital Nameplate for industrial equipment",
            "Nameplate",
            "https://admin-shell.io/zvei/nameplate/2/0/Nameplate",
            "2.0",
        ));
        self.add(SubmodelTemplate::new(
            "Digital Nameplate for industrial equipment",
            "Nameplate",
            "https://admin-shell.io/idta/nameplate/3/0/Nameplate",
            "3.0",
        ));
        self.add(SubmodelTemplate::new(
            "Carbon Footprint",
            "CarbonFootprint",
            "https://admin-shell.io/idta/CarbonFootprint/CarbonFootprint/0/9",
            "0.9",
        ));
        self.add(SubmodelTemplate::new(
            "Contact Informations",
            "ContactInformations",
            "https://admin-shell.io/zvei/nameplate/1/0/ContactInformations",
            "1.0",
        ));
        self.add(SubmodelTemplate::new(
            "Handover Documentation",
            "HandoverDocumentation",
            "0173-1#01-AHF578#001",
            "1.2",
        ));
        self.add(SubmodelTemplate::new(
            "Hierarchical Structures enabling Bills of Material",
            "HierarchicalStructures",
            "https://admin-shell.io/idta/HierarchicalStructures/1/0/Submodel",
            "1.0",
        ));
        self.add(SubmodelTemplate::new(
            "Hierarchical Structures enabling Bills of Material",
            "HierarchicalStructures",
            "https://admin-shell.io/idta/HierarchicalStructures/1/1/Submodel",
            "1.1",
        ));
        self.add(SubmodelTemplate::new(
            "Generic Frame for Technical Data for Industrial Equipment in Manufacturing",
            "TechnicalData",
            "https://admin-shell.io/ZVEI/TechnicalData/Submodel/1/2",
            "1.2",
        ));
        self.add(SubmodelTemplate::new(
            "Time Series Data",
            "TimeSeries",
            "https://admin-shell.io/idta/TimeSeries/1/1",
            "1.1",
        ));
    }

    /// Append a template.
    pub fn add(&mut self, template: SubmodelTemplate) {
        self.templates.push(template);
    }

    /// All templates in insertion order.
    #[must_use]
    pub fn templates(&self) -> &[SubmodelTemplate] {
        &self.templates
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Templates the given submodel (or reference) conforms to.
    ///
    /// A template qualifies when the element's semanticId matches the
    /// template's semantic id used as the target.
    #[must_use]
    pub fn identify<E: HasSemanticId + ?Sized>(&self, element: &E) -> Vec<&SubmodelTemplate> {
        self.templates
            .iter()
            .filter(|template| check_semantic_id(element, &template.semantic_id))
            .collect()
    }

    /// Templates whose semantic id, read as a candidate, matches `semantic_id`.
    ///
    /// A versionless target therefore lists every version of a template.
    #[must_use]
    pub fn find(&self, semantic_id: &str) -> Vec<&SubmodelTemplate> {
        self.templates
            .iter()
            .filter(|template| {
                let key = [Key::global(template.semantic_id.trim())];
                check_semantic_id(key.as_slice(), semantic_id)
            })
            .collect()
    }

    /// Templates sharing an idShort, ignoring case (all versions of one template).
    #[must_use]
    pub fn by_id_short(&self, id_short: &str) -> Vec<&SubmodelTemplate> {
        self.templates
            .iter()
            .filter(|template| template.id_short.eq_ignore_ascii_case(id_short.trim()))
            .collect()
    }

    /// Templates whose IRI semantic id starts with `prefix` (slash and case
    /// insensitive), e.g. every template published under one namespace.
    #[must_use]
    pub fn under_iri(&self, prefix: &str) -> Vec<&SubmodelTemplate> {
        self.templates
            .iter()
            .filter(|template| check_semantic_id_iri(&template.semantic_id, prefix))
            .collect()
    }

    /// Load additional templates from a JSON array.
    pub fn load_json(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let templates: Vec<SubmodelTemplate> = serde_json::from_str(json)?;
        self.extend(templates);
        Ok(())
    }

    /// Export the catalog as a JSON array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.templates)
    }
}

impl Extend<SubmodelTemplate> for TemplateCatalog {
    fn extend<I: IntoIterator<Item = SubmodelTemplate>>(&mut self, iter: I) {
        self.templates.extend(iter);
    }
}
