//! AAS element tree as read from JSON documents.
//!
//! Only the fields the matching engine needs are typed. Everything else is
//! kept in a flattened map so a document survives a read/write round trip.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One key of a reference, e.g. `{"type": "GlobalReference", "value": "0173-1#01-AHF578#001"}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Key {
    /// Key type as written in the document (`GlobalReference`, `ConceptDescription`, ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub key_type: Option<String>,
    /// The identifier carried by this key
    #[serde(default)]
    pub value: String,
}

impl Key {
    /// Create a key holding a global reference to `value`.
    pub fn global(value: impl Into<String>) -> Self {
        Self {
            key_type: Some("GlobalReference".to_string()),
            value: value.into(),
        }
    }
}

/// A reference (such as a `semanticId`): an ordered list of keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    /// `ExternalReference` or `ModelReference`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub reference_type: Option<String>,
    /// Keys in document order
    #[serde(default)]
    pub keys: Vec<Key>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Reference {
    /// External reference with a single global key.
    pub fn external(value: impl Into<String>) -> Self {
        Self {
            reference_type: Some("ExternalReference".to_string()),
            keys: vec![Key::global(value)],
            other: Map::new(),
        }
    }
}

/// Kinds of element the traversal helpers distinguish.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModelType {
    /// Children live in `submodelElements`
    Submodel,
    /// Children live in `value`
    SubmodelElementCollection,
    /// Children live in `value`
    SubmodelElementList,
    /// Any other `modelType` (Property, File, ...)
    Other(String),
}

impl ModelType {
    /// Parse a `modelType` string. Blank input yields `None`.
    #[must_use]
    pub fn parse(model_type: &str) -> Option<Self> {
        let model_type = model_type.trim();
        match model_type {
            "" => None,
            "Submodel" => Some(Self::Submodel),
            "SubmodelElementCollection" => Some(Self::SubmodelElementCollection),
            "SubmodelElementList" => Some(Self::SubmodelElementList),
            other => Some(Self::Other(other.to_string())),
        }
    }

    /// The `modelType` string for this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Submodel => "Submodel",
            Self::SubmodelElementCollection => "SubmodelElementCollection",
            Self::SubmodelElementList => "SubmodelElementList",
            Self::Other(name) => name,
        }
    }

    /// Whether elements of this kind hold child elements.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `value` of an element: a child list for collections and lists,
/// anything else for leaf elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementValue {
    /// Child elements
    Elements(Vec<Element>),
    /// Scalar or otherwise shaped value
    Other(Value),
}

/// A Submodel or SubmodelElement node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_short: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_id: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submodel_elements: Option<Vec<Element>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ElementValue>,
    /// Fields not interpreted by this crate
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Element {
    /// Create an element of the given `modelType`.
    pub fn new(model_type: impl Into<String>) -> Self {
        Self {
            model_type: Some(model_type.into()),
            ..Self::default()
        }
    }

    /// Set the idShort.
    #[must_use]
    pub fn with_id_short(mut self, id_short: impl Into<String>) -> Self {
        self.id_short = Some(id_short.into());
        self
    }

    /// Set a single-key external semanticId.
    #[must_use]
    pub fn with_semantic_id(mut self, semantic_id: impl Into<String>) -> Self {
        self.semantic_id = Some(Reference::external(semantic_id));
        self
    }

    /// Set the children in the slot matching this element's model type.
    ///
    /// Submodels receive `submodelElements`, every other kind `value`.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        if self.model_type() == Some(ModelType::Submodel) {
            self.submodel_elements = Some(children);
        } else {
            self.value = Some(ElementValue::Elements(children));
        }
        self
    }

    /// Parse an element from AAS JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Classified `modelType`, `None` when missing or blank.
    #[must_use]
    pub fn model_type(&self) -> Option<ModelType> {
        self.model_type.as_deref().and_then(ModelType::parse)
    }

    /// The immediate children searched by the semantic id lookups.
    ///
    /// Submodels expose `submodelElements`; collections and lists expose
    /// `value`. Every other element has no children.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self.model_type() {
            Some(ModelType::Submodel) => self.submodel_elements.as_deref().unwrap_or_default(),
            Some(ModelType::SubmodelElementCollection | ModelType::SubmodelElementList) => {
                match &self.value {
                    Some(ElementValue::Elements(children)) => children,
                    _ => &[],
                }
            }
            _ => &[],
        }
    }
}

/// Anything carrying semanticId keys.
pub trait HasSemanticId {
    /// The semanticId keys in document order (empty when absent).
    fn semantic_id_keys(&self) -> &[Key];
}

impl HasSemanticId for Element {
    fn semantic_id_keys(&self) -> &[Key] {
        self.semantic_id
            .as_ref()
            .map(|reference| reference.keys.as_slice())
            .unwrap_or_default()
    }
}

impl HasSemanticId for [Key] {
    fn semantic_id_keys(&self) -> &[Key] {
        self
    }
}

impl HasSemanticId for Reference {
    fn semantic_id_keys(&self) -> &[Key] {
        &self.keys
    }
}

impl<T: HasSemanticId + ?Sized> HasSemanticId for &T {
    fn semantic_id_keys(&self) -> &[Key] {
        (**self).semantic_id_keys()
    }
}

/// Value of the first semanticId key, if any.
#[must_use]
pub fn get_semantic_id_value<E: HasSemanticId + ?Sized>(element: &E) -> Option<&str> {
    element
        .semantic_id_keys()
        .first()
        .map(|key| key.value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUBMODEL_JSON: &str = r#"{
        "modelType": "Submodel",
        "id": "https://example.com/ids/sm/1",
        "idShort": "Nameplate",
        "semanticId": {
            "type": "ExternalReference",
            "keys": [{"type": "GlobalReference", "value": "https://admin-shell.io/zvei/nameplate/2/0/Nameplate"}]
        },
        "submodelElements": [
            {
                "modelType": "Property",
                "idShort": "ManufacturerName",
                "valueType": "xs:string",
                "value": "ACME",
                "semanticId": {"type": "ExternalReference", "keys": [{"type": "GlobalReference", "value": "0173-1#02-AAO677#002"}]}
            },
            {
                "modelType": "MultiLanguageProperty",
                "idShort": "ManufacturerProductDesignation",
                "value": [{"language": "en", "text": "Pump"}]
            }
        ]
    }"#;

    #[test]
    fn test_parse_submodel() {
        let submodel = Element::from_json(SUBMODEL_JSON).unwrap();
        assert_eq!(submodel.model_type(), Some(ModelType::Submodel));
        assert_eq!(submodel.children().len(), 2);
        assert_eq!(
            get_semantic_id_value(&submodel),
            Some("https://admin-shell.io/zvei/nameplate/2/0/Nameplate")
        );
        assert_eq!(
            submodel.other.get("id").and_then(Value::as_str),
            Some("https://example.com/ids/sm/1")
        );
    }

    #[test]
    fn test_leaf_value_is_kept() {
        let submodel = Element::from_json(SUBMODEL_JSON).unwrap();
        let property = &submodel.children()[0];
        assert_eq!(property.value, Some(ElementValue::Other(Value::from("ACME"))));
        assert!(property.children().is_empty());
    }

    #[test]
    fn test_round_trip_keeps_unknown_fields() {
        let submodel = Element::from_json(SUBMODEL_JSON).unwrap();
        let written = serde_json::to_value(&submodel).unwrap();
        let original: Value = serde_json::from_str(SUBMODEL_JSON).unwrap();
        assert_eq!(written, original);
    }

    #[test]
    fn test_collection_children() {
        let smc = Element::new("SubmodelElementCollection").with_children(vec![
            Element::new("Property").with_id_short("A"),
            Element::new("Property").with_id_short("B"),
        ]);
        assert_eq!(smc.children().len(), 2);
        assert!(smc.submodel_elements.is_none());

        let sm = Element::new("Submodel").with_children(vec![Element::new("Property")]);
        assert_eq!(sm.children().len(), 1);
        assert!(sm.value.is_none());
    }

    #[test]
    fn test_model_type_parse() {
        assert_eq!(ModelType::parse("  "), None);
        assert_eq!(
            ModelType::parse("SubmodelElementList"),
            Some(ModelType::SubmodelElementList)
        );
        assert_eq!(
            ModelType::parse("File"),
            Some(ModelType::Other("File".to_string()))
        );
        assert!(!ModelType::Other("File".to_string()).is_container());
    }

    #[test]
    fn test_semantic_id_value_absent() {
        assert_eq!(get_semantic_id_value(&Element::new("Property")), None);
        let empty_keys = Element {
            semantic_id: Some(Reference::default()),
            ..Element::default()
        };
        assert_eq!(get_semantic_id_value(&empty_keys), None);
    }

    #[test]
    fn test_semantic_id_value_of_reference() {
        let reference = Reference::external("0173-1#01-AHF578#001");
        assert_eq!(get_semantic_id_value(&reference), Some("0173-1#01-AHF578#001"));
    }
}
