//! Semantic id lookups over an element tree.
//!
//! The lookups scan the immediate children of a Submodel,
//! SubmodelElementCollection or SubmodelElementList. They do not recurse.

use super::check_semantic_id;
use super::equivalents::get_equivalent_semantic_ids;
use crate::model::{Element, HasSemanticId};
use indexmap::IndexSet;

/// First child of `container` whose semanticId matches `semantic_id`.
///
/// Returns `None` for a blank target, a container without a recognized
/// container `modelType`, or when no child matches.
#[must_use]
pub fn get_submodel_element_by_semantic_id<'a>(
    semantic_id: &str,
    container: &'a Element,
) -> Option<&'a Element> {
    let semantic_id = semantic_id.trim();
    if semantic_id.is_empty() || !is_searchable(container) {
        return None;
    }

    let found = container
        .children()
        .iter()
        .find(|child| check_semantic_id(*child, semantic_id));

    tracing::debug!(
        target_id = semantic_id,
        container = container.id_short.as_deref().unwrap_or_default(),
        found = found.is_some(),
        "semantic id lookup"
    );
    found
}

/// All children of `container` whose semanticId matches `semantic_id`, in
/// document order.
///
/// Returns an empty list for a blank target, a container without a
/// recognized container `modelType`, or when no child matches.
#[must_use]
pub fn get_submodel_elements_by_semantic_id<'a>(
    semantic_id: &str,
    container: &'a Element,
) -> Vec<&'a Element> {
    let semantic_id = semantic_id.trim();
    if semantic_id.is_empty() || !is_searchable(container) {
        return Vec::new();
    }

    let found: Vec<&Element> = container
        .children()
        .iter()
        .filter(|child| check_semantic_id(*child, semantic_id))
        .collect();

    tracing::debug!(
        target_id = semantic_id,
        container = container.id_short.as_deref().unwrap_or_default(),
        count = found.len(),
        "semantic id lookup"
    );
    found
}

/// Every identifier under which a concept description for `element` may be
/// stored.
///
/// Starts with the element's own key values, followed by the equivalent
/// notations of ECLASS and IRI keys. Blank keys are skipped and duplicates
/// removed, keeping first-seen order.
#[must_use]
pub fn concept_description_lookup_ids<E: HasSemanticId + ?Sized>(element: &E) -> Vec<String> {
    let keys = element.semantic_id_keys();
    let values = keys
        .iter()
        .map(|key| key.value.trim())
        .filter(|value| !value.is_empty());

    let mut ids: IndexSet<String> = values.clone().map(str::to_string).collect();
    for value in values {
        ids.extend(get_equivalent_semantic_ids(value));
    }

    ids.into_iter().collect()
}

fn is_searchable(container: &Element) -> bool {
    container
        .model_type()
        .is_some_and(|model_type| model_type.is_container())
}
