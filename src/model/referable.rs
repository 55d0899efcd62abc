//! idShort matching for referable elements.

use super::element::Element;

/// Check whether an element's idShort matches `id_short`.
///
/// With `starts_with`, template multiplicity names also match: for
/// `ProductImage` both `ProductImage{00}` and `ProductImage__00__` qualify.
/// Comparison ignores case unless `strict` is set. Blank input and elements
/// without an idShort never match.
#[must_use]
pub fn check_id_short(element: &Element, id_short: &str, starts_with: bool, strict: bool) -> bool {
    if id_short.trim().is_empty() {
        return false;
    }

    let Some(element_id_short) = element
        .id_short
        .as_deref()
        .filter(|value| !value.trim().is_empty())
    else {
        return false;
    };

    let (element_id_short, id_short) = if strict {
        (element_id_short.to_string(), id_short.to_string())
    } else {
        (element_id_short.to_lowercase(), id_short.to_lowercase())
    };

    if element_id_short == id_short {
        return true;
    }

    starts_with
        && (element_id_short.starts_with(&format!("{id_short}{{"))
            || element_id_short.starts_with(&format!("{id_short}__")))
}
