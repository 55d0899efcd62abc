//! Cross-notation canonicalization.
//!
//! An ECLASS concept can be written as a hash IRDI, a slash IRDI or a CDP
//! URL. Each direction is a dedicated rewrite; there is no shared
//! intermediate form. IRIs are equivalent modulo one trailing slash.

use super::notation::{ECLASS_CDP_HOST, Notation, is_iri};
use regex::Regex;
use std::sync::LazyLock;

/// `-1#NN-` in a hash IRDI.
static HASH_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-1#([0-9]{2})-").expect("static regex"));

/// `/1///NN#` in a slash IRDI.
static SLASH_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/1///([0-9]{2})#").expect("static regex"));

/// `-1-NN-` in a CDP URL path.
static URL_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-1-([0-9]{2})-").expect("static regex"));

/// Trailing `-NNN` version in a CDP URL path.
static URL_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-([0-9]{3})$").expect("static regex"));

/// All three ECLASS notations of the given ECLASS identifier.
///
/// The input (trimmed) is always the first entry, followed by the two
/// rewritten forms. Returns an empty list for blank or non-ECLASS input.
/// The prefix is tested before trimming, so leading whitespace rejects the
/// input while trailing whitespace is dropped.
///
/// ```
/// use aas_semantics::matching::get_equivalent_eclass_semantic_ids;
///
/// assert_eq!(
///     get_equivalent_eclass_semantic_ids("0173-1#01-AHF578#001"),
///     vec![
///         "0173-1#01-AHF578#001",
///         "0173/1///01#AHF578#001",
///         "https://api.eclass-cdp.com/0173-1-01-AHF578-001",
///     ]
/// );
/// ```
#[must_use]
pub fn get_equivalent_eclass_semantic_ids(semantic_id: &str) -> Vec<String> {
    let notation = Notation::classify(semantic_id);
    let semantic_id = semantic_id.trim();
    if semantic_id.is_empty() {
        return Vec::new();
    }

    let derived = match notation {
        Notation::EclassHash => [hash_to_slash(semantic_id), hash_to_url(semantic_id)],
        Notation::EclassSlash => [slash_to_hash(semantic_id), slash_to_url(semantic_id)],
        Notation::EclassUrl => [url_to_hash(semantic_id), url_to_slash(semantic_id)],
        _ => return Vec::new(),
    };

    let mut semantic_ids = Vec::with_capacity(3);
    semantic_ids.push(semantic_id.to_string());
    semantic_ids.extend(derived);
    semantic_ids
}

/// The slash-terminated and slash-stripped forms of an IRI.
///
/// The input (trimmed) comes first. Returns an empty list for blank input
/// or anything not starting with `http://` or `https://`; as with ECLASS
/// ids, leading whitespace counts against the prefix.
#[must_use]
pub fn get_equivalent_iri_semantic_ids(semantic_id: &str) -> Vec<String> {
    if !is_iri(semantic_id) {
        return Vec::new();
    }
    let semantic_id = semantic_id.trim();

    let toggled = semantic_id
        .strip_suffix('/')
        .map_or_else(|| format!("{semantic_id}/"), str::to_string);

    vec![semantic_id.to_string(), toggled]
}

/// Equivalents for any identifier: ECLASS forms for ECLASS ids, slash
/// variants for other IRIs, nothing for the rest.
#[must_use]
pub fn get_equivalent_semantic_ids(semantic_id: &str) -> Vec<String> {
    match Notation::classify(semantic_id) {
        notation if notation.is_eclass() => get_equivalent_eclass_semantic_ids(semantic_id),
        Notation::Iri => get_equivalent_iri_semantic_ids(semantic_id),
        _ => Vec::new(),
    }
}

// 0173-1#01-AHF578#001 --> 0173/1///01#AHF578#001
fn hash_to_slash(id: &str) -> String {
    HASH_CLASS.replace(id, "/1///${1}#").into_owned()
}

// 0173-1#01-AHF578#001 --> https://api.eclass-cdp.com/0173-1-01-AHF578-001
fn hash_to_url(id: &str) -> String {
    format!("{ECLASS_CDP_HOST}{}", id.replace('#', "-"))
}

// 0173/1///01#AHF578#001 --> 0173-1#01-AHF578#001
fn slash_to_hash(id: &str) -> String {
    SLASH_CLASS.replace(id, "-1#${1}-").into_owned()
}

// 0173/1///01#AHF578#001 --> https://api.eclass-cdp.com/0173-1-01-AHF578-001
fn slash_to_url(id: &str) -> String {
    let dashed = SLASH_CLASS.replace(id, "-1-${1}-");
    format!("{ECLASS_CDP_HOST}{}", dashed.replace('#', "-"))
}

// https://api.eclass-cdp.com/0173-1-01-AHF578-001 --> 0173-1#01-AHF578#001
fn url_to_hash(id: &str) -> String {
    let path = id.replace(ECLASS_CDP_HOST, "");
    let classed = URL_CLASS.replace(&path, "-1#${1}-");
    URL_VERSION.replace(&classed, "#${1}").into_owned()
}

// https://api.eclass-cdp.com/0173-1-01-AHF578-001 --> 0173/1///01#AHF578#001
fn url_to_slash(id: &str) -> String {
    let path = id.replace(ECLASS_CDP_HOST, "");
    let classed = URL_CLASS.replace(&path, "/1///${1}#");
    URL_VERSION.replace(&classed, "#${1}").into_owned()
}
