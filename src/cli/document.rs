//! Handlers for commands that read an AAS element from a JSON file:
//! `find`, `lookup-ids` and `templates`.

use super::output::{TextReport, write_report};
use crate::config::AppConfig;
use crate::error::{SemanticsError, load_element};
use crate::matching::{
    concept_description_lookup_ids, get_submodel_element_by_semantic_id,
    get_submodel_elements_by_semantic_id,
};
use crate::model::{Element, get_semantic_id_value};
use crate::templates::SubmodelTemplate;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// An element as listed in command output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSummary {
    pub id_short: Option<String>,
    pub model_type: Option<String>,
    pub semantic_id: Option<String>,
}

impl From<&Element> for ElementSummary {
    fn from(element: &Element) -> Self {
        Self {
            id_short: element.id_short.clone(),
            model_type: element.model_type.clone(),
            semantic_id: get_semantic_id_value(element).map(str::to_string),
        }
    }
}

impl ElementSummary {
    fn line(&self) -> String {
        format!(
            "{}\t{}\t{}",
            self.id_short.as_deref().unwrap_or("-"),
            self.model_type.as_deref().unwrap_or("-"),
            self.semantic_id.as_deref().unwrap_or("-"),
        )
    }
}

// ============================================================================
// find
// ============================================================================

/// Result of the `find` command.
#[derive(Debug, Serialize)]
pub struct FindReport {
    pub container: ElementSummary,
    pub target: String,
    pub matches: Vec<ElementSummary>,
}

impl TextReport for FindReport {
    fn to_text(&self) -> String {
        self.matches
            .iter()
            .map(ElementSummary::line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Search the children of the container stored at `path` for `target`.
///
/// Without `all` only the first match is reported. Returns the process exit
/// code: 1 when nothing matched and `behavior.fail_on_no_match` is set.
pub fn run_find<W: Write + ?Sized>(
    path: &Path,
    target: &str,
    all: bool,
    config: &AppConfig,
    writer: &mut W,
) -> Result<i32> {
    let container = load_element(path)?;
    if let Some(model_type) = container.model_type()
        && !model_type.is_container()
    {
        return Err(SemanticsError::not_a_container(model_type.as_str()).into());
    }

    let matches: Vec<&Element> = if all {
        get_submodel_elements_by_semantic_id(target, &container)
    } else {
        get_submodel_element_by_semantic_id(target, &container)
            .into_iter()
            .collect()
    };

    let report = FindReport {
        container: ElementSummary::from(&container),
        target: target.trim().to_string(),
        matches: matches.into_iter().map(ElementSummary::from).collect(),
    };
    if report.matches.is_empty() && !config.behavior.quiet {
        tracing::info!("No element matches {}", report.target);
    }
    write_report(&report, &config.output, writer)?;

    Ok(i32::from(
        report.matches.is_empty() && config.behavior.fail_on_no_match,
    ))
}

// ============================================================================
// lookup-ids
// ============================================================================

/// Result of the `lookup-ids` command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupIdsReport {
    pub element: ElementSummary,
    pub lookup_ids: Vec<String>,
}

impl TextReport for LookupIdsReport {
    fn to_text(&self) -> String {
        self.lookup_ids.join("\n")
    }
}

/// Print the identifiers under which the concept description of the element
/// at `path` may be stored.
pub fn run_lookup_ids<W: Write + ?Sized>(
    path: &Path,
    config: &AppConfig,
    writer: &mut W,
) -> Result<()> {
    let element = load_element(path)?;
    let report = LookupIdsReport {
        lookup_ids: concept_description_lookup_ids(&element),
        element: ElementSummary::from(&element),
    };
    write_report(&report, &config.output, writer)
}

// ============================================================================
// templates
// ============================================================================

/// Result of the `templates` command.
#[derive(Debug, Serialize)]
pub struct TemplatesReport {
    pub templates: Vec<SubmodelTemplate>,
}

impl TextReport for TemplatesReport {
    fn to_text(&self) -> String {
        self.templates
            .iter()
            .map(|t| format!("{} {}\t{}", t.id_short, t.version, t.semantic_id))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// List the configured template catalog.
///
/// With `target`, only templates whose semantic id matches it are listed;
/// with `document`, only templates the loaded submodel conforms to.
pub fn run_templates<W: Write + ?Sized>(
    target: Option<&str>,
    document: Option<&Path>,
    config: &AppConfig,
    writer: &mut W,
) -> Result<()> {
    let catalog = config.templates.catalog();
    let submodel = document.map(load_element).transpose()?;

    let templates: Vec<SubmodelTemplate> = catalog
        .templates()
        .iter()
        .filter(|t| target.is_none_or(|target| catalog.find(target).contains(t)))
        .filter(|t| {
            submodel
                .as_ref()
                .is_none_or(|submodel| catalog.identify(submodel).contains(t))
        })
        .cloned()
        .collect();

    tracing::debug!("{} of {} templates selected", templates.len(), catalog.len());
    write_report(&TemplatesReport { templates }, &config.output, writer)
}
