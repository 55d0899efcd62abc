//! Handlers for commands that work on bare identifiers: `check`,
//! `equivalents` and `version`.

use super::output::{TextReport, write_report};
use crate::config::AppConfig;
use crate::matching::{
    MatchExplanation, Notation, explain_semantic_id, extract_version_revision,
    get_equivalent_semantic_ids,
};
use crate::model::Reference;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

// ============================================================================
// check
// ============================================================================

/// Result of the `check` command.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub candidate: String,
    pub target: String,
    pub is_match: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<MatchExplanation>,
}

impl TextReport for CheckReport {
    fn to_text(&self) -> String {
        match &self.explanation {
            Some(explanation) => explanation.summary(),
            None if self.is_match => "match".to_string(),
            None => "no match".to_string(),
        }
    }
}

/// Check a candidate semantic id against a target.
///
/// Returns the process exit code: 1 when nothing matched and
/// `behavior.fail_on_no_match` is set, 0 otherwise.
pub fn run_check<W: Write + ?Sized>(
    candidate: &str,
    target: &str,
    explain: bool,
    config: &AppConfig,
    writer: &mut W,
) -> Result<i32> {
    let reference = Reference::external(candidate);
    let explanation = explain_semantic_id(&reference, target);
    let is_match = explanation.is_match;

    let report = CheckReport {
        candidate: candidate.to_string(),
        target: target.to_string(),
        is_match,
        explanation: explain.then_some(explanation),
    };
    write_report(&report, &config.output, writer)?;

    Ok(i32::from(!is_match && config.behavior.fail_on_no_match))
}

// ============================================================================
// equivalents
// ============================================================================

/// Result of the `equivalents` command.
#[derive(Debug, Serialize)]
pub struct EquivalentsReport {
    pub semantic_id: String,
    pub notation: Notation,
    pub equivalents: Vec<String>,
}

impl TextReport for EquivalentsReport {
    fn to_text(&self) -> String {
        self.equivalents.join("\n")
    }
}

/// Print every notation of an ECLASS or IRI semantic id.
pub fn run_equivalents<W: Write + ?Sized>(
    semantic_id: &str,
    config: &AppConfig,
    writer: &mut W,
) -> Result<()> {
    let semantic_id = semantic_id.trim();
    let report = EquivalentsReport {
        semantic_id: semantic_id.to_string(),
        notation: Notation::classify(semantic_id),
        equivalents: get_equivalent_semantic_ids(semantic_id),
    };
    if report.equivalents.is_empty() && !config.behavior.quiet {
        tracing::warn!("{} has no equivalent notations", report.semantic_id);
    }
    write_report(&report, &config.output, writer)
}

// ============================================================================
// version
// ============================================================================

/// Result of the `version` command.
#[derive(Debug, Serialize)]
pub struct VersionReport {
    pub semantic_id: String,
    pub version: String,
    pub revision: String,
}

impl TextReport for VersionReport {
    fn to_text(&self) -> String {
        if self.version.is_empty() {
            String::new()
        } else {
            format!("{}.{}", self.version, self.revision)
        }
    }
}

/// Print the version and revision embedded in an IRI semantic id.
pub fn run_version<W: Write + ?Sized>(
    semantic_id: &str,
    config: &AppConfig,
    writer: &mut W,
) -> Result<()> {
    let version = extract_version_revision(semantic_id);
    let report = VersionReport {
        semantic_id: semantic_id.to_string(),
        version: version.version,
        revision: version.revision,
    };
    write_report(&report, &config.output, writer)
}
