//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler writes its result to the given writer in the configured
//! output format.

mod document;
mod identifiers;
mod output;

pub use document::{
    ElementSummary, FindReport, LookupIdsReport, TemplatesReport, run_find, run_lookup_ids,
    run_templates,
};
pub use identifiers::{
    CheckReport, EquivalentsReport, VersionReport, run_check, run_equivalents, run_version,
};
pub use output::{TextReport, write_report};
