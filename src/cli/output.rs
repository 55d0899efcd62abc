//! Rendering of command results as text or JSON.

use crate::config::{OutputConfig, OutputFormat};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// A command result that can be printed for humans.
pub trait TextReport {
    /// Render as plain text lines.
    fn to_text(&self) -> String;
}

/// Write `report` in the configured output format.
pub fn write_report<R, W>(report: &R, output: &OutputConfig, writer: &mut W) -> Result<()>
where
    R: Serialize + TextReport,
    W: Write + ?Sized,
{
    match output.format {
        OutputFormat::Text => {
            let text = report.to_text();
            if !text.is_empty() {
                writeln!(writer, "{text}")?;
            }
        }
        OutputFormat::Json => {
            let json = if output.pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            writeln!(writer, "{json}")?;
        }
    }
    Ok(())
}
