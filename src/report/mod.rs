//! Rendering validation results for the terminal or other programs.

use crate::model::Diagnostic;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How diagnostics are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One message per line, nothing when valid.
    #[default]
    Text,
    /// A single JSON object with a `valid` flag and structured diagnostics.
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    valid: bool,
    diagnostics: &'a [Diagnostic],
}

/// Render diagnostics in the given format.
///
/// Text output has no trailing newline; an empty string means no findings.
///
/// # Errors
///
/// Returns `serde_json::Error` if JSON serialization fails.
pub fn render(
    diagnostics: &[Diagnostic],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(diagnostics)),
        OutputFormat::Json => render_json(diagnostics),
    }
}

/// One diagnostic message per line.
pub fn render_text(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(Diagnostic::message)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON report.
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn render_json(diagnostics: &[Diagnostic]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        valid: diagnostics.is_empty(),
        diagnostics,
    })
}
