//! Entry validation over split lines.
//!
//! One pass checks each line in order, then a second pass reports every
//! identifier seen on more than one well-formed line. Output is always data:
//! an empty diagnostic list means the input is fully valid.

use crate::model::{Diagnostic, IdentifierIndex, SplitLine};
use crate::parser::{self, is_valid_address, parse_amount};

/// Result of validating one snapshot of input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation<'a> {
    diagnostics: Vec<Diagnostic>,
    index: IdentifierIndex<'a>,
}

impl<'a> Validation<'a> {
    /// Findings in report order: per-line findings by line, then duplicate summaries.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Identifier index built during the pass (well-formed lines only).
    pub fn index(&self) -> &IdentifierIndex<'a> {
        &self.index
    }

    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_duplicates(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_duplicate)
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// Split and validate raw text.
pub fn validate(text: &str) -> Validation<'_> {
    validate_lines(&parser::split(text))
}

/// Validate already-split lines.
///
/// Identifiers are indexed even when they fail the address check, so a
/// malformed identifier repeated twice is still reported as a duplicate.
/// Lines with fewer than two fields get a single format finding and are not
/// indexed.
pub fn validate_lines<'a>(lines: &[SplitLine<'a>]) -> Validation<'a> {
    let mut diagnostics = Vec::new();
    let mut index = IdentifierIndex::new();

    for line in lines {
        let number = line.number();
        let Some(entry) = line.entry() else {
            diagnostics.push(Diagnostic::invalid_format(number));
            continue;
        };

        if !is_valid_address(entry.identifier) {
            diagnostics.push(Diagnostic::invalid_address(number));
        }
        if parse_amount(entry.amount).is_none() {
            diagnostics.push(Diagnostic::wrong_amount(number));
        }
        index.record(entry.identifier, number);
    }

    diagnostics.extend(
        index
            .duplicates()
            .map(|(identifier, lines)| Diagnostic::duplicate(identifier, lines)),
    );

    Validation { diagnostics, index }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
