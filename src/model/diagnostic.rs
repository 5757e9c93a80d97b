//! Validation findings reported back to the caller.
//!
//! Diagnostics are plain data: a category tag, the exact user-facing message,
//! and the line numbers the finding concerns. Callers branch on [`DiagnosticKind`]
//! rather than matching on message text.

use serde::Serialize;
use std::fmt;

/// Category of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Line split into fewer than two fields.
    Format,
    /// Identifier failed the `0x` prefix or 42-character length check.
    Address,
    /// Amount is not a plain non-negative decimal numeral.
    Amount,
    /// Identifier appears on more than one well-formed line.
    Duplicate,
}

/// A single validation finding.
///
/// `lines` holds 1-based line numbers: exactly one for structural findings,
/// two or more (in order of appearance) for duplicate reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    message: String,
    lines: Vec<usize>,
}

impl Diagnostic {
    /// Line has fewer than two fields.
    pub fn invalid_format(line: usize) -> Self {
        Self {
            kind: DiagnosticKind::Format,
            message: format!("Line {line}: Invalid format."),
            lines: vec![line],
        }
    }

    /// Identifier is not `0x`-prefixed or not 42 characters long.
    pub fn invalid_address(line: usize) -> Self {
        Self {
            kind: DiagnosticKind::Address,
            message: format!("Line {line}: invalid Ethereum address."),
            lines: vec![line],
        }
    }

    /// Amount failed the numeral pattern or did not parse to a finite number.
    pub fn wrong_amount(line: usize) -> Self {
        Self {
            kind: DiagnosticKind::Amount,
            message: format!("Line {line}: wrong amount."),
            lines: vec![line],
        }
    }

    /// Identifier repeated across `lines`.
    pub fn duplicate(identifier: &str, lines: &[usize]) -> Self {
        let joined = lines
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            kind: DiagnosticKind::Duplicate,
            message: format!("{identifier} duplicate in line: {joined}."),
            lines: lines.to_vec(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn lines(&self) -> &[usize] {
        &self.lines
    }

    pub fn is_duplicate(&self) -> bool {
        self.kind == DiagnosticKind::Duplicate
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_message_matches_contract() {
        let diag = Diagnostic::invalid_format(3);
        assert_eq!(diag.message(), "Line 3: Invalid format.");
        assert_eq!(diag.kind(), DiagnosticKind::Format);
        assert_eq!(diag.lines(), &[3]);
    }

    #[test]
    fn invalid_address_message_matches_contract() {
        let diag = Diagnostic::invalid_address(1);
        assert_eq!(diag.message(), "Line 1: invalid Ethereum address.");
        assert_eq!(diag.kind(), DiagnosticKind::Address);
    }

    #[test]
    fn wrong_amount_message_matches_contract() {
        let diag = Diagnostic::wrong_amount(12);
        assert_eq!(diag.message(), "Line 12: wrong amount.");
        assert_eq!(diag.kind(), DiagnosticKind::Amount);
    }

    #[test]
    fn duplicate_lists_lines_comma_space_separated() {
        let diag = Diagnostic::duplicate("0xabc", &[1, 3, 7]);
        assert_eq!(diag.message(), "0xabc duplicate in line: 1, 3, 7.");
        assert_eq!(diag.lines(), &[1, 3, 7]);
        assert!(diag.is_duplicate());
    }

    #[test]
    fn display_is_the_message() {
        let diag = Diagnostic::wrong_amount(2);
        assert_eq!(diag.to_string(), diag.message());
    }

    #[test]
    fn serializes_kind_in_snake_case() {
        let json = serde_json::to_value(Diagnostic::invalid_format(4)).unwrap();
        assert_eq!(json["kind"], "format");
        assert_eq!(json["message"], "Line 4: Invalid format.");
        assert_eq!(json["lines"], serde_json::json!([4]));
    }
}
