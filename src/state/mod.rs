//! Editing session state and transitions.
//!
//! `DisperseState` is the single mutable cell a front end keeps: the current
//! text and the diagnostics last shown for it. Each transition hands a text
//! snapshot to the pure core and stores what comes back.
//!
//! # Transitions
//!
//! - `edit`: replace text, clear any shown diagnostics
//! - `validate`: recompute diagnostics from scratch
//! - `keep_first` / `merge_amounts`: rewrite text, drop duplicate diagnostics
//!
//! Resolvers leave the remaining diagnostics in place even though they may be
//! stale for the rewritten text; the next `validate` refreshes them.

use crate::model::Diagnostic;
use crate::parser;
use crate::resolver::Resolution;
use crate::validator;
use tracing::debug;

/// Recipient list being edited plus its current findings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisperseState {
    text: String,
    diagnostics: Vec<Diagnostic>,
}

impl DisperseState {
    /// Empty session with no findings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session seeded with `text`; nothing is validated yet.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            diagnostics: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Replace the text. Shown findings are cleared since they no longer apply.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if !self.diagnostics.is_empty() {
            self.diagnostics.clear();
        }
    }

    /// Validate the current text, replacing all findings.
    ///
    /// Returns `true` if the text is valid.
    pub fn validate(&mut self) -> bool {
        self.diagnostics = validator::validate(&self.text).into_diagnostics();
        debug!(
            lines = self.line_count(),
            findings = self.diagnostics.len(),
            "validated recipient list"
        );
        self.diagnostics.is_empty()
    }

    /// Keep the first line for each identifier.
    pub fn keep_first(&mut self) {
        self.resolve(Resolution::KeepFirst);
    }

    /// Merge duplicate identifiers into one line with summed amounts.
    pub fn merge_amounts(&mut self) {
        self.resolve(Resolution::Merge);
    }

    /// Rewrite the text under `resolution` and drop duplicate findings.
    pub fn resolve(&mut self, resolution: Resolution) {
        let before = self.line_count();
        self.text = resolution.apply(&self.text);
        self.diagnostics.retain(|d| !d.is_duplicate());
        debug!(
            resolution = resolution.as_str(),
            before,
            after = self.line_count(),
            "resolved duplicates"
        );
    }

    /// Whether duplicate findings are shown (resolve actions are offered).
    pub fn has_duplicates(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_duplicate)
    }

    /// True when no findings are shown.
    pub fn can_proceed(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of lines in the text, as a line-number gutter would show.
    pub fn line_count(&self) -> usize {
        parser::split_lines(&self.text).count()
    }
}
