//! Duplicate resolution: rewrite input so every identifier appears once.
//!
//! Both resolvers drop lines with fewer than two fields and scan identifiers
//! independently of the validator. Neither reclassifies validity; callers
//! re-run [`crate::validator::validate`] on the result.

use crate::model::IdentifierIndex;
use crate::parser::{self, parse_amount};
use clap::ValueEnum;
use serde::Deserialize;
use std::collections::HashMap;

/// Policy for collapsing duplicate identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Resolution {
    /// Keep the first line for each identifier, drop later ones.
    KeepFirst,
    /// One line per identifier with all amounts summed.
    Merge,
}

impl Resolution {
    /// Apply this policy to `text`.
    pub fn apply(self, text: &str) -> String {
        match self {
            Resolution::KeepFirst => keep_first(text),
            Resolution::Merge => merge(text),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Resolution::KeepFirst => "keep-first",
            Resolution::Merge => "merge",
        }
    }
}

/// Keep only the first well-formed line for each identifier.
///
/// Kept lines are emitted verbatim, in their original order, joined by `\n`.
pub fn keep_first(text: &str) -> String {
    let mut index = IdentifierIndex::new();
    let mut kept = Vec::new();

    for line in parser::split(text) {
        let Some(entry) = line.entry() else {
            continue;
        };
        if index.record(entry.identifier, line.number()) {
            kept.push(line.raw());
        }
    }

    kept.join("\n")
}

/// Collapse each identifier to one `{identifier}={sum}` line, in first-seen order.
///
/// Amounts that fail [`parse_amount`] count as zero rather than poisoning the sum.
pub fn merge(text: &str) -> String {
    let mut order: Vec<&str> = Vec::new();
    let mut sums: HashMap<&str, f64> = HashMap::new();

    for line in parser::split(text) {
        let Some(entry) = line.entry() else {
            continue;
        };
        let amount = parse_amount(entry.amount).unwrap_or(0.0);
        match sums.get_mut(entry.identifier) {
            Some(sum) => *sum += amount,
            None => {
                order.push(entry.identifier);
                sums.insert(entry.identifier, amount);
            }
        }
    }

    order
        .into_iter()
        .map(|identifier| format!("{identifier}={}", format_amount(sums[identifier])))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Shortest decimal text that reads back as `value`; never uses exponent notation.
pub fn format_amount(value: f64) -> String {
    format!("{value}")
}
