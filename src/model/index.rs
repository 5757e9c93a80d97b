//! Identifier → line number index built during a single pass.

use std::collections::HashMap;

/// Maps each identifier to the lines it appears on, remembering first-seen order.
///
/// Keys are compared byte-for-byte; no case folding or trimming is applied,
/// so `0xAB` and `0xab` are different identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierIndex<'a> {
    slots: HashMap<&'a str, usize>,
    entries: Vec<(&'a str, Vec<usize>)>,
}

impl<'a> IdentifierIndex<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `identifier` occurs on `line`.
    ///
    /// Returns `true` if this is the first occurrence of the identifier.
    pub fn record(&mut self, identifier: &'a str, line: usize) -> bool {
        match self.slots.get(identifier) {
            Some(&slot) => {
                self.entries[slot].1.push(line);
                false
            }
            None => {
                self.slots.insert(identifier, self.entries.len());
                self.entries.push((identifier, vec![line]));
                true
            }
        }
    }

    /// Lines on which `identifier` was recorded, in recording order.
    pub fn lines(&self, identifier: &str) -> Option<&[usize]> {
        self.slots
            .get(identifier)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.slots.contains_key(identifier)
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All identifiers with their lines, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[usize])> + '_ {
        self.entries
            .iter()
            .map(|(identifier, lines)| (*identifier, lines.as_slice()))
    }

    /// Identifiers recorded on more than one line, in first-seen order.
    pub fn duplicates(&self) -> impl Iterator<Item = (&'a str, &[usize])> + '_ {
        self.iter().filter(|(_, lines)| lines.len() > 1)
    }
}
