//! Split input lines and the entries read from them.

/// One `\n`-delimited line of input together with its fields.
///
/// Borrows from the input text; nothing is copied during splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLine<'a> {
    number: usize,
    raw: &'a str,
    fields: Vec<&'a str>,
}

impl<'a> SplitLine<'a> {
    /// Create a split line.
    ///
    /// # Arguments
    ///
    /// * `number` - The line number in the input (1-indexed)
    /// * `raw` - The line exactly as it appeared, without the `\n`
    /// * `fields` - The line split at every delimiter character
    pub fn new(number: usize, raw: &'a str, fields: Vec<&'a str>) -> Self {
        Self {
            number,
            raw,
            fields,
        }
    }

    /// 1-based position of the line in the input.
    pub fn number(&self) -> usize {
        self.number
    }

    /// The raw line content.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }

    /// The entry carried by this line, or `None` when it has fewer than two fields.
    pub fn entry(&self) -> Option<Entry<'a>> {
        match self.fields.as_slice() {
            &[identifier, amount, ..] => Some(Entry {
                identifier,
                amount,
            }),
            _ => None,
        }
    }
}

/// Identifier and amount text taken from the first two fields of a line.
///
/// Neither field is validated here; see [`crate::validator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub identifier: &'a str,
    pub amount: &'a str,
}
