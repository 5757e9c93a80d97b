//! Line splitter and token grammar for recipient lists.
//!
//! Input is one entry per line:
//!
//! ```text
//! <identifier><delimiter><amount>
//! ```
//!
//! where `<delimiter>` is a single whitespace character, `,` or `=`. Every
//! delimiter character is its own split point, so `a,,b` yields three fields
//! (`a`, empty, `b`). Splitting never fails; lines that do not carry two
//! fields are reported by [`crate::validator`].

use crate::model::SplitLine;
use regex::Regex;
use std::sync::LazyLock;

/// Required identifier prefix.
pub const ADDRESS_PREFIX: &str = "0x";

/// Required identifier length in UTF-16 code units, prefix included.
///
/// Characters outside the Basic Multilingual Plane count as two.
pub const ADDRESS_LENGTH: usize = 42;

/// Pattern an amount must match: digits, optionally a dot and more digits.
///
/// ASCII digits only; Unicode decimal digits are rejected.
pub const AMOUNT_PATTERN: &str = r"^[0-9]+(\.[0-9]+)?$";

/// Sample list showing each delimiter once.
pub const EXAMPLE_INPUT: &str = "\
0x2CB99F193549681e06C6770dDD5543812B4FaFE8=1
0x8B3392483BA26D65E331dB86D4F430E9B3814E5e 50
0x09ae5A64465c18718a46b3aD946270BD3E5e6aaB,13";

static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(AMOUNT_PATTERN).expect("valid regex"));

// Byte order mark, treated as whitespace alongside the Unicode White_Space set.
const BOM: char = '\u{feff}';
// NEXT LINE is White_Space in Unicode but not a field separator here.
const NEL: char = '\u{85}';

/// Whether `c` separates fields: whitespace, comma or equals sign.
pub fn is_delimiter(c: char) -> bool {
    match c {
        ',' | '=' | BOM => true,
        NEL => false,
        c => c.is_whitespace(),
    }
}

/// Split raw text into lines on `\n`, keeping empty lines.
///
/// Empty text is a single empty line. `\r` is not stripped.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}

/// Split one line into fields at every delimiter character.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(is_delimiter).collect()
}

/// Split raw text into numbered lines with their fields.
pub fn split(text: &str) -> Vec<SplitLine<'_>> {
    split_lines(text)
        .enumerate()
        .map(|(index, raw)| SplitLine::new(index + 1, raw, split_fields(raw)))
        .collect()
}

/// Structural identifier check: `0x` prefix and [`ADDRESS_LENGTH`] UTF-16 units.
///
/// The characters after the prefix are not checked for hex digits.
pub fn is_valid_address(identifier: &str) -> bool {
    identifier.starts_with(ADDRESS_PREFIX) && identifier.encode_utf16().count() == ADDRESS_LENGTH
}

/// Parse amount text, returning `None` unless it matches [`AMOUNT_PATTERN`]
/// and converts to a finite number.
pub fn parse_amount(text: &str) -> Option<f64> {
    if !AMOUNT_RE.is_match(text) {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}
