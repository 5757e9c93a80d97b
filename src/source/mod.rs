//! Recipient list input sources.
//!
//! - File loading for a path argument
//! - Stdin for piped input
//! - Unified InputSource enum for both

use crate::model::error::InputError;
use std::path::PathBuf;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Unified input source for recipient lists.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// File source, already read.
    File(FileSource),
    /// Piped stdin, read on demand.
    Stdin(StdinSource<std::io::Stdin>),
}

impl InputSource {
    /// Human-readable name of the source for logging.
    pub fn describe(&self) -> String {
        match self {
            InputSource::File(f) => f.path().display().to_string(),
            InputSource::Stdin(_) => "<stdin>".to_string(),
        }
    }

    /// Consume the source and return its text.
    ///
    /// A single trailing line terminator is removed so that a file ending in
    /// `\n` is not reported as having an extra empty line.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read failures.
    pub fn read_text(self) -> Result<String, InputError> {
        let text = match self {
            InputSource::File(f) => f.into_text(),
            InputSource::Stdin(s) => s.read_all()?,
        };
        Ok(strip_final_newline(text))
    }
}

/// Drop one trailing `\n`, if present. Everything else is left untouched.
pub fn strip_final_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

/// Detect and create appropriate input source.
///
/// 1. If a file path is provided: read the file
/// 2. Else if stdin is piped: use stdin
/// 3. Else: `InputError::NoInput`
///
/// # Errors
///
/// Returns `InputError::NoInput` if no file is provided and stdin is a terminal.
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::Io` for I/O errors during file reading.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}
