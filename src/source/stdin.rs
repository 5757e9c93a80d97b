//! Stdin-based recipient list source for piped input.

use crate::model::error::InputError;
use std::io::{IsTerminal, Read};

/// Recipient list piped through stdin (`cat list.txt | disperse`).
///
/// Reads until EOF; there is no streaming mode since validation needs the
/// whole list to find duplicates.
#[derive(Debug)]
pub struct StdinSource<R: Read> {
    reader: R,
}

impl StdinSource<std::io::Stdin> {
    /// Create a new StdinSource from stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY (interactive terminal),
    /// so the tool does not sit waiting when the user forgot to pipe data.
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self { reader: stdin })
    }
}

impl<R: Read> StdinSource<R> {
    /// Create StdinSource from any reader, bypassing the TTY check.
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }

    /// Read everything up to EOF as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read errors or invalid UTF-8.
    pub fn read_all(mut self) -> Result<String, InputError> {
        let mut text = String::new();
        self.reader.read_to_string(&mut text)?;
        Ok(text)
    }
}
