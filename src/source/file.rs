//! File-based recipient list source.

use crate::model::error::InputError;
use std::path::{Path, PathBuf};

/// Recipient list read from a file.
///
/// The file is read once at construction; the source only hands out the text.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    text: String,
}

impl FileSource {
    /// Read the whole file as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    /// Returns `InputError::Io` for other I/O errors, including invalid UTF-8.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let text = std::fs::read_to_string(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
