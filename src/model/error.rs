//! Error types for the disperse binary.
//!
//! The validation core never fails: every problem with the recipient list is
//! reported as a [`Diagnostic`](crate::model::Diagnostic). The types here cover the
//! shell around it: reading input, loading configuration, setting up logging and
//! writing output.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`InputError`] - File/stdin reading failures
//!   - [`ConfigError`] - Config file read or TOML parse failures
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - `serde_json::Error` - JSON report rendering failures
//!   - `std::io::Error` - Writing results to stdout

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// Domain-specific errors convert via `From`, so `?` works throughout `main`.
/// All variants are fatal: the binary prints the error and exits with status 2.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the recipient list from file or stdin.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Configuration file exists but could not be used.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing could not be initialized.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    /// JSON report could not be produced.
    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),

    /// Writing results failed (e.g. broken pipe).
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors encountered when reading the recipient list.
///
/// # Recovery Patterns
///
/// - **FileNotFound**: Display error and exit (user provided invalid path)
/// - **NoInput**: User must provide a file path or pipe stdin
/// - **Io**: Permissions, invalid UTF-8, disk errors - display and exit
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use disperse::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.txt")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.txt"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// No file argument and stdin is an interactive terminal.
    ///
    /// Reading would block waiting for typed input, which is never what the
    /// user meant.
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Generic I/O error reading from input source.
    ///
    /// Also covers input that is not valid UTF-8 (`ErrorKind::InvalidData`).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
