//! Disperse recipient list validator.
//!
//! Parses, validates and normalizes bulk `address=amount` lists used for batch
//! token transfers.
//!
//! The core (`parser`, `validator`, `resolver`) is pure: functions take a text
//! snapshot and return new values, never errors. `state` holds the editing
//! session a front end drives; `config`, `logging`, `source` and `report` make
//! up the command-line shell.
//!
//! ```
//! use disperse::{resolver, validator};
//!
//! let text = "0x2CB99F193549681e06C6770dDD5543812B4FaFE8=1\n\
//!             0x2CB99F193549681e06C6770dDD5543812B4FaFE8=3";
//! let validation = validator::validate(text);
//! assert!(validation.has_duplicates());
//!
//! let merged = resolver::merge(text);
//! assert_eq!(merged, "0x2CB99F193549681e06C6770dDD5543812B4FaFE8=4");
//! assert!(validator::validate(&merged).is_valid());
//! ```

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod report;
pub mod resolver;
pub mod source;
pub mod state;
pub mod validator;

pub use model::{Diagnostic, DiagnosticKind, IdentifierIndex};
pub use resolver::Resolution;
pub use state::DisperseState;
pub use validator::{validate, Validation};

#[cfg(test)]
mod tests;
