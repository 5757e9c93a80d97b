//! Domain model types (pure).
//!
//! All types in this module are plain data; none of them perform I/O.

pub mod diagnostic;
pub mod error;
pub mod index;
pub mod line;

// Re-export for convenience
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use error::{AppError, InputError};
pub use index::IdentifierIndex;
pub use line::{Entry, SplitLine};
