//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod source_kind;

pub use source_kind::{classify, derive_output_path, SourceKind};
