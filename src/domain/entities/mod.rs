//! Domain Entities
//!
//! - `SourceFile` - A style or script source picked up by a build or an event
//! - `CompiledFile` - The result of compiling one source to disk

mod source_file;

pub use source_file::{CompiledFile, SourceFile};
