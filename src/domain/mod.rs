//! Domain Layer
//!
//! Pure rules of the build tool without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - `SourceKind` and the path classifier
//! - `entities/` - `SourceFile`, `CompiledFile`
//! - `policies/` - `FailurePolicy`
//! - `ports/` - Interfaces implemented by infrastructure (`SourceCompiler`, `FileSystem`)

pub mod entities;
pub mod policies;
pub mod ports;
pub mod value_objects;
