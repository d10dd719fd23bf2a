//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `compilers/` - Compiler adapters (Sass engine, script subprocess)
//! - `fs/` - File system implementations

pub mod compilers;
pub mod fs;

// Re-export for convenience
pub use compilers::{ScriptCompiler, StyleCompiler, DEFAULT_SCRIPT_COMPILER};
pub use fs::LocalFs;
