//! Compiler Adapters
//!
//! Implementations of the `SourceCompiler` port.

mod script;
mod style;

pub use script::{ScriptCompiler, DEFAULT_SCRIPT_COMPILER};
pub use style::{StyleCompiler, StyleDiagnostic};
