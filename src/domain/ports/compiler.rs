//! SourceCompiler port - the boundary to an external compilation engine
//!
//! Implementations:
//! - `StyleCompiler` - in-process Sass engine
//! - `ScriptCompiler` - external command-line compiler

use std::path::Path;

use crate::domain::value_objects::SourceKind;
use crate::error::CompileFailure;

/// Compiled text or a structured failure
pub type CompileResult = Result<String, CompileFailure>;

/// Turns one source file into compiled text.
///
/// Adapters read the source themselves (or let their engine do it); they
/// never write the final output, which is owned by the compile pipeline.
pub trait SourceCompiler: Send + Sync {
    /// Kind of source this adapter handles
    fn kind(&self) -> SourceKind;

    /// Short name for diagnostics
    fn name(&self) -> &str;

    /// Compile the file at `source`
    fn compile(&self, source: &Path) -> CompileResult;
}
