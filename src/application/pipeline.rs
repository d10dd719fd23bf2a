//! Compile-then-persist
//!
//! The single per-file operation behind both the batch build and every
//! watch event: classify, dispatch to the matching compiler, and overwrite
//! the derived output on success.

use std::path::Path;

use crate::domain::entities::{CompiledFile, SourceFile};
use crate::domain::policies::FailurePolicy;
use crate::domain::ports::{FileSystem, SourceCompiler};
use crate::domain::value_objects::SourceKind;
use crate::error::{StylewatchError, StylewatchResult};

use super::event::BuildEvent;

/// What `CompilePipeline::process` did with a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    Compiled(CompiledFile),
    /// Compile or write failed and the policy said to keep going
    Failed,
    /// Unrelated path, or no compiler registered for its kind
    Skipped,
}

/// Compilers keyed by source kind plus the file system outputs go to
pub struct CompilePipeline<F: FileSystem> {
    fs: F,
    compilers: Vec<Box<dyn SourceCompiler>>,
}

impl<F: FileSystem> CompilePipeline<F> {
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            compilers: Vec::new(),
        }
    }

    /// Register a compiler. A later compiler for the same kind replaces the
    /// earlier one.
    pub fn with_compiler(mut self, compiler: Box<dyn SourceCompiler>) -> Self {
        self.compilers.retain(|c| c.kind() != compiler.kind());
        self.compilers.push(compiler);
        self
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    /// Whether sources of `kind` are compiled at all
    pub fn supports(&self, kind: SourceKind) -> bool {
        self.compiler_for(kind).is_some()
    }

    /// Compilable kinds with a registered compiler, in fixed order
    pub fn kinds(&self) -> Vec<SourceKind> {
        SourceKind::compilable()
            .into_iter()
            .filter(|kind| self.supports(*kind))
            .collect()
    }

    fn compiler_for(&self, kind: SourceKind) -> Option<&dyn SourceCompiler> {
        self.compilers
            .iter()
            .find(|c| c.kind() == kind)
            .map(|c| c.as_ref())
    }

    /// Compile `path` and overwrite its derived output.
    ///
    /// Returns `Ok(None)` without touching anything for unrelated paths and
    /// kinds with no compiler. On a compile error the output is left as is.
    pub fn compile_and_write(&self, path: &Path) -> StylewatchResult<Option<CompiledFile>> {
        let Some(source) = SourceFile::from_path(path) else {
            return Ok(None);
        };
        let Some(compiler) = self.compiler_for(source.kind()) else {
            tracing::debug!(path = %path.display(), "no compiler registered, skipping");
            return Ok(None);
        };

        tracing::debug!(
            compiler = compiler.name(),
            path = %path.display(),
            "compiling"
        );
        let text = compiler
            .compile(source.path())
            .map_err(|failure| StylewatchError::Compile {
                source_path: source.path().to_path_buf(),
                failure,
            })?;

        self.fs
            .write(source.output_path(), &text)
            .map_err(|e| StylewatchError::Write {
                path: source.output_path().to_path_buf(),
                source: e,
            })?;

        Ok(Some(CompiledFile::from(&source)))
    }

    /// `compile_and_write` plus event emission and the failure policy.
    ///
    /// Under `FailFast` a per-file error is returned to the caller; under
    /// `Continue` it is reported as `CompileFailed` and `Failed` is returned.
    pub fn process(
        &self,
        path: &Path,
        policy: FailurePolicy,
        on_event: &dyn Fn(BuildEvent),
    ) -> StylewatchResult<ProcessOutcome> {
        match self.compile_and_write(path) {
            Ok(Some(file)) => {
                on_event(BuildEvent::compiled(&file));
                Ok(ProcessOutcome::Compiled(file))
            }
            Ok(None) => Ok(ProcessOutcome::Skipped),
            Err(err @ (StylewatchError::Compile { .. } | StylewatchError::Write { .. })) => {
                if policy.aborts() {
                    return Err(err);
                }
                tracing::warn!(path = %path.display(), error = %err, "continuing after failure");
                on_event(BuildEvent::CompileFailed {
                    source: path.display().to_string(),
                    message: err.to_string(),
                    hint: err.hint().map(str::to_string),
                });
                Ok(ProcessOutcome::Failed)
            }
            Err(err) => Err(err),
        }
    }
}
