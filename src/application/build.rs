//! Batch build
//!
//! Expands every source root against every supported extension
//! (`{styles,scripts}/*.{scss,js6}`) once and drives each match through the
//! compile pipeline, which classifies it. This is the same set of files the
//! watcher reacts to. Matches come back in the order `glob` yields them.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::policies::FailurePolicy;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::SourceKind;
use crate::error::{StylewatchError, StylewatchResult};

use super::event::BuildEvent;
use super::pipeline::{CompilePipeline, ProcessOutcome};

/// Options for a batch build
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Directory containing `styles/` and `scripts/`; empty means the
    /// working directory, and reported paths stay relative
    pub project_root: PathBuf,
    pub policy: FailurePolicy,
}

impl BuildOptions {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Outcome of a batch build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub compiled: usize,
    pub failed: usize,
}

impl BuildSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Build Use Case
pub struct BuildUseCase<F: FileSystem> {
    pipeline: Arc<CompilePipeline<F>>,
    options: BuildOptions,
}

impl<F: FileSystem> BuildUseCase<F> {
    pub fn new(pipeline: Arc<CompilePipeline<F>>, options: BuildOptions) -> Self {
        Self { pipeline, options }
    }

    /// Glob patterns pairing every source root with every supported
    /// extension, e.g. `styles/*.scss`, `styles/*.js6`, `scripts/*.scss`
    pub fn patterns(&self) -> Vec<String> {
        let kinds = self.pipeline.kinds();
        let root = self.options.project_root.to_string_lossy();
        let prefix = if root.is_empty() {
            String::new()
        } else {
            format!("{}/", glob::Pattern::escape(root.trim_end_matches('/')))
        };

        let mut patterns = Vec::new();
        for dir in kinds.iter().filter_map(SourceKind::root_dir) {
            for ext in kinds.iter().filter_map(SourceKind::extension) {
                patterns.push(format!("{prefix}{dir}/*.{ext}"));
            }
        }
        patterns
    }

    /// Run one pass over every source root.
    ///
    /// Pattern and directory-read errors are returned as
    /// `StylewatchError::Glob`. Per-file failures follow the policy.
    pub fn run(&self, on_event: impl Fn(BuildEvent)) -> StylewatchResult<BuildSummary> {
        let kinds = self.pipeline.kinds();
        on_event(BuildEvent::BuildStarted {
            roots: kinds
                .iter()
                .filter_map(|k| k.root_dir())
                .map(|dir| BuildEvent::root(&self.options.project_root.join(dir)))
                .collect(),
        });

        let mut summary = BuildSummary::default();
        for pattern in self.patterns() {
            for path in expand(&pattern)? {
                if self.pipeline.file_system().is_dir(&path) {
                    tracing::debug!(path = %path.display(), "skipping directory match");
                    continue;
                }
                match self.pipeline.process(&path, self.options.policy, &on_event)? {
                    ProcessOutcome::Compiled(_) => summary.compiled += 1,
                    ProcessOutcome::Failed => summary.failed += 1,
                    ProcessOutcome::Skipped => {}
                }
            }
        }

        on_event(BuildEvent::BuildComplete {
            compiled: summary.compiled,
            failed: summary.failed,
        });
        Ok(summary)
    }
}

fn expand(pattern: &str) -> StylewatchResult<Vec<PathBuf>> {
    let glob_error = |message: String| StylewatchError::Glob {
        pattern: pattern.to_string(),
        message,
    };
    tracing::debug!(pattern, "expanding sources");

    glob::glob(pattern)
        .map_err(|e| glob_error(e.to_string()))?
        .map(|entry| entry.map_err(|e| glob_error(e.to_string())))
        .collect()
}
