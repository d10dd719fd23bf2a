//! Build and watch progress events
//!
//! Use cases report progress through an `on_event` callback instead of
//! printing. The binary renders each event either as a timestamped line or
//! as one NDJSON object.

use std::path::Path;

use serde::Serialize;

use crate::domain::entities::CompiledFile;
use crate::domain::value_objects::SourceKind;

/// What a filesystem notification meant for a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// File created or renamed into a watched directory
    Create,
    /// File content modified
    Write,
}

impl ChangeKind {
    /// Verb used in rendered notices ("created", "modified")
    pub fn verb(&self) -> &'static str {
        match self {
            ChangeKind::Create => "created",
            ChangeKind::Write => "modified",
        }
    }
}

/// Events emitted by `BuildUseCase` and `ChangeWatcher`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BuildEvent {
    /// A batch build is about to enumerate these roots
    BuildStarted { roots: Vec<String> },
    /// One source compiled and persisted
    Compiled {
        source: String,
        output: String,
        kind: SourceKind,
    },
    /// One source failed under the continue policy
    CompileFailed {
        source: String,
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        hint: Option<String>,
    },
    /// A batch build finished
    BuildComplete { compiled: usize, failed: usize },
    /// A watch root was subscribed
    RootWatched { root: String, kind: SourceKind },
    /// A watch root does not exist and will not be watched
    RootSkipped { root: String, kind: SourceKind },
    /// A qualifying filesystem event arrived for a source
    FileChanged {
        path: String,
        change: ChangeKind,
        kind: SourceKind,
    },
    /// The notification backend reported an error; watching continues
    WatchError { message: String },
    /// The watcher was cancelled
    Shutdown,
}

impl BuildEvent {
    pub(crate) fn compiled(file: &CompiledFile) -> Self {
        BuildEvent::Compiled {
            source: file.source.display().to_string(),
            output: file.output.display().to_string(),
            kind: file.kind,
        }
    }

    pub(crate) fn root(path: &Path) -> String {
        format!("{}/", path.display().to_string().trim_end_matches('/'))
    }

    /// Serialize as a single NDJSON line
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
