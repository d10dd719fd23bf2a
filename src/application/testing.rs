//! Test doubles shared by the application-layer tests

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::ports::{CompileResult, FileSystem, SourceCompiler};
use crate::domain::value_objects::SourceKind;
use crate::error::CompileFailure;

use super::event::BuildEvent;

#[derive(Default)]
pub struct MockFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
    dirs: Vec<PathBuf>,
    writes: AtomicUsize,
}

impl MockFileSystem {
    pub fn with_dirs(dirs: &[&str]) -> Self {
        Self {
            dirs: dirs.iter().map(PathBuf::from).collect(),
            ..Self::default()
        }
    }

    pub fn read(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn seed(&self, path: &str, content: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), content.to_string());
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl FileSystem for MockFileSystem {
    fn write(&self, path: &Path, content: &str) -> std::io::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.iter().any(|d| d == path) || path.is_dir()
    }
}

/// Compiler that returns a canned result, or echoes the source from disk
pub struct MockCompiler {
    kind: SourceKind,
    fixed: Option<CompileResult>,
    calls: Arc<AtomicUsize>,
}

impl MockCompiler {
    pub fn ok(kind: SourceKind, output: &str) -> Self {
        Self {
            kind,
            fixed: Some(Ok(output.to_string())),
            calls: Arc::default(),
        }
    }

    pub fn failing(kind: SourceKind, payload: &str) -> Self {
        Self {
            kind,
            fixed: Some(Err(CompileFailure::Style {
                payload: payload.to_string(),
            })),
            calls: Arc::default(),
        }
    }

    /// Reads the source and upper-cases it; files containing `error` fail
    pub fn echo(kind: SourceKind) -> Self {
        Self {
            kind,
            fixed: None,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl SourceCompiler for MockCompiler {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    fn name(&self) -> &str {
        "mock"
    }

    fn compile(&self, source: &Path) -> CompileResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(fixed) = &self.fixed {
            return fixed.clone();
        }
        let text = std::fs::read_to_string(source).map_err(|e| CompileFailure::Style {
            payload: e.to_string(),
        })?;
        if text.contains("error") {
            return Err(CompileFailure::Style {
                payload: format!("{{\"status\":1,\"file\":\"{}\"}}", source.display()),
            });
        }
        Ok(text.to_uppercase())
    }
}

/// Collects emitted events for later assertions
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<BuildEvent>>>);

impl EventLog {
    pub fn sink(&self) -> impl Fn(BuildEvent) + Send + 'static {
        let events = Arc::clone(&self.0);
        move |event| events.lock().unwrap().push(event)
    }

    pub fn events(&self) -> Vec<BuildEvent> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&BuildEvent) -> bool) -> usize {
        self.events().iter().filter(|e| pred(e)).count()
    }
}
