//! SourceFile entity - a compilable file and its derived output
//!
//! A SourceFile lives only for the single compile it triggers; nothing is
//! retained between events.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{classify, derive_output_path, SourceKind};

/// A style or script source with its derived output path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    kind: SourceKind,
    output: PathBuf,
}

impl SourceFile {
    /// Build a SourceFile from a path, or `None` if the path is unrelated
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let kind = classify(&path);
        let output = derive_output_path(&path, kind)?;
        Some(Self { path, kind, output })
    }

    /// Source path as discovered
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Style or Script
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Where the compiled text is written
    pub fn output_path(&self) -> &Path {
        &self.output
    }
}

/// A source that was compiled and persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFile {
    pub source: PathBuf,
    pub output: PathBuf,
    pub kind: SourceKind,
}

impl From<&SourceFile> for CompiledFile {
    fn from(file: &SourceFile) -> Self {
        Self {
            source: file.path.clone(),
            output: file.output.clone(),
            kind: file.kind,
        }
    }
}
