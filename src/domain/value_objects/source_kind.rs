//! Source kind value object and the path classifier
//!
//! Classification looks only at the file name suffix. Output paths are
//! derived by swapping the trailing suffix; directory components are never
//! rewritten, so `styles.scss/a.scss` maps to `styles.scss/a.css`.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// What kind of source a path is, decided by its extension alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// SCSS style sheet (`.scss` → `.css`)
    Style,
    /// ES6 script (`.js6` → `.js`)
    Script,
    /// Anything else; never compiled
    Unrelated,
}

impl SourceKind {
    /// Suffix a source of this kind ends with
    pub fn source_suffix(&self) -> Option<&'static str> {
        match self {
            SourceKind::Style => Some(".scss"),
            SourceKind::Script => Some(".js6"),
            SourceKind::Unrelated => None,
        }
    }

    /// Suffix the compiled output ends with
    pub fn output_suffix(&self) -> Option<&'static str> {
        match self {
            SourceKind::Style => Some(".css"),
            SourceKind::Script => Some(".js"),
            SourceKind::Unrelated => None,
        }
    }

    /// Bare extension used in glob patterns (`scss`, `js6`)
    pub fn extension(&self) -> Option<&'static str> {
        self.source_suffix().map(|s| s.trim_start_matches('.'))
    }

    /// Directory (relative to the project root) holding sources of this kind
    pub fn root_dir(&self) -> Option<&'static str> {
        match self {
            SourceKind::Style => Some("styles"),
            SourceKind::Script => Some("scripts"),
            SourceKind::Unrelated => None,
        }
    }

    /// Human label used in watcher notices
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Style => "SCSS",
            SourceKind::Script => "JS/ES6",
            SourceKind::Unrelated => "unrelated",
        }
    }

    /// Kinds that are compiled
    pub fn compilable() -> [SourceKind; 2] {
        [SourceKind::Style, SourceKind::Script]
    }
}

/// Classify a path by its trailing suffix.
pub fn classify(path: &Path) -> SourceKind {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return SourceKind::Unrelated;
    };

    SourceKind::compilable()
        .into_iter()
        .find(|kind| {
            kind.source_suffix()
                .is_some_and(|suffix| name.ends_with(suffix))
        })
        .unwrap_or(SourceKind::Unrelated)
}

/// Derive the output path for a source of the given kind.
///
/// Returns `None` for `Unrelated` or when `path` does not actually end with
/// the kind's suffix.
pub fn derive_output_path(path: &Path, kind: SourceKind) -> Option<PathBuf> {
    let source_suffix = kind.source_suffix()?;
    let output_suffix = kind.output_suffix()?;

    let name = path.file_name()?.to_str()?;
    let stem = name.strip_suffix(source_suffix)?;
    Some(path.with_file_name(format!("{stem}{output_suffix}")))
}
