//! Style sheet adapter backed by the `grass` Sass engine
//!
//! The engine reads the file itself and resolves `@import`/`@use` relative
//! to it. All engine state is owned by the call, so it is released on every
//! return path.

use std::path::Path;

use serde::Serialize;

use crate::domain::ports::{CompileResult, SourceCompiler};
use crate::domain::value_objects::SourceKind;
use crate::error::CompileFailure;

/// Structured error payload handed back on an engine failure
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StyleDiagnostic {
    pub status: u8,
    pub file: String,
    pub message: String,
    pub formatted: String,
}

impl StyleDiagnostic {
    fn new(source: &Path, formatted: String) -> Self {
        let message = formatted
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("Error: ")
            .to_string();

        Self {
            status: 1,
            file: source.display().to_string(),
            message,
            formatted,
        }
    }

    /// JSON form used as the opaque failure payload
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Compiles `.scss` files with a fixed compressed output style
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleCompiler;

impl StyleCompiler {
    pub fn new() -> Self {
        Self
    }
}

impl SourceCompiler for StyleCompiler {
    fn kind(&self) -> SourceKind {
        SourceKind::Style
    }

    fn name(&self) -> &str {
        "grass"
    }

    fn compile(&self, source: &Path) -> CompileResult {
        tracing::debug!(source = %source.display(), "compiling style sheet");

        let options = grass::Options::default().style(grass::OutputStyle::Compressed);
        grass::from_path(source, &options).map_err(|err| CompileFailure::Style {
            payload: StyleDiagnostic::new(source, err.to_string()).to_json(),
        })
    }
}
