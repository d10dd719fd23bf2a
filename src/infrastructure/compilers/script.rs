//! Script adapter that shells out to an ES6 compiler
//!
//! Runs `<program> --script <input> --out <staging.js>` to completion and
//! returns the staged text. The staging file is a temp file, so a failed
//! compile never touches the real output.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::{CompileResult, SourceCompiler};
use crate::domain::value_objects::SourceKind;
use crate::error::CompileFailure;

/// Program used when nothing is configured
pub const DEFAULT_SCRIPT_COMPILER: &str = "traceur";

/// Compiles `.js6` files through an external command
#[derive(Debug, Clone)]
pub struct ScriptCompiler {
    program: String,
}

impl Default for ScriptCompiler {
    fn default() -> Self {
        Self::new(DEFAULT_SCRIPT_COMPILER)
    }
}

impl ScriptCompiler {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn launch_failure(&self, message: impl Into<String>) -> CompileFailure {
        CompileFailure::ScriptLaunch {
            program: self.program.clone(),
            message: message.into(),
        }
    }
}

impl SourceCompiler for ScriptCompiler {
    fn kind(&self) -> SourceKind {
        SourceKind::Script
    }

    fn name(&self) -> &str {
        &self.program
    }

    fn compile(&self, source: &Path) -> CompileResult {
        let staging = tempfile::Builder::new()
            .prefix("stylewatch-")
            .suffix(".js")
            .tempfile()
            .map_err(|e| self.launch_failure(format!("cannot create staging file: {e}")))?;

        tracing::debug!(
            program = %self.program,
            source = %source.display(),
            out = %staging.path().display(),
            "running script compiler"
        );

        let output = Command::new(&self.program)
            .arg("--script")
            .arg(source)
            .arg("--out")
            .arg(staging.path())
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.launch_failure(e.to_string()))?;

        if !output.status.success() {
            let mut stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if stderr.is_empty() {
                stderr = String::from_utf8_lossy(&output.stdout).trim().to_string();
            }
            return Err(CompileFailure::ScriptExit {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr,
            });
        }

        std::fs::read_to_string(staging.path())
            .map_err(|e| self.launch_failure(format!("compiler produced no readable output: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_program_is_launch_failure_with_hint() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("c.js6");
        std::fs::write(&source, "let x = 1;").unwrap();

        let compiler = ScriptCompiler::new("stylewatch-missing-compiler-for-tests");
        let err = compiler.compile(&source).unwrap_err();

        assert!(matches!(err, CompileFailure::ScriptLaunch { .. }));
        assert!(err.hint().unwrap().contains("npm install -g traceur"));
    }

    #[test]
    fn default_program_is_traceur() {
        let compiler = ScriptCompiler::default();
        assert_eq!(compiler.program(), "traceur");
        assert_eq!(compiler.name(), "traceur");
        assert_eq!(ScriptCompiler::new("babel-es6").name(), "babel-es6");
        assert_eq!(ScriptCompiler::default().kind(), SourceKind::Script);
    }

    #[cfg(unix)]
    fn fake_compiler(dir: &Path, body: &str) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("fake-traceur");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn successful_run_returns_staged_output() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("c.js6");
        std::fs::write(&source, "const answer = 42;\n").unwrap();
        let program = fake_compiler(dir.path(), r#"cp "$2" "$4""#);

        let compiler = ScriptCompiler::new(program.to_string_lossy());
        let js = compiler.compile(&source).unwrap();

        assert_eq!(js, "const answer = 42;\n");
        assert!(!dir.path().join("c.js").exists());
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_captures_stderr() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("c.js6");
        std::fs::write(&source, "let = ;").unwrap();
        let program = fake_compiler(dir.path(), "echo 'unexpected token' >&2\nexit 3");

        let err = ScriptCompiler::new(program.to_string_lossy())
            .compile(&source)
            .unwrap_err();

        match &err {
            CompileFailure::ScriptExit { stderr, status, .. } => {
                assert_eq!(stderr, "unexpected token");
                assert!(status.contains('3'));
            }
            other => panic!("expected exit failure, got {other:?}"),
        }
        assert!(err.hint().is_some());
    }
}
