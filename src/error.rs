//! Error types for stylewatch
//!
//! Library code returns `StylewatchResult`; the binary converts to `anyhow`
//! at the command boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for stylewatch operations
pub type StylewatchResult<T> = Result<T, StylewatchError>;

/// Hint printed whenever the script compiler fails.
pub const SCRIPT_INSTALL_HINT: &str =
    "ensure traceur is installed globally (npm install -g traceur)";

/// Failure reported by a compiler adapter.
///
/// The payload is kept opaque: style failures carry the engine's JSON
/// diagnostic, script failures carry whatever the subprocess printed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileFailure {
    /// The style engine reported an error status
    #[error("{payload}")]
    Style { payload: String },

    /// The script compiler could not be started
    #[error("could not run '{program}': {message}")]
    ScriptLaunch { program: String, message: String },

    /// The script compiler ran but exited unsuccessfully
    #[error("'{program}' exited with {status}: {stderr}")]
    ScriptExit {
        program: String,
        status: String,
        stderr: String,
    },
}

impl CompileFailure {
    /// Actionable hint shown under the error message, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CompileFailure::Style { .. } => None,
            CompileFailure::ScriptLaunch { .. } | CompileFailure::ScriptExit { .. } => {
                Some(SCRIPT_INSTALL_HINT)
            }
        }
    }
}

/// Main error type for stylewatch operations
#[derive(Error, Debug)]
pub enum StylewatchError {
    /// Source enumeration failed (bad pattern or unreadable entry)
    #[error("failed to expand '{pattern}': {message}")]
    Glob { pattern: String, message: String },

    /// A source file failed to compile
    #[error("failed to compile {}: {failure}", source_path.display())]
    Compile {
        source_path: PathBuf,
        failure: CompileFailure,
    },

    /// Compiled output could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The filesystem notification backend could not be created
    #[error("failed to start file watcher: {message}")]
    WatcherInit { message: String },

    /// A watch root exists but could not be subscribed
    #[error("failed to watch {}: {message}", root.display())]
    WatchSubscription { root: PathBuf, message: String },

    /// Configuration file is malformed
    #[error("invalid configuration in {}: {message}", file.display())]
    Config { file: PathBuf, message: String },

    /// A batch build finished with failures under the continue policy
    #[error("build finished with {failed} failed file(s)")]
    BuildFailed { failed: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StylewatchError {
    /// Hint to print after the message, if the underlying failure has one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            StylewatchError::Compile { failure, .. } => failure.hint(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_compile() {
        let err = StylewatchError::Compile {
            source_path: PathBuf::from("styles/a.scss"),
            failure: CompileFailure::Style {
                payload: r#"{"status":1}"#.to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            r#"failed to compile styles/a.scss: {"status":1}"#
        );
        assert_eq!(err.hint(), None);
    }

    #[test]
    fn test_script_failures_carry_install_hint() {
        let launch = CompileFailure::ScriptLaunch {
            program: "traceur".to_string(),
            message: "No such file or directory".to_string(),
        };
        let exit = CompileFailure::ScriptExit {
            program: "traceur".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "SyntaxError".to_string(),
        };

        assert_eq!(launch.hint(), Some(SCRIPT_INSTALL_HINT));
        assert_eq!(exit.hint(), Some(SCRIPT_INSTALL_HINT));
        assert_eq!(
            launch.to_string(),
            "could not run 'traceur': No such file or directory"
        );
    }

    #[test]
    fn test_compile_error_forwards_hint() {
        let err = StylewatchError::Compile {
            source_path: PathBuf::from("scripts/c.js6"),
            failure: CompileFailure::ScriptLaunch {
                program: "traceur".to_string(),
                message: "not found".to_string(),
            },
        };
        assert_eq!(err.hint(), Some(SCRIPT_INSTALL_HINT));
    }

    #[test]
    fn test_error_display_subscription() {
        let err = StylewatchError::WatchSubscription {
            root: PathBuf::from("styles"),
            message: "permission denied".to_string(),
        };
        assert_eq!(err.to_string(), "failed to watch styles: permission denied");
    }
}
