//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::policies::FailurePolicy;
use crate::error::StylewatchResult;
use crate::infrastructure::compilers::DEFAULT_SCRIPT_COMPILER;

use super::loader::{self, ConfigWarning};

/// `[build]` section
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BuildConfig {
    /// `fail-fast` or `continue`
    #[serde(default)]
    pub on_error: FailurePolicy,
}

/// `[watch]` section
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WatchConfig {
    /// Quiet period before recompiling; 0 compiles on every event
    #[serde(default)]
    pub debounce_ms: u64,
}

impl WatchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// `[scripts]` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScriptsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Program invoked as `<compiler> --script <in> --out <out>`
    #[serde(default = "default_script_compiler")]
    pub compiler: String,
}

impl Default for ScriptsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            compiler: default_script_compiler(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_script_compiler() -> String {
    DEFAULT_SCRIPT_COMPILER.to_string()
}

/// `[output]` section
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub scripts: ScriptsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StylewatchResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> StylewatchResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `stylewatch.toml` from `project_root` if present, then apply
    /// environment overrides
    pub fn load_or_default(project_root: &Path) -> StylewatchResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (STYLEWATCH_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
