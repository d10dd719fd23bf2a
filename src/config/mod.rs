//! Configuration module for stylewatch
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (STYLEWATCH_*)
//! 3. Project config (`stylewatch.toml` in the working directory)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{apply_env_overrides, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{BuildConfig, ColorMode, Config, OutputConfig, ScriptsConfig, WatchConfig};
