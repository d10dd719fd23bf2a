//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::policies::FailurePolicy;
use crate::error::{StylewatchError, StylewatchResult};

use super::types::Config;

/// Project config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "stylewatch.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> StylewatchResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown = Vec::new();
    let config: Config =
        serde_ignored::deserialize(toml::de::Deserializer::new(&content), |ignored| {
            unknown.push(ignored.to_string());
        })
        .map_err(|e| StylewatchError::Config {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let warnings = unknown
        .iter()
        .map(|dotted| {
            // "watch.debounce_mss" -> "debounce_mss"
            let key = dotted.rsplit('.').next().unwrap_or(dotted);
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: line_of(&content, key),
                suggestion: suggest_key(key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the project config if it exists, otherwise defaults; env overrides
/// are applied either way
pub fn load_or_default(project_root: &Path) -> StylewatchResult<(Config, Vec<ConfigWarning>)> {
    let path = project_root.join(CONFIG_FILE_NAME);
    let (config, warnings) = if path.is_file() {
        tracing::debug!(path = %path.display(), "loading config");
        load_with_warnings(&path)?
    } else {
        (Config::default(), Vec::new())
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (STYLEWATCH_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup`.
///
/// Values that do not parse are ignored with a warning.
pub fn apply_env_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    // STYLEWATCH_ON_ERROR
    if let Some(value) = lookup("STYLEWATCH_ON_ERROR") {
        match FailurePolicy::from_str_loose(&value) {
            Some(policy) => config.build.on_error = policy,
            None => tracing::warn!(value = %value, "ignoring unknown STYLEWATCH_ON_ERROR"),
        }
    }

    // STYLEWATCH_DEBOUNCE_MS
    if let Some(value) = lookup("STYLEWATCH_DEBOUNCE_MS") {
        match value.trim().parse::<u64>() {
            Ok(ms) => config.watch.debounce_ms = ms,
            Err(_) => tracing::warn!(value = %value, "ignoring non-numeric STYLEWATCH_DEBOUNCE_MS"),
        }
    }

    // STYLEWATCH_SCRIPTS
    if let Some(value) = lookup("STYLEWATCH_SCRIPTS") {
        config.scripts.enabled = !matches!(
            value.trim().to_lowercase().as_str(),
            "0" | "false" | "off" | "no"
        );
    }

    // STYLEWATCH_SCRIPT_COMPILER
    if let Some(value) = lookup("STYLEWATCH_SCRIPT_COMPILER") {
        if !value.trim().is_empty() {
            config.scripts.compiler = value.trim().to_string();
        }
    }

    config
}

/// 1-based line of the first occurrence of `key`
fn line_of(content: &str, key: &str) -> Option<usize> {
    content.lines().position(|line| line.contains(key)).map(|i| i + 1)
}

/// Closest known key within edit distance 2
fn suggest_key(unknown: &str) -> Option<String> {
    const KNOWN_KEYS: &[&str] = &[
        "build",
        "on_error",
        "watch",
        "debounce_ms",
        "scripts",
        "enabled",
        "compiler",
        "output",
        "color",
    ];

    KNOWN_KEYS
        .iter()
        .map(|known| (edit_distance(unknown, known), *known))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, known)| known.to_string())
}

/// Levenshtein distance over chars, one row at a time
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
