//! What the attached terminal can display

use is_terminal::IsTerminal;

/// Variables set by common CI providers
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "JENKINS_HOME",
    "BUILDKITE",
    "CIRCLECI",
    "TRAVIS",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

impl TerminalCapabilities {
    /// Inspect the process environment and stdout
    pub fn detect() -> Self {
        Self::from_env(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
    }

    pub(crate) fn from_env(lookup: impl Fn(&str) -> Option<String>, stdout_is_tty: bool) -> Self {
        let dumb = lookup("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));

        Self {
            supports_color: stdout_is_tty && !dumb && lookup("NO_COLOR").is_none(),
            supports_unicode: !dumb && !plain_locale(&lookup),
            is_ci: CI_VARS.iter().any(|key| lookup(key).is_some()),
        }
    }
}

/// First locale variable that is set decides; C and POSIX mean ASCII only
fn plain_locale(lookup: &impl Fn(&str) -> Option<String>) -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|key| lookup(key).filter(|v| !v.is_empty()))
        .is_some_and(|v| v.eq_ignore_ascii_case("c") || v.eq_ignore_ascii_case("posix"))
}
