use stylewatch::config::{ColorMode, Config};

use crate::ui::terminal::TerminalCapabilities;

/// How events are rendered for this run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    /// `config` must already have CLI overrides applied
    pub fn new(json: bool, config: &Config) -> Self {
        Self::from_caps(json, config, TerminalCapabilities::detect())
    }

    pub(crate) fn from_caps(json: bool, config: &Config, caps: TerminalCapabilities) -> Self {
        let color = match config.output.color {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color && !caps.is_ci,
        };

        Self {
            json,
            color: color && !json,
            unicode: caps.supports_unicode,
        }
    }
}
