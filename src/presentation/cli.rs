//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags are accepted before or after the subcommand
//! - No subcommand means "build once, then watch"
//! - Flags win over `STYLEWATCH_*` variables, which win over `stylewatch.toml`

use clap::{Parser, Subcommand};

use crate::config::{ColorMode, Config};
use crate::domain::policies::FailurePolicy;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// stylewatch - compile SCSS and ES6 sources once or whenever they change
#[derive(Parser, Debug)]
#[command(name = "stylewatch")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'stylewatch' without a command to build once and then watch.")]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Report compile errors and keep going instead of stopping
    #[arg(short = 'k', long, global = true)]
    pub keep_going: bool,

    /// Compile style sheets only; ignore scripts/
    #[arg(long, global = true)]
    pub no_scripts: bool,

    /// Milliseconds of quiet before a changed file is recompiled
    #[arg(long, global = true, value_name = "MS")]
    pub debounce: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Compile every source once and exit
    Build,

    /// Watch styles/ and scripts/ and recompile on change (no initial build)
    Watch,
}

impl Cli {
    /// Layer command-line flags over an already loaded config
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if self.keep_going {
            config.build.on_error = FailurePolicy::Continue;
        }
        if self.no_scripts {
            config.scripts.enabled = false;
        }
        if let Some(ms) = self.debounce {
            config.watch.debounce_ms = ms;
        }
        if let Some(color) = self.color {
            config.output.color = match color {
                ColorWhen::Auto => ColorMode::Auto,
                ColorWhen::Always => ColorMode::Always,
                ColorWhen::Never => ColorMode::Never,
            };
        }
        config
    }
}
