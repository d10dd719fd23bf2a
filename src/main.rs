//! stylewatch CLI - compile SCSS and ES6 sources
//!
//! Usage: stylewatch [COMMAND]
//!
//! Commands:
//!   (none)  build once, then watch for changes
//!   build   compile every source once and exit
//!   watch   recompile sources as they change

use anyhow::Result;
use clap::Parser;

use stylewatch::config::Config;
use stylewatch::presentation::{Cli, Commands};

mod commands;
mod logging;
mod ui;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let json = cli.json;
    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let (config, warnings) = Config::load_or_default(commands::project_root())?;
    let config = cli.apply_overrides(config);
    let ui = ui::context::UiContext::new(cli.json, &config);

    if !ui.json {
        ui::output::print_config_warnings(&warnings, ui.color, ui.unicode);
    }
    tracing::debug!(?config, "effective configuration");

    match cli.command {
        None => commands::watch::cmd_watch(&config, &ui, true),
        Some(Commands::Build) => commands::build::cmd_build(&config, &ui),
        Some(Commands::Watch) => commands::watch::cmd_watch(&config, &ui, false),
    }
}
