use std::sync::Arc;

use anyhow::{Context, Result};
use stylewatch::application::CancellationToken;
use stylewatch::config::Config;
use stylewatch::presentation::factory;

use crate::ui::context::UiContext;
use crate::ui::views::events::emit;

/// Watch until Ctrl+C, optionally after one full build
pub fn cmd_watch(config: &Config, ui: &UiContext, initial_build: bool) -> Result<()> {
    let pipeline = factory::create_pipeline(config);

    if initial_build {
        super::build::run_build(Arc::clone(&pipeline), config, ui)?;
    }

    // Set up Ctrl+C handler
    let token = CancellationToken::new();
    let handler_token = token.clone();
    ctrlc::set_handler(move || handler_token.cancel())
        .context("failed to install Ctrl+C handler")?;

    let mut watcher =
        factory::create_change_watcher(pipeline, super::project_root(), config, token);
    watcher.start(|event| emit(ui, &event))?;

    Ok(())
}
