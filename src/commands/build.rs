use std::sync::Arc;

use anyhow::Result;
use stylewatch::application::BuildSummary;
use stylewatch::config::Config;
use stylewatch::presentation::factory::{self, ConcretePipeline};
use stylewatch::StylewatchError;

use crate::ui::context::UiContext;
use crate::ui::views::events::emit;

pub fn cmd_build(config: &Config, ui: &UiContext) -> Result<()> {
    let summary = run_build(factory::create_pipeline(config), config, ui)?;

    if !summary.is_success() {
        return Err(StylewatchError::BuildFailed {
            failed: summary.failed,
        }
        .into());
    }
    Ok(())
}

/// One pass over all sources; failures under the continue policy are only
/// counted
pub fn run_build(
    pipeline: Arc<ConcretePipeline>,
    config: &Config,
    ui: &UiContext,
) -> Result<BuildSummary> {
    let use_case = factory::create_build_use_case(pipeline, super::project_root(), config);
    let summary = use_case.run(|event| emit(ui, &event))?;
    tracing::debug!(
        compiled = summary.compiled,
        failed = summary.failed,
        "build finished"
    );
    Ok(summary)
}
