//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::application::{
    BuildOptions, BuildUseCase, CancellationToken, ChangeWatcher, CompilePipeline, WatchOptions,
};
use crate::config::Config;
use crate::infrastructure::{LocalFs, ScriptCompiler, StyleCompiler};

/// Type alias for the concrete pipeline writing to local disk
pub type ConcretePipeline = CompilePipeline<LocalFs>;

/// Type alias for the concrete BuildUseCase
pub type ConcreteBuildUseCase = BuildUseCase<LocalFs>;

/// Type alias for the concrete ChangeWatcher
pub type ConcreteChangeWatcher = ChangeWatcher<LocalFs>;

/// Create the compile pipeline.
///
/// The style compiler is always registered; the script compiler only when
/// `scripts.enabled` is set.
pub fn create_pipeline(config: &Config) -> Arc<ConcretePipeline> {
    let mut pipeline =
        CompilePipeline::new(LocalFs::new()).with_compiler(Box::new(StyleCompiler::new()));
    if config.scripts.enabled {
        pipeline = pipeline.with_compiler(Box::new(ScriptCompiler::new(
            config.scripts.compiler.as_str(),
        )));
    }
    Arc::new(pipeline)
}

/// Create a build use case over `project_root`
pub fn create_build_use_case(
    pipeline: Arc<ConcretePipeline>,
    project_root: &Path,
    config: &Config,
) -> ConcreteBuildUseCase {
    let options = BuildOptions::new(project_root).with_policy(config.build.on_error);
    BuildUseCase::new(pipeline, options)
}

/// Create a watcher over `project_root` that stops when `token` is cancelled
pub fn create_change_watcher(
    pipeline: Arc<ConcretePipeline>,
    project_root: &Path,
    config: &Config,
    token: CancellationToken,
) -> ConcreteChangeWatcher {
    let options = WatchOptions::new(project_root)
        .with_policy(config.build.on_error)
        .with_debounce(config.watch.debounce());
    ChangeWatcher::new(pipeline, options).with_token(token)
}
