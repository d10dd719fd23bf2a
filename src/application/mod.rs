//! Application Layer
//!
//! Use cases that orchestrate the build flow.
//! This layer:
//! - Depends on the Domain layer (classifier, entities, ports, policies)
//! - Does NOT perform I/O itself; compilers and the file system are injected
//! - Reports progress as `BuildEvent`s through a callback
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - One pass over `styles/*.scss` and `scripts/*.js6`
//! - `ChangeWatcher` - Recompile sources as they are created or written
//!
//! ## Services
//!
//! - `CompilePipeline` - Compile-then-persist, shared by build and watch

pub mod build;
pub mod event;
pub mod pipeline;
pub mod watch;

#[cfg(test)]
pub(crate) mod testing;

pub use build::{BuildOptions, BuildSummary, BuildUseCase};
pub use event::{BuildEvent, ChangeKind};
pub use pipeline::{CompilePipeline, ProcessOutcome};
pub use watch::{CancellationToken, ChangeWatcher, WatchOptions, WatchState};
