//! stylewatch - SCSS and ES6 build tool
//!
//! Compiles `styles/*.scss` to CSS and `scripts/*.js6` to JavaScript, either
//! once (`build`) or continuously as files are created and written (`watch`).
//! Both paths share one compile-then-persist operation and a caller-selected
//! failure policy.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    BuildEvent, BuildSummary, BuildUseCase, CancellationToken, ChangeWatcher, CompilePipeline,
};
pub use config::Config;
pub use domain::policies::FailurePolicy;
pub use domain::value_objects::{classify, derive_output_path, SourceKind};
pub use error::{CompileFailure, StylewatchError, StylewatchResult};
