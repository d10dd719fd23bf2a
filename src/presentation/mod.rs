//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions and CLI-over-config precedence
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use stylewatch::presentation::factory;
//!
//! let pipeline = factory::create_pipeline(&config);
//! let summary = factory::create_build_use_case(pipeline, root, &config).run(|e| ...)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_build_use_case, create_change_watcher, create_pipeline};
