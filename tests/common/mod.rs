//! Common test utilities for stylewatch CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus helpers to run the binary
//! - `RunningProcess`: A long-running `watch` invocation
//! - Fixtures: Reusable source content

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
