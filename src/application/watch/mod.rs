//! Change Watcher
//!
//! Continuous recompilation driven by filesystem notifications:
//! - `ChangeWatcher` - subscribes to `styles/` and `scripts/` and runs the
//!   event loop on the caller's thread
//! - `CancellationToken` - stops the loop from another thread (Ctrl+C)
//! - `WatchState` - `Idle` → `Watching` → `Stopped`
//! - `PendingChanges` - optional debounce of bursts
//!
//! ## Usage
//!
//! ```ignore
//! let mut watcher = ChangeWatcher::new(pipeline, WatchOptions::new(root));
//! let token = watcher.token();
//! ctrlc::set_handler(move || token.cancel())?;
//! watcher.start(|event| render(event))?;
//! ```

mod state;
mod token;
mod use_case;


pub use state::{qualifying_changes, PendingChanges, WatchState};
pub use token::CancellationToken;
pub use use_case::{ChangeWatcher, WatchOptions, POLL_INTERVAL};
