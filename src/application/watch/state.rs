//! Watcher lifecycle and event bookkeeping

use std::path::PathBuf;
use std::time::{Duration, Instant};

use notify::event::{ModifyKind, RenameMode};
use notify::{Event, EventKind};

use crate::application::event::ChangeKind;

/// Watcher lifecycle: `Idle` → `Watching` → `Stopped`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatchState {
    /// Nothing subscribed yet
    #[default]
    Idle,
    /// Subscriptions are live and events are being handled
    Watching,
    /// Cancelled or failed; a stopped watcher is not restarted
    Stopped,
}

/// Map a notify event to the source paths it touched and how.
///
/// Only creations, renames into a directory and content writes qualify.
///
/// A rename inside a watched directory arrives as `From`, `To` and a paired
/// `Both`. Only `To` counts, so a save-by-rename compiles once; `To` is also
/// the only half delivered when a file is moved in from elsewhere.
pub fn qualifying_changes(event: &Event) -> Vec<(PathBuf, ChangeKind)> {
    let change = match event.kind {
        EventKind::Create(_) | EventKind::Modify(ModifyKind::Name(RenameMode::To)) => {
            ChangeKind::Create
        }
        EventKind::Modify(ModifyKind::Data(_)) | EventKind::Modify(ModifyKind::Any) => {
            ChangeKind::Write
        }
        _ => return Vec::new(),
    };
    event.paths.iter().map(|p| (p.clone(), change)).collect()
}

/// Changes waiting for the quiet period to elapse.
///
/// With a zero window every change is ready as soon as it is added, so
/// nothing is coalesced.
#[derive(Debug)]
pub struct PendingChanges {
    window: Duration,
    pending: Vec<(PathBuf, ChangeKind)>,
    last_change: Option<Instant>,
}

impl PendingChanges {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: Vec::new(),
            last_change: None,
        }
    }

    /// Queue a change. A path already queued keeps its place and first kind.
    pub fn add(&mut self, path: PathBuf, change: ChangeKind) {
        if self.window.is_zero() || !self.pending.iter().any(|(p, _)| *p == path) {
            self.pending.push((path, change));
        }
        self.last_change = Some(Instant::now());
    }

    /// True once there is something queued and the window has passed
    pub fn is_ready(&self) -> bool {
        match self.last_change {
            Some(last) => !self.pending.is_empty() && last.elapsed() >= self.window,
            None => false,
        }
    }

    /// Take everything queued, in arrival order
    pub fn take(&mut self) -> Vec<(PathBuf, ChangeKind)> {
        self.last_change = None;
        std::mem::take(&mut self.pending)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
