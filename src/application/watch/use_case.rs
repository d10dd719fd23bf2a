//! Change Watcher implementation

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::event::{BuildEvent, ChangeKind};
use crate::application::pipeline::CompilePipeline;
use crate::domain::policies::FailurePolicy;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{classify, SourceKind};
use crate::error::{StylewatchError, StylewatchResult};

use super::state::{qualifying_changes, PendingChanges, WatchState};
use super::token::CancellationToken;

/// How long the loop waits for an event before re-checking the token
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Watch options
#[derive(Debug, Clone, Default)]
pub struct WatchOptions {
    /// Directory containing `styles/` and `scripts/`
    pub project_root: PathBuf,
    /// Reaction to a compile error while watching
    pub policy: FailurePolicy,
    /// Quiet period before queued changes are compiled; zero compiles every
    /// event as it arrives
    pub debounce: Duration,
}

impl WatchOptions {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

/// Change Watcher
///
/// Subscribes (non-recursively) to the source roots that exist when `start`
/// is called and recompiles sources as they are created or written. Roots
/// created later are not picked up. Runs on the caller's thread until the
/// token is cancelled or a fatal error occurs.
pub struct ChangeWatcher<F: FileSystem> {
    pipeline: Arc<CompilePipeline<F>>,
    options: WatchOptions,
    token: CancellationToken,
    state: WatchState,
}

impl<F: FileSystem> ChangeWatcher<F> {
    pub fn new(pipeline: Arc<CompilePipeline<F>>, options: WatchOptions) -> Self {
        Self {
            pipeline,
            options,
            token: CancellationToken::new(),
            state: WatchState::Idle,
        }
    }

    /// Use an existing token, e.g. one already wired to Ctrl+C
    pub fn with_token(mut self, token: CancellationToken) -> Self {
        self.token = token;
        self
    }

    /// A clone of the token that stops this watcher
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    /// Candidate roots for every kind the pipeline compiles
    pub fn watch_set(&self) -> Vec<(SourceKind, PathBuf)> {
        self.pipeline
            .kinds()
            .into_iter()
            .filter_map(|kind| {
                kind.root_dir()
                    .map(|dir| (kind, self.options.project_root.join(dir)))
            })
            .collect()
    }

    /// Subscribe and block until cancelled.
    ///
    /// Emits `Shutdown` and returns `Ok(())` on cancellation. A subscription
    /// failure, or a compile failure under `FailFast`, stops the watcher and
    /// is returned.
    pub fn start(&mut self, on_event: impl Fn(BuildEvent)) -> StylewatchResult<()> {
        if self.state != WatchState::Idle {
            return Err(StylewatchError::WatcherInit {
                message: "watcher has already been started".to_string(),
            });
        }

        let result = self.subscribe_and_run(&on_event);
        self.state = WatchState::Stopped;

        match &result {
            Ok(()) => on_event(BuildEvent::Shutdown),
            Err(err) => tracing::debug!(error = %err, "watcher stopped"),
        }
        result
    }

    fn subscribe_and_run(&mut self, on_event: &dyn Fn(BuildEvent)) -> StylewatchResult<()> {
        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| {
                let _ = tx.send(res);
            },
            Config::default(),
        )
        .map_err(|e| StylewatchError::WatcherInit {
            message: e.to_string(),
        })?;

        for (kind, root) in self.watch_set() {
            let label = BuildEvent::root(&root);
            if !self.pipeline.file_system().is_dir(&root) {
                tracing::info!(root = %label, "root missing, not watching");
                on_event(BuildEvent::RootSkipped { root: label, kind });
                continue;
            }

            watcher
                .watch(&root, RecursiveMode::NonRecursive)
                .map_err(|e| StylewatchError::WatchSubscription {
                    root: root.clone(),
                    message: e.to_string(),
                })?;
            tracing::info!(root = %label, "subscribed");
            on_event(BuildEvent::RootWatched { root: label, kind });
        }

        self.state = WatchState::Watching;
        self.run_loop(&rx, on_event)
    }

    /// Handle notifications from `rx` until the token is cancelled
    pub(super) fn run_loop(
        &self,
        rx: &Receiver<notify::Result<Event>>,
        on_event: &dyn Fn(BuildEvent),
    ) -> StylewatchResult<()> {
        let mut pending = PendingChanges::new(self.options.debounce);

        while !self.token.is_cancelled() {
            match rx.recv_timeout(POLL_INTERVAL) {
                Ok(Ok(event)) => self.queue(&event, &mut pending),
                Ok(Err(err)) => {
                    tracing::warn!(error = %err, "file watcher error");
                    on_event(BuildEvent::WatchError {
                        message: err.to_string(),
                    });
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(StylewatchError::WatcherInit {
                        message: "file watcher stopped delivering events".to_string(),
                    });
                }
            }

            if pending.is_ready() {
                for (path, change) in pending.take() {
                    self.handle(path, change, on_event)?;
                }
            }
        }

        Ok(())
    }

    fn queue(&self, event: &Event, pending: &mut PendingChanges) {
        let changes = qualifying_changes(event);
        if changes.is_empty() {
            tracing::debug!(kind = ?event.kind, paths = ?event.paths, "ignoring event");
            return;
        }

        for (path, change) in changes {
            let kind = classify(&path);
            if !self.pipeline.supports(kind) || self.pipeline.file_system().is_dir(&path) {
                tracing::debug!(path = %path.display(), "ignoring path");
                continue;
            }
            pending.add(path, change);
        }
    }

    fn handle(
        &self,
        path: PathBuf,
        change: ChangeKind,
        on_event: &dyn Fn(BuildEvent),
    ) -> StylewatchResult<()> {
        on_event(BuildEvent::FileChanged {
            path: path.display().to_string(),
            change,
            kind: classify(&path),
        });
        self.pipeline
            .process(&path, self.options.policy, on_event)
            .map(|_| ())
    }
}
