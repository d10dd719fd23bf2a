//! Test environment for isolated stylewatch runs.
//!
//! Provides `TestEnv` - a temp project directory plus helpers to run the
//! stylewatch binary in it, either to completion or in the background.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tempfile::TempDir;

/// Variables that would change behavior if inherited from the host
const SCRUBBED_ENV: &[&str] = &[
    "STYLEWATCH_ON_ERROR",
    "STYLEWATCH_DEBOUNCE_MS",
    "STYLEWATCH_SCRIPTS",
    "STYLEWATCH_SCRIPT_COMPILER",
    "RUST_LOG",
    "GITHUB_ACTIONS",
];

/// Result of running a stylewatch CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Lines of stdout containing `needle`
    pub fn stdout_lines_with(&self, needle: &str) -> Vec<&str> {
        self.stdout.lines().filter(|l| l.contains(needle)).collect()
    }
}

/// A background stylewatch process (watch modes never exit on their own)
pub struct RunningProcess {
    child: Child,
}

impl RunningProcess {
    /// True while the process has not exited
    pub fn is_running(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }

    /// Kill the process and collect what it printed
    pub fn stop(mut self) -> TestResult {
        let _ = self.child.kill();
        let output = self
            .child
            .wait_with_output()
            .expect("Failed to collect stylewatch output");
        TestResult::from_output(output)
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub project_root: TempDir,
    bin: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create temp project"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_stylewatch")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file, creating parent directories
    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        self
    }

    pub fn mkdir(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.project_path(relative)).expect("Failed to create directory");
        self
    }

    pub fn read(&self, relative: &str) -> Option<String> {
        fs::read_to_string(self.project_path(relative)).ok()
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.project_path(relative).exists()
    }

    fn command(&self, args: &[&str], env_vars: &[(&str, &str)]) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("NO_COLOR", "1");
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Run stylewatch to completion from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run stylewatch to completion with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let output = self
            .command(args, env_vars)
            .output()
            .expect("Failed to execute stylewatch");
        TestResult::from_output(output)
    }

    /// Start stylewatch in the background
    pub fn spawn(&self, args: &[&str]) -> RunningProcess {
        self.spawn_with_env(args, &[])
    }

    pub fn spawn_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> RunningProcess {
        let child = self
            .command(args, env_vars)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to start stylewatch");
        RunningProcess { child }
    }
}

/// Poll `cond` until it holds or `timeout` elapses
pub fn wait_until(timeout: Duration, mut cond: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if cond() {
            return true;
        }
        thread::sleep(Duration::from_millis(25));
    }
    cond()
}

/// Give a freshly spawned watcher time to subscribe
pub fn settle() {
    thread::sleep(Duration::from_millis(600));
}

pub fn path_in(root: &Path, relative: &str) -> PathBuf {
    root.join(relative)
}
