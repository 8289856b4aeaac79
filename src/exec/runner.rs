// src/exec/runner.rs

//! The process-execution wrapper.
//!
//! A [`ProcessRunner`] owns an execution context (environment snapshot,
//! working directory, detached policy, cancellation handle, history log) and
//! exposes three operations that launch a child process and resolve to an
//! [`ExecutionResult`]:
//!
//! - [`spawn`](ProcessRunner::spawn) — direct launch of a program + argv
//! - [`exec`](ProcessRunner::exec) — a full command line via the platform shell
//! - [`exec_file`](ProcessRunner::exec_file) — a stat-checked executable path
//!
//! None of the three ever returns an error: spawn failures, non-zero exits
//! and cancellations all come back as a normal result record. Callers branch
//! on [`ExecutionResult::succeeded`], not on `?`.

use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::exec::cancel::CancelHandle;
use crate::exec::history::{History, HistoryEntry, InvocationKind};
use crate::exec::launch::{LaunchSpec, launch, probe_failure};
use crate::exec::outcome::ExecutionResult;

/// Immutable default configuration for a [`ProcessRunner`].
///
/// An explicit value, merged with per-call [`SpawnOptions`]; there is no
/// shared module state. [`Default`] snapshots the current directory and the
/// inherited environment at the moment it is evaluated.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Default policy for starting children detached from this process.
    pub detached: bool,
    /// Working directory for children.
    pub cwd: PathBuf,
    /// Environment variables for children.
    pub env: BTreeMap<String, String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            detached: false,
            cwd: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env: env::vars().collect(),
        }
    }
}

/// Per-call options, the same surface for all three operations.
#[derive(Debug, Clone, Default)]
pub struct SpawnOptions {
    /// Override of the runner's detached policy for this call.
    pub detached: Option<bool>,
    /// Entries merged over the runner's environment snapshot for this call.
    pub env: Option<BTreeMap<String, String>>,
    /// Working directory override for this call.
    pub cwd: Option<PathBuf>,
}

/// Stateful process-execution context. Not a singleton; independent
/// instances coexist freely and share nothing.
#[derive(Debug)]
pub struct ProcessRunner {
    cancel: CancelHandle,
    history: History,
    cwd: PathBuf,
    env: BTreeMap<String, String>,
    detached: bool,
}

impl ProcessRunner {
    /// Runner with snapshot defaults (current directory, inherited
    /// environment, attached children).
    pub fn new() -> Self {
        Self::with_config(RunnerConfig::default())
    }

    /// Runner with an explicit configuration value.
    pub fn with_config(config: RunnerConfig) -> Self {
        Self {
            cancel: CancelHandle::new(),
            history: History::new(),
            cwd: config.cwd,
            env: config.env,
            detached: config.detached,
        }
    }

    /// The cancellation handle shared by every invocation of this runner.
    ///
    /// Triggering it kills all in-flight children launched through this
    /// runner; each affected call resolves with `killed == true`. There is
    /// no per-call cancellation.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Shorthand for `cancel_handle().cancel()`.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Snapshot of the execution history so far.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.snapshot()
    }

    /// Number of recorded executions.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Working directory children run in by default.
    pub fn working_directory(&self) -> &Path {
        &self.cwd
    }

    /// Environment snapshot children inherit by default.
    pub fn environment(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    /// Launch `command` with `args` directly (no shell).
    ///
    /// Resolves with the child's real exit code, or with the platform error
    /// mapped into the result when the process could never start.
    pub async fn spawn<I, S>(&self, command: &str, args: I, options: SpawnOptions) -> ExecutionResult
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let spec = self.build_spec(
            command.to_string(),
            args.clone(),
            command.to_string(),
            args,
            &options,
        );
        let result = launch(spec, self.cancel.signal()).await;
        self.history.record(InvocationKind::Spawn, &result);
        result
    }

    /// Run a full `command_line` through the platform shell and wait for it.
    ///
    /// The result's `command` carries the shell line; `args` is empty.
    pub async fn exec(&self, command_line: &str, options: SpawnOptions) -> ExecutionResult {
        let (program, shell_args) = shell_invocation(command_line);
        let spec = self.build_spec(
            program,
            shell_args,
            command_line.to_string(),
            Vec::new(),
            &options,
        );
        let result = launch(spec, self.cancel.signal()).await;
        self.history.record(InvocationKind::Exec, &result);
        result
    }

    /// Execute the file at `path` directly (no shell interpolation), after
    /// verifying it is stat-able.
    pub async fn exec_file<I, S>(
        &self,
        path: impl AsRef<Path>,
        args: I,
        options: SpawnOptions,
    ) -> ExecutionResult
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let path = path.as_ref();
        let path_str = path.display().to_string();
        let args: Vec<String> = args.into_iter().map(Into::into).collect();

        if let Err(err) = tokio::fs::metadata(path).await {
            warn!(path = %path_str, error = %err, "exec_file target not stat-able");
            let result = probe_failure(path_str, args, &err);
            self.history.record(InvocationKind::ExecFile, &result);
            return result;
        }

        let spec = self.build_spec(path_str.clone(), args.clone(), path_str, args, &options);
        let result = launch(spec, self.cancel.signal()).await;
        self.history.record(InvocationKind::ExecFile, &result);
        result
    }

    /// Merge per-call options over the runner context into a launch spec.
    fn build_spec(
        &self,
        program: String,
        args: Vec<String>,
        display_command: String,
        display_args: Vec<String>,
        options: &SpawnOptions,
    ) -> LaunchSpec {
        let mut env = self.env.clone();
        if let Some(extra) = &options.env {
            env.extend(extra.clone());
        }
        LaunchSpec {
            program,
            args,
            display_command,
            display_args,
            cwd: options.cwd.clone().unwrap_or_else(|| self.cwd.clone()),
            env,
            detached: options.detached.unwrap_or(self.detached),
        }
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Shell invocation appropriate for the platform.
fn shell_invocation(command_line: &str) -> (String, Vec<String>) {
    if cfg!(windows) {
        (
            "cmd".to_string(),
            vec!["/C".to_string(), command_line.to_string()],
        )
    } else {
        (
            "sh".to_string(),
            vec!["-c".to_string(), command_line.to_string()],
        )
    }
}
