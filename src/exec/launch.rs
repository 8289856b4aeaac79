// src/exec/launch.rs

//! Low-level child launch: builds the `tokio::process::Command`, captures
//! stdout/stderr line by line, races the child's exit against the runner's
//! cancellation handle, and maps every failure mode into an
//! [`ExecutionResult`]. Nothing in this module returns an error to callers.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::exec::cancel::CancelSignal;
use crate::exec::outcome::ExecutionResult;

/// Fully resolved description of one launch attempt.
///
/// `program`/`args` are what the OS executes; `display_command`/`display_args`
/// are what the result record reports. They differ for `exec`, where the OS
/// runs `sh -c <line>` but the record carries the shell line itself.
#[derive(Debug)]
pub(crate) struct LaunchSpec {
    pub program: String,
    pub args: Vec<String>,
    pub display_command: String,
    pub display_args: Vec<String>,
    pub cwd: PathBuf,
    pub env: BTreeMap<String, String>,
    pub detached: bool,
}

/// Launch one child process and wait for it to finish or be cancelled.
pub(crate) async fn launch(spec: LaunchSpec, mut cancel: CancelSignal) -> ExecutionResult {
    if cancel.is_cancelled() {
        // The runner was cancelled before this call started; resolve as
        // killed without touching the OS.
        debug!(command = %spec.display_command, "runner already cancelled; not launching");
        return killed_result(&spec, None, "cancelled before launch".to_string());
    }

    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args)
        .current_dir(&spec.cwd)
        .env_clear()
        .envs(&spec.env)
        // Children never read interactive input; they see EOF on stdin.
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    if spec.detached {
        // Own process group, survives this process. Descendants it leaves
        // behind are accepted, not tracked.
        #[cfg(unix)]
        cmd.process_group(0);
        #[cfg(windows)]
        cmd.creation_flags(0x0000_0200); // CREATE_NEW_PROCESS_GROUP
        cmd.kill_on_drop(false);
    } else {
        cmd.kill_on_drop(true);
    }

    info!(
        command = %spec.display_command,
        detached = spec.detached,
        "starting process"
    );

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(err) => {
            // "command not found", permission denied, bad cwd... all surface
            // through the result record, never as an error return.
            warn!(command = %spec.display_command, error = %err, "process failed to start");
            return spawn_failure(&spec, &err);
        }
    };

    let stdout_task = collect_lines(child.stdout.take());
    let stderr_task = collect_lines(child.stderr.take());

    let (status_res, was_cancelled) = tokio::select! {
        status_res = child.wait() => (status_res, false),
        _ = cancel.cancelled() => {
            info!(command = %spec.display_command, "cancellation requested; killing process");
            if let Err(e) = child.kill().await {
                warn!(
                    command = %spec.display_command,
                    error = %e,
                    "failed to kill child process on cancellation"
                );
            }
            (child.wait().await, true)
        }
    };

    // Readers finish once the child's pipes close.
    let stdout = drain_lines(stdout_task).await;
    let stderr = drain_lines(stderr_task).await;

    let status = match status_res {
        Ok(status) => status,
        Err(err) => {
            warn!(command = %spec.display_command, error = %err, "waiting for process failed");
            return wait_failure(&spec, stdout, stderr, &err);
        }
    };

    let exit_code = status.code().unwrap_or(-1);
    let signal = status_signal(&status);
    let killed = was_cancelled || signal.is_some();

    info!(
        command = %spec.display_command,
        exit_code,
        killed,
        success = status.success(),
        "process exited"
    );

    let message = if exit_code == 0 && !killed {
        "success".to_string()
    } else if killed {
        match &signal {
            Some(name) => format!("terminated by {name}"),
            None => "terminated before exit".to_string(),
        }
    } else {
        format!("exited with code {exit_code}")
    };

    ExecutionResult {
        command: spec.display_command,
        args: spec.display_args,
        stdout,
        stderr,
        exit_code,
        signal,
        killed,
        message,
        trace: Vec::new(),
    }
}

/// Build a failure-shaped result for a target that could not be stat-ed
/// before an `exec_file` launch.
pub(crate) fn probe_failure(
    display_command: String,
    display_args: Vec<String>,
    err: &std::io::Error,
) -> ExecutionResult {
    let trace = vec![
        format!("stat probe for '{display_command}' failed"),
        err.to_string(),
    ];
    ExecutionResult {
        command: display_command,
        args: display_args,
        stdout: Vec::new(),
        stderr: Vec::new(),
        exit_code: err.raw_os_error().unwrap_or(-1),
        signal: None,
        killed: false,
        message: err.to_string(),
        trace,
    }
}

fn spawn_failure(spec: &LaunchSpec, err: &std::io::Error) -> ExecutionResult {
    ExecutionResult {
        command: spec.display_command.clone(),
        args: spec.display_args.clone(),
        stdout: Vec::new(),
        stderr: Vec::new(),
        exit_code: err.raw_os_error().unwrap_or(-1),
        signal: None,
        killed: false,
        message: err.to_string(),
        trace: vec![
            format!("spawning process for '{}' failed", spec.display_command),
            err.to_string(),
        ],
    }
}

fn wait_failure(
    spec: &LaunchSpec,
    stdout: Vec<String>,
    stderr: Vec<String>,
    err: &std::io::Error,
) -> ExecutionResult {
    ExecutionResult {
        command: spec.display_command.clone(),
        args: spec.display_args.clone(),
        stdout,
        stderr,
        exit_code: err.raw_os_error().unwrap_or(-1),
        signal: None,
        killed: false,
        message: err.to_string(),
        trace: vec![
            format!("waiting for process of '{}' failed", spec.display_command),
            err.to_string(),
        ],
    }
}

fn killed_result(spec: &LaunchSpec, signal: Option<String>, message: String) -> ExecutionResult {
    ExecutionResult {
        command: spec.display_command.clone(),
        args: spec.display_args.clone(),
        stdout: Vec::new(),
        stderr: Vec::new(),
        exit_code: -1,
        signal,
        killed: true,
        message,
        trace: Vec::new(),
    }
}

/// Consume a child output stream in the background, one trimmed line per
/// entry, in arrival order.
fn collect_lines<R>(stream: Option<R>) -> Option<JoinHandle<Vec<String>>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let stream = stream?;
    Some(tokio::spawn(async move {
        let reader = BufReader::new(stream);
        let mut lines = reader.lines();
        let mut collected = Vec::new();
        while let Ok(Some(line)) = lines.next_line().await {
            collected.push(line.trim().to_string());
        }
        collected
    }))
}

async fn drain_lines(task: Option<JoinHandle<Vec<String>>>) -> Vec<String> {
    match task {
        Some(task) => task.await.unwrap_or_default(),
        None => Vec::new(),
    }
}

#[cfg(unix)]
fn status_signal(status: &ExitStatus) -> Option<String> {
    use std::os::unix::process::ExitStatusExt;
    status.signal().map(signal_name)
}

#[cfg(not(unix))]
fn status_signal(_status: &ExitStatus) -> Option<String> {
    None
}

#[cfg(unix)]
fn signal_name(signal: i32) -> String {
    match signal {
        1 => "SIGHUP".to_string(),
        2 => "SIGINT".to_string(),
        3 => "SIGQUIT".to_string(),
        6 => "SIGABRT".to_string(),
        9 => "SIGKILL".to_string(),
        13 => "SIGPIPE".to_string(),
        15 => "SIGTERM".to_string(),
        other => format!("signal {other}"),
    }
}
