// src/exec/outcome.rs

//! The uniform result record produced by every runner operation.

/// Outcome of one process execution.
///
/// Constructed exactly once by the runner when a launch attempt concludes;
/// never mutated afterwards. Callers branch on [`succeeded`] or `exit_code`
/// instead of catching errors — a failed command is an expected outcome here,
/// not an exceptional one.
///
/// [`succeeded`]: ExecutionResult::succeeded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// The executable, file path, or full shell line that was invoked.
    pub command: String,
    /// Argument vector (empty when a full shell line was used).
    pub args: Vec<String>,
    /// Captured stdout, one trimmed line per entry, in arrival order.
    pub stdout: Vec<String>,
    /// Captured stderr, one trimmed line per entry, in arrival order.
    pub stderr: Vec<String>,
    /// The child's exit code; 0 means success. A platform error number (or
    /// -1 when unknown) when the process failed to start or died on a signal.
    pub exit_code: i32,
    /// Name of the terminating signal (e.g. `"SIGKILL"`), `None` when the
    /// process exited normally.
    pub signal: Option<String>,
    /// True if the process was terminated by signal/cancellation rather than
    /// exiting on its own.
    pub killed: bool,
    /// `"success"` on the happy path, an error description otherwise.
    pub message: String,
    /// Diagnostic context lines on failure (the normalized error chain),
    /// empty otherwise.
    pub trace: Vec<String>,
}

impl ExecutionResult {
    /// True iff the process exited on its own with code 0.
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0 && !self.killed
    }

    /// Collected stdout lines.
    pub fn output_lines(&self) -> &[String] {
        &self.stdout
    }

    /// Stdout as one newline-joined string.
    pub fn stdout_text(&self) -> String {
        self.stdout.join("\n")
    }

    /// Stderr as one newline-joined string.
    pub fn stderr_text(&self) -> String {
        self.stderr.join("\n")
    }
}
