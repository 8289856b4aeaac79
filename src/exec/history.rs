// src/exec/history.rs

//! Append-only log of prior executions, for introspection and debugging.

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::exec::outcome::ExecutionResult;

/// Which runner operation produced a history record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationKind {
    Spawn,
    Exec,
    ExecFile,
}

impl InvocationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InvocationKind::Spawn => "spawn",
            InvocationKind::Exec => "exec",
            InvocationKind::ExecFile => "exec_file",
        }
    }
}

impl fmt::Display for InvocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record of a past execution.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub kind: InvocationKind,
    pub result: ExecutionResult,
}

/// Shared, append-only execution history.
///
/// Every operation appends exactly one entry per call, success or failure.
/// Appends are guarded by a mutex so concurrent calls on the same runner are
/// safe; the lock is never held across an await point.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Arc<Mutex<Vec<HistoryEntry>>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record.
    pub fn record(&self, kind: InvocationKind, result: &ExecutionResult) {
        let entry = HistoryEntry {
            kind,
            result: result.clone(),
        };
        self.entries
            .lock()
            .expect("history mutex poisoned")
            .push(entry);
    }

    /// Number of recorded executions.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("history mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clone out the current records.
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries
            .lock()
            .expect("history mutex poisoned")
            .clone()
    }
}
