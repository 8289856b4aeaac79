// src/exec/cancel.rs

//! Cooperative cancellation shared by all invocations of one runner.
//!
//! A [`CancelHandle`] is cloneable and can be triggered from anywhere (a
//! Ctrl-C task, another async task, a drop guard). Every in-flight launch on
//! the owning runner races its child's exit against [`CancelSignal`]; when
//! the handle fires, the child is killed and the call resolves with
//! `killed = true`.

use tokio::sync::watch;

/// Cloneable cancellation token. One per [`ProcessRunner`] instance; there is
/// no per-call cancellation.
///
/// [`ProcessRunner`]: crate::exec::ProcessRunner
#[derive(Debug, Clone)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Create a fresh, untriggered handle.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    /// Request termination of every in-flight child launched through the
    /// owning runner. Idempotent.
    pub fn cancel(&self) {
        // send_replace updates the flag even with no live subscribers, so
        // calls issued later still observe the cancellation.
        self.tx.send_replace(true);
    }

    /// Whether the handle has been triggered.
    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Subscribe a launch to this handle.
    pub(crate) fn signal(&self) -> CancelSignal {
        CancelSignal {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for CancelHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-launch view of a [`CancelHandle`].
#[derive(Debug)]
pub(crate) struct CancelSignal {
    rx: watch::Receiver<bool>,
}

impl CancelSignal {
    /// Resolves once the owning handle fires. Never resolves if the handle
    /// is dropped without firing, which keeps the `select!` race in the
    /// launch path pending on the child alone.
    pub(crate) async fn cancelled(&mut self) {
        if self.rx.wait_for(|fired| *fired).await.is_err() {
            // Sender gone without firing; park forever.
            std::future::pending::<()>().await;
        }
    }

    /// Whether cancellation already fired.
    pub(crate) fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }
}
