//! Query debouncing

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A timer that fired, tagged with the schedule it belongs to
#[derive(Debug)]
struct Fired {
    seq: u64,
    value: String,
}

/// The currently scheduled commit
#[derive(Debug)]
struct Pending {
    seq: u64,
    handle: JoinHandle<()>,
}

/// Delays a value until input has paused for a fixed interval.
///
/// Each `schedule` cancels the previous timer. Fired timers are delivered
/// through [`Debouncer::fired`]; a timer that fired but was superseded
/// before delivery is dropped there. Dropping the debouncer cancels any
/// pending timer.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    seq: u64,
    pending: Option<Pending>,
    tx: mpsc::UnboundedSender<Fired>,
    rx: mpsc::UnboundedReceiver<Fired>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            delay,
            seq: 0,
            pending: None,
            tx,
            rx,
        }
    }

    /// Whether a commit is scheduled and not yet delivered
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replace any scheduled commit with one for `value`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, value: impl Into<String>) {
        self.cancel();

        self.seq += 1;
        let fired = Fired {
            seq: self.seq,
            value: value.into(),
        };
        let delay = self.delay;
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(fired);
        });

        self.pending = Some(Pending {
            seq: self.seq,
            handle,
        });
    }

    /// Cancel the scheduled commit, if any
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
        }
    }

    /// Wait for the scheduled commit and return its value.
    ///
    /// Returns `None` immediately when nothing is scheduled. Cancel safe.
    pub async fn fired(&mut self) -> Option<String> {
        while let Some(seq) = self.pending.as_ref().map(|p| p.seq) {
            let fired = self.rx.recv().await?;
            if fired.seq == seq {
                self.pending = None;
                return Some(fired.value);
            }
            tracing::trace!("Dropping superseded debounce commit {}", fired.seq);
        }
        None
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
