//! Hand-off point between the ingestion handler and the alert dispatcher.

use aquawatch_core::types::DbId;
use tokio::sync::mpsc;

/// One threshold breach waiting to be fanned out to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertJob {
    pub reservoir_id: DbId,
    pub reading_id: DbId,
    /// Raw level from the request that triggered the alert.
    pub level: f64,
}

/// Cloneable sender side of the alert queue.
///
/// [`enqueue`](AlertQueue::enqueue) never waits: the channel is unbounded so
/// a request handler returns as soon as the job is handed over.
#[derive(Debug, Clone)]
pub struct AlertQueue {
    sender: Option<mpsc::UnboundedSender<AlertJob>>,
}

impl AlertQueue {
    /// Create a queue and the receiver to hand to
    /// [`AlertDispatcher::run`](crate::AlertDispatcher::run).
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<AlertJob>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Self {
                sender: Some(sender),
            },
            receiver,
        )
    }

    /// A queue with no dispatcher behind it. Jobs are logged and dropped.
    pub fn disabled() -> Self {
        Self { sender: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }

    /// Hand a job to the dispatcher.
    ///
    /// Returns `true` if the job was queued. A disabled queue or a stopped
    /// dispatcher drops the job with a log line; the caller is never failed.
    pub fn enqueue(&self, job: AlertJob) -> bool {
        let Some(sender) = &self.sender else {
            tracing::warn!(
                reservoir_id = job.reservoir_id,
                reading_id = job.reading_id,
                level = job.level,
                "Alert raised but email delivery is not configured"
            );
            return false;
        };

        match sender.send(job) {
            Ok(()) => true,
            Err(mpsc::error::SendError(job)) => {
                tracing::error!(
                    reservoir_id = job.reservoir_id,
                    reading_id = job.reading_id,
                    "Alert dispatcher is not running, alert dropped"
                );
                false
            }
        }
    }
}
