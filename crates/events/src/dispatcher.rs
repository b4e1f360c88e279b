//! Background fan-out of water-level alerts.
//!
//! [`AlertDispatcher`] consumes [`AlertJob`]s from the [`AlertQueue`]
//! receiver. For each job it looks up the reservoir's subscribers once and
//! sends one email per subscriber. Sends run concurrently and independently:
//! a failing or slow recipient never holds back the others. Nothing is
//! retried and no alert history is kept.
//!
//! [`AlertQueue`]: crate::AlertQueue

use std::sync::Arc;

use aquawatch_core::alert::AlertMessage;
use aquawatch_core::types::DbId;
use aquawatch_db::repositories::FavoriteRepo;
use aquawatch_db::DbPool;
use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::task::TaskTracker;

use crate::delivery::{Mailer, OutgoingMail};
use crate::queue::AlertJob;

// ---------------------------------------------------------------------------
// Recipient lookup
// ---------------------------------------------------------------------------

/// Resolves who should be told about a reservoir's alerts.
#[async_trait]
pub trait RecipientDirectory: Send + Sync {
    async fn subscriber_emails(&self, reservoir_id: DbId) -> Result<Vec<String>, sqlx::Error>;
}

/// Subscribers are the users who marked the reservoir as favorite.
pub struct PgRecipientDirectory {
    pool: DbPool,
}

impl PgRecipientDirectory {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipientDirectory for PgRecipientDirectory {
    async fn subscriber_emails(&self, reservoir_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        FavoriteRepo::subscriber_emails(&self.pool, reservoir_id).await
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Outcome of one fan-out, used for logging and tests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReport {
    /// Recipients returned by the lookup (0 if the lookup failed).
    pub recipients: usize,
    pub delivered: usize,
    pub failed: usize,
}

pub struct AlertDispatcher {
    directory: Arc<dyn RecipientDirectory>,
    mailer: Arc<dyn Mailer>,
    from_address: String,
}

impl AlertDispatcher {
    pub fn new(
        directory: Arc<dyn RecipientDirectory>,
        mailer: Arc<dyn Mailer>,
        from_address: impl Into<String>,
    ) -> Self {
        Self {
            directory,
            mailer,
            from_address: from_address.into(),
        }
    }

    /// Run the dispatch loop until every [`AlertQueue`](crate::AlertQueue)
    /// handle has been dropped.
    ///
    /// Each job is processed on its own task; on shutdown the loop waits for
    /// in-flight fan-outs before returning.
    pub async fn run(self, mut receiver: mpsc::UnboundedReceiver<AlertJob>) {
        let dispatcher = Arc::new(self);
        let tracker = TaskTracker::new();

        while let Some(job) = receiver.recv().await {
            let dispatcher = Arc::clone(&dispatcher);
            tracker.spawn(async move {
                dispatcher.process(&job).await;
            });
        }

        tracker.close();
        tracing::info!(
            in_flight = tracker.len(),
            "Alert queue closed, waiting for in-flight alerts"
        );
        tracker.wait().await;
        tracing::info!("Alert dispatcher stopped");
    }

    /// Fan a single alert out to every subscriber of its reservoir.
    pub async fn process(&self, job: &AlertJob) -> DispatchReport {
        let recipients = match self.directory.subscriber_emails(job.reservoir_id).await {
            Ok(recipients) => recipients,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    reservoir_id = job.reservoir_id,
                    reading_id = job.reading_id,
                    "Failed to look up alert recipients, alert skipped"
                );
                return DispatchReport::default();
            }
        };

        let mut report = DispatchReport {
            recipients: recipients.len(),
            ..DispatchReport::default()
        };
        if recipients.is_empty() {
            tracing::debug!(reservoir_id = job.reservoir_id, "No subscribers for alert");
            return report;
        }

        let message = AlertMessage::water_level_rise(job.reservoir_id, job.level);
        let mut sends = JoinSet::new();

        for to in recipients {
            let mailer = Arc::clone(&self.mailer);
            let mail = OutgoingMail {
                from: self.from_address.clone(),
                to,
                subject: message.subject.clone(),
                text_body: message.text_body.clone(),
                html_body: message.html_body.clone(),
            };
            sends.spawn(async move {
                let result = mailer.send(&mail).await;
                (mail.to, result)
            });
        }

        while let Some(joined) = sends.join_next().await {
            match joined {
                Ok((to, Ok(accepted))) => {
                    report.delivered += 1;
                    tracing::info!(to = %to, response = %accepted, "Alert email sent");
                }
                Ok((to, Err(e))) => {
                    report.failed += 1;
                    tracing::error!(error = %e, to = %to, "Failed to send alert email");
                }
                Err(e) => {
                    report.failed += 1;
                    tracing::error!(error = %e, "Alert email task aborted");
                }
            }
        }

        tracing::info!(
            reservoir_id = job.reservoir_id,
            reading_id = job.reading_id,
            recipients = report.recipients,
            delivered = report.delivered,
            failed = report.failed,
            "Alert fan-out finished"
        );
        report
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;
    use crate::delivery::email::EmailError;
    use crate::queue::AlertQueue;

    struct FakeDirectory {
        emails: Option<Vec<String>>,
        lookups: AtomicUsize,
    }

    impl FakeDirectory {
        fn with(emails: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                emails: Some(emails.iter().map(|e| e.to_string()).collect()),
                lookups: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                emails: None,
                lookups: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl RecipientDirectory for FakeDirectory {
        async fn subscriber_emails(&self, _: DbId) -> Result<Vec<String>, sqlx::Error> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.emails.clone().ok_or(sqlx::Error::PoolTimedOut)
        }
    }

    #[derive(Default)]
    struct FakeMailer {
        fail_for: HashSet<String>,
        hang_for: HashSet<String>,
        sent: Mutex<Vec<OutgoingMail>>,
    }

    impl FakeMailer {
        fn sent_to(&self) -> Vec<String> {
            let mut to: Vec<String> = self
                .sent
                .lock()
                .unwrap()
                .iter()
                .map(|m| m.to.clone())
                .collect();
            to.sort();
            to
        }
    }

    #[async_trait]
    impl Mailer for FakeMailer {
        async fn send(&self, mail: &OutgoingMail) -> Result<String, EmailError> {
            if self.hang_for.contains(&mail.to) {
                std::future::pending::<()>().await;
            }
            if self.fail_for.contains(&mail.to) {
                return Err(EmailError::Build("mailbox unavailable".to_string()));
            }
            self.sent.lock().unwrap().push(mail.clone());
            Ok("250 OK queued".to_string())
        }
    }

    fn job() -> AlertJob {
        AlertJob {
            reservoir_id: 4,
            reading_id: 17,
            level: 250.0,
        }
    }

    #[tokio::test]
    async fn one_lookup_and_one_mail_per_subscriber() {
        let directory = FakeDirectory::with(&["a@example.com", "b@example.com", "c@example.com"]);
        let mailer = Arc::new(FakeMailer::default());
        let dispatcher = AlertDispatcher::new(directory.clone(), mailer.clone(), "alerts@x.io");

        let report = dispatcher.process(&job()).await;

        assert_eq!(directory.lookups.load(Ordering::SeqCst), 1);
        assert_eq!(
            report,
            DispatchReport {
                recipients: 3,
                delivered: 3,
                failed: 0
            }
        );
        assert_eq!(
            mailer.sent_to(),
            vec!["a@example.com", "b@example.com", "c@example.com"]
        );

        let first = mailer.sent.lock().unwrap()[0].clone();
        assert_eq!(first.from, "alerts@x.io");
        assert!(first.text_body.contains("250"));
        assert!(!first.html_body.is_empty());
    }

    #[tokio::test]
    async fn failed_recipient_does_not_block_siblings() {
        let directory = FakeDirectory::with(&["a@example.com", "b@example.com"]);
        let mailer = Arc::new(FakeMailer {
            fail_for: HashSet::from(["a@example.com".to_string()]),
            ..FakeMailer::default()
        });
        let dispatcher = AlertDispatcher::new(directory, mailer.clone(), "alerts@x.io");

        let report = dispatcher.process(&job()).await;

        assert_eq!(report.delivered, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(mailer.sent_to(), vec!["b@example.com"]);
    }

    #[tokio::test]
    async fn hanging_recipient_does_not_delay_siblings() {
        let directory = FakeDirectory::with(&["slow@example.com", "b@example.com"]);
        let mailer = Arc::new(FakeMailer {
            hang_for: HashSet::from(["slow@example.com".to_string()]),
            ..FakeMailer::default()
        });
        let dispatcher = AlertDispatcher::new(directory, mailer.clone(), "alerts@x.io");

        let fan_out = tokio::spawn(async move { dispatcher.process(&job()).await });

        tokio::time::timeout(Duration::from_secs(5), async {
            while mailer.sent_to().is_empty() {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("sibling send should complete");

        assert_eq!(mailer.sent_to(), vec!["b@example.com"]);
        assert!(!fan_out.is_finished());
        fan_out.abort();
    }

    #[tokio::test]
    async fn lookup_failure_skips_fan_out() {
        let directory = FakeDirectory::failing();
        let mailer = Arc::new(FakeMailer::default());
        let dispatcher = AlertDispatcher::new(directory.clone(), mailer.clone(), "alerts@x.io");

        let report = dispatcher.process(&job()).await;

        assert_eq!(report, DispatchReport::default());
        assert_eq!(directory.lookups.load(Ordering::SeqCst), 1);
        assert!(mailer.sent_to().is_empty());
    }

    #[tokio::test]
    async fn no_subscribers_sends_nothing() {
        let mailer = Arc::new(FakeMailer::default());
        let dispatcher = AlertDispatcher::new(FakeDirectory::with(&[]), mailer.clone(), "a@x.io");

        let report = dispatcher.process(&job()).await;

        assert_eq!(report.recipients, 0);
        assert!(mailer.sent_to().is_empty());
    }

    #[tokio::test]
    async fn run_processes_queue_and_drains_on_close() {
        let directory = FakeDirectory::with(&["a@example.com"]);
        let mailer = Arc::new(FakeMailer::default());
        let dispatcher = AlertDispatcher::new(directory.clone(), mailer.clone(), "alerts@x.io");

        let (queue, receiver) = AlertQueue::channel();
        let handle = tokio::spawn(dispatcher.run(receiver));

        assert!(queue.enqueue(job()));
        assert!(queue.enqueue(AlertJob {
            reading_id: 18,
            ..job()
        }));
        drop(queue);

        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("dispatcher should stop once the queue is closed")
            .unwrap();

        assert_eq!(directory.lookups.load(Ordering::SeqCst), 2);
        assert_eq!(mailer.sent_to(), vec!["a@example.com", "a@example.com"]);
    }
}
