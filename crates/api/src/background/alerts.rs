//! Wiring of the alert dispatcher.
//!
//! With SMTP configured, a dispatcher task is spawned and its queue handed
//! back for [`AppState`](crate::state::AppState). Without it, alerts are
//! still evaluated but the queue drops them with a warning.

use std::sync::Arc;

use aquawatch_db::DbPool;
use aquawatch_events::{
    AlertDispatcher, AlertQueue, EmailConfig, EmailDelivery, EmailError, PgRecipientDirectory,
};
use tokio::task::JoinHandle;

/// Start the alert dispatcher if email delivery is configured.
///
/// Returns the queue for request handlers and, when running, the
/// dispatcher's task handle. The task ends once every queue clone is dropped.
pub fn start(
    pool: &DbPool,
    email: Option<EmailConfig>,
) -> Result<(AlertQueue, Option<JoinHandle<()>>), EmailError> {
    let Some(config) = email else {
        tracing::warn!("SMTP_HOST not set, threshold alerts will not be emailed");
        return Ok((AlertQueue::disabled(), None));
    };

    let mailer = EmailDelivery::new(&config)?;
    let dispatcher = AlertDispatcher::new(
        Arc::new(PgRecipientDirectory::new(pool.clone())),
        Arc::new(mailer),
        config.from_address.clone(),
    );

    let (queue, receiver) = AlertQueue::channel();
    let handle = tokio::spawn(dispatcher.run(receiver));
    tracing::info!(
        smtp_host = %config.smtp_host,
        smtp_port = config.smtp_port,
        from = %config.from_address,
        "Alert dispatcher started"
    );

    Ok((queue, Some(handle)))
}
