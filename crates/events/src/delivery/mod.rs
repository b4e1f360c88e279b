//! Outbound mail transport.
//!
//! The dispatcher only depends on the [`Mailer`] trait; production wires in
//! [`email::EmailDelivery`].

use async_trait::async_trait;

pub mod email;

use email::EmailError;

/// One fully addressed message ready for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// A transport that accepts a single message.
///
/// On success returns the transport's acceptance text (the SMTP server
/// response for [`email::EmailDelivery`]).
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: &OutgoingMail) -> Result<String, EmailError>;
}
