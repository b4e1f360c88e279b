//! Alert delivery infrastructure.
//!
//! - [`AlertQueue`]: non-blocking hand-off point used by the ingestion
//!   handler when a reading crosses the alert threshold.
//! - [`AlertDispatcher`]: background worker that resolves a reservoir's
//!   subscribers and emails each of them independently.
//! - [`delivery`]: the [`Mailer`] seam and its SMTP implementation.

pub mod delivery;
pub mod dispatcher;
pub mod queue;

pub use delivery::email::{EmailConfig, EmailDelivery, EmailError};
pub use delivery::{Mailer, OutgoingMail};
pub use dispatcher::{AlertDispatcher, DispatchReport, PgRecipientDirectory, RecipientDirectory};
pub use queue::{AlertJob, AlertQueue};
