//! # Notification Crate
//!
//! Delivery channels for interview reminders. A reminder is a plain text
//! message with a recipient, a subject and a body; how it reaches the
//! recipient depends on the client:
//!
//! - [`gmail::Client`] sends it as an email through the Gmail API using
//!   domain-wide delegation
//! - [`log::Client`] only writes it to the log, for dry setups and for
//!   contacts that are not email addresses

mod error;
pub mod gmail;
pub mod log;

use async_trait::async_trait;
pub use error::Error;

/// Represents different types of notifications that can be sent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Notification {
    /// A plain text email.
    Email {
        /// The recipient's address.
        to: String,
        /// Subject line.
        subject: String,
        /// Plain text body.
        body: String,
    },
}

impl Notification {
    /// The address this notification is delivered to.
    #[must_use]
    pub fn recipient(&self) -> &str {
        match self {
            Self::Email { to, .. } => to,
        }
    }
}

/// Trait for notification clients that can send notifications.
#[async_trait]
pub trait NotificationClient: Send + Sync {
    /// Sends a notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification fails to send.
    async fn send_notification(&self, notification: &Notification) -> Result<(), Error>;
}

#[async_trait]
impl<T> NotificationClient for std::sync::Arc<T>
where
    T: NotificationClient + ?Sized,
{
    async fn send_notification(&self, notification: &Notification) -> Result<(), Error> {
        (**self).send_notification(notification).await
    }
}
