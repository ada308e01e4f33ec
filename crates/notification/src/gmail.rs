//! Gmail API client for sending reminder emails via domain-wide delegation.

use std::sync::Arc;

use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use google_cloud_token::{TokenSource, TokenSourceProvider};
use lettre::{
    message::{header::ContentType, Mailbox},
    Message,
};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use crate::{error, Error, Notification, NotificationClient};

/// Gmail API scopes required for sending emails.
const SCOPES: [&str; 1] = ["https://www.googleapis.com/auth/gmail.send"];

const SEND_ENDPOINT: &str = "https://gmail.googleapis.com/gmail/v1/users/me/messages/send";

/// Configuration for the Gmail client.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    /// Google Workspace user to impersonate for domain-wide delegation.
    /// This will also be used as the sender address.
    pub impersonate_user: String,
}

/// Gmail API client for sending emails.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    token_source: Arc<dyn TokenSource>,
    from_address: String,
}

impl Client {
    /// Creates a new Gmail client with domain-wide delegation.
    ///
    /// Credentials are discovered the usual Google way, normally through
    /// `GOOGLE_APPLICATION_CREDENTIALS` pointing at a service account key.
    ///
    /// # Errors
    ///
    /// Returns an error if the token source provider cannot be created.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use notification::gmail::{Client, Config};
    ///
    /// # async fn example() -> Result<(), notification::Error> {
    /// let config = Config { impersonate_user: "recruiting@example.com".to_string() };
    ///
    /// let client = Client::new(config).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new(config: Config) -> Result<Self, Error> {
        tracing::info!(impersonate_user = %config.impersonate_user, "Using domain-wide delegation for Gmail API");

        let auth_config = google_cloud_auth::project::Config::default()
            .with_scopes(&SCOPES)
            .with_sub(&config.impersonate_user);

        let token_source_provider =
            google_cloud_auth::token::DefaultTokenSourceProvider::new(auth_config).await.map_err(
                |e| {
                    tracing::error!(error = ?e, "Failed to create token source provider");
                    Error::CreateMailer
                },
            )?;

        Ok(Self {
            http: reqwest::Client::new(),
            token_source: token_source_provider.token_source(),
            from_address: config.impersonate_user,
        })
    }
}

#[async_trait]
impl NotificationClient for Client {
    async fn send_notification(&self, notification: &Notification) -> Result<(), Error> {
        let Notification::Email { to, subject, body } = notification;

        let email = build_email(&self.from_address, to, subject, body)?;
        let encoded_email = URL_SAFE.encode(email.formatted());

        let token = self.token_source.token().await.map_err(|e| {
            tracing::error!(error = ?e, "Failed to get access token");
            Error::AccessToken
        })?;

        let auth_header =
            if token.starts_with("Bearer ") { token.clone() } else { format!("Bearer {token}") };

        let response = self
            .http
            .post(SEND_ENDPOINT)
            .header("Authorization", auth_header)
            .json(&serde_json::json!({ "raw": encoded_email }))
            .send()
            .await
            .context(error::HttpRequestSnafu)?;

        let status = response.status();
        if !status.is_success() {
            if let Ok(response_text) = response.text().await {
                tracing::error!(to = %to, "Failed to send email: {response_text}");
            }
            return Err(Error::SendEmail { status: status.as_u16() });
        }

        tracing::info!(to = %to, "Successfully sent reminder email");
        Ok(())
    }
}

/// Builds a plain text email message.
///
/// # Errors
///
/// Returns an error if the email addresses are invalid or the message cannot be
/// built.
fn build_email(from: &str, to: &str, subject: &str, body: &str) -> Result<Message, Error> {
    let from: Mailbox =
        from.parse().map_err(|_| Error::InvalidAddress { address: from.to_string() })?;
    let to: Mailbox = to.parse().map_err(|_| Error::InvalidAddress { address: to.to_string() })?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(body.to_string())
        .map_err(|_| Error::BuildEmail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_email() {
        let message = build_email(
            "recruiting@example.com",
            "candidate@example.com",
            "Interview Reminder | Acme",
            "Hi Asha,\n\nThis is a gentle reminder.",
        )
        .unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();

        assert!(formatted.contains("recruiting@example.com"));
        assert!(formatted.contains("candidate@example.com"));
        assert!(formatted.contains("Interview Reminder | Acme"));
        assert!(formatted.contains("text/plain"));
        assert!(formatted.contains("gentle reminder"));
    }

    #[test]
    fn test_build_email_invalid_from() {
        let result = build_email("invalid-email", "candidate@example.com", "s", "b");

        assert!(
            matches!(result, Err(Error::InvalidAddress { address }) if address == "invalid-email")
        );
    }

    #[test]
    fn test_build_email_rejects_phone_number() {
        let result = build_email("recruiting@example.com", "+91 98765 43210", "s", "b");

        assert!(matches!(result, Err(Error::InvalidAddress { .. })));
    }
}
