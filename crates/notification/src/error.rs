use snafu::Snafu;

/// Errors that can occur in the notification crate.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Failed to create mailer client.
    #[snafu(display("Failed to create mailer client"))]
    CreateMailer,

    /// Failed to obtain an access token for the Gmail API.
    #[snafu(display("Failed to obtain Gmail access token"))]
    AccessToken,

    /// An address could not be parsed as a mailbox.
    #[snafu(display("Invalid email address: {address}"))]
    InvalidAddress {
        /// The rejected address.
        address: String,
    },

    /// Failed to build email.
    #[snafu(display("Failed to build email message"))]
    BuildEmail,

    /// The Gmail API rejected the message.
    #[snafu(display("Gmail API rejected the message with status {status}"))]
    SendEmail {
        /// HTTP status returned by the API.
        status: u16,
    },

    /// HTTP request failed.
    #[snafu(display("HTTP request failed: {source}"))]
    HttpRequest {
        /// The underlying reqwest error.
        source: reqwest::Error,
    },
}
