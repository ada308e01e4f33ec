use snafu::Snafu;

use crate::config;

/// Result type alias for the CLI.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type for the CLI.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{source}"))]
    Application { source: interview_reminder_dispatcher::Error },

    #[snafu(display("Could not initialize tokio runtime, error: {source}"))]
    InitializeTokioRuntime { source: tokio::io::Error },

    #[snafu(display("{source}"))]
    Config { source: config::Error },
}

impl From<config::Error> for Error {
    fn from(source: config::Error) -> Self { Self::Config { source } }
}

impl From<interview_reminder_dispatcher::Error> for Error {
    fn from(source: interview_reminder_dispatcher::Error) -> Self { Self::Application { source } }
}

pub trait CommandError {
    fn exit_code(&self) -> exitcode::ExitCode;
}

impl CommandError for Error {
    fn exit_code(&self) -> exitcode::ExitCode {
        use interview_reminder_dispatcher::Error as Dispatch;

        match self {
            Self::Application { source: Dispatch::FetchRecords { .. } } => exitcode::UNAVAILABLE,
            Self::Application { source: Dispatch::InvalidFieldMapping { .. } }
            | Self::Config { .. } => exitcode::CONFIG,
            Self::Application { .. } => exitcode::SOFTWARE,
            Self::InitializeTokioRuntime { .. } => exitcode::IOERR,
        }
    }
}
