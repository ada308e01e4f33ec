use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Invalid field mapping, error: {source}"))]
    InvalidFieldMapping { source: interview_reminder_core::Error },

    #[snafu(display("Could not create Notion client, error: {source}"))]
    CreateRecordSource { source: notion::Error },

    #[snafu(display("Could not create notifier, error: {source}"))]
    CreateNotifier { source: notification::Error },

    #[snafu(display("Could not fetch interview records, error: {source}"))]
    FetchRecords { source: Box<dyn std::error::Error + Send + Sync> },
}
