use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Could not open config from {}, error: {source}", filename.display()))]
    OpenConfig { filename: PathBuf, source: std::io::Error },

    #[snafu(display("Could not parse config from {}, error: {source}", filename.display()))]
    ParseConfig { filename: PathBuf, source: serde_yaml::Error },

    #[snafu(display("Could not resolve file path {}, error: {source}", file_path.display()))]
    ResolveFilePath { file_path: PathBuf, source: std::io::Error },

    #[snafu(display("Notion token is missing, set `notion.api_token` or `NOTION_TOKEN`"))]
    MissingNotionToken,

    #[snafu(display("Notion database id is missing, set `notion.database_id` or `DATABASE_ID`"))]
    MissingDatabaseId,

    #[snafu(display(
        "Gmail sender is missing, set `notifier.impersonate_user` or `GMAIL_IMPERSONATE_USER`"
    ))]
    MissingImpersonateUser,

    #[snafu(display("Invalid reminder settings, error: {source}"))]
    InvalidReminder { source: interview_reminder_core::Error },
}
