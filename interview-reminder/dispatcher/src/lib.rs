mod dispatch;
mod error;
mod source;

use std::sync::Arc;

use chrono::Utc;
use interview_reminder_core::config::{Config, NotifierConfig, NotionConfig};
use notification::NotificationClient;
use snafu::ResultExt;

pub use self::{
    dispatch::{DispatchSummary, Dispatcher},
    error::{Error, Result},
    source::{record_from_page, NotionSource},
};

/// Builds the Notion record source and the configured notifier, then runs
/// a single pass at the current time.
///
/// # Errors
///
/// Returns an error if a collaborator cannot be constructed or the
/// records cannot be fetched. Failures of individual records are only
/// reflected in the returned summary.
pub async fn run_once(config: Config) -> Result<DispatchSummary> {
    let Config { notion, fields, reminder, notifier, dry_run } = config;

    fields.validate().context(error::InvalidFieldMappingSnafu)?;

    let NotionConfig { api_token, database_id, api_base_url, notion_version, timeout } = notion;
    tracing::info!(%database_id, "Connecting to Notion database");
    let client = notion::Client::new(notion::Config {
        api_token,
        database_id,
        api_base_url,
        notion_version,
        timeout,
    })
    .context(error::CreateRecordSourceSnafu)?;
    let source = NotionSource::new(client, fields, reminder.timezone);

    let notifier: Arc<dyn NotificationClient> = match notifier {
        // Nothing is delivered in a dry run, so mail credentials are not needed.
        _ if dry_run => Arc::new(notification::log::Client),
        NotifierConfig::Log => Arc::new(notification::log::Client),
        NotifierConfig::Gmail { impersonate_user } => Arc::new(
            notification::gmail::Client::new(notification::gmail::Config { impersonate_user })
                .await
                .context(error::CreateNotifierSnafu)?,
        ),
    };

    Dispatcher::new(source, notifier, reminder.window, reminder.template())
        .with_dry_run(dry_run)
        .run(Utc::now())
        .await
}
