use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Error;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NotionConfig {
    /// Usually left out of the file and taken from `NOTION_TOKEN`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,

    #[serde(default = "NotionConfig::default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "NotionConfig::default_notion_version")]
    pub notion_version: String,

    #[serde(default = "NotionConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl NotionConfig {
    #[inline]
    pub fn default_api_base_url() -> String { ::notion::DEFAULT_API_BASE_URL.to_string() }

    #[inline]
    pub fn default_notion_version() -> String { ::notion::DEFAULT_NOTION_VERSION.to_string() }

    #[inline]
    pub const fn default_timeout_secs() -> u64 { 30 }
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            database_id: None,
            api_base_url: Self::default_api_base_url(),
            notion_version: Self::default_notion_version(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

impl TryFrom<NotionConfig> for interview_reminder_core::config::NotionConfig {
    type Error = Error;

    fn try_from(
        NotionConfig {
            api_token,
            database_id,
            api_base_url,
            notion_version,
            timeout_secs,
        }: NotionConfig,
    ) -> Result<Self, Self::Error> {
        let api_token = api_token.filter(|token| !token.trim().is_empty());
        let database_id = database_id.filter(|id| !id.trim().is_empty());

        Ok(Self {
            api_token: api_token.ok_or(Error::MissingNotionToken)?,
            database_id: database_id.ok_or(Error::MissingDatabaseId)?,
            api_base_url,
            notion_version,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
