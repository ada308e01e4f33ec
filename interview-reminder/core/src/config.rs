use std::{fmt::Debug, time::Duration};

use chrono::TimeDelta;
use chrono_tz::Tz;

use crate::{
    error::{Error, Result},
    model::FieldMapping,
    template::ReminderTemplate,
};

#[derive(Clone, Debug)]
pub struct Config {
    pub notion: NotionConfig,

    pub fields: FieldMapping,

    pub reminder: ReminderConfig,

    pub notifier: NotifierConfig,

    pub dry_run: bool,
}

#[derive(Clone)]
pub struct NotionConfig {
    pub api_token: String,

    pub database_id: String,

    pub api_base_url: String,

    pub notion_version: String,

    pub timeout: Duration,
}

impl Debug for NotionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionConfig")
            .field("api_token", &"<redacted>")
            .field("database_id", &self.database_id)
            .field("api_base_url", &self.api_base_url)
            .field("notion_version", &self.notion_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct ReminderConfig {
    pub window: TimeDelta,

    pub timezone: Tz,

    pub signature: String,
}

impl ReminderConfig {
    /// # Errors
    ///
    /// Returns an error if `window_minutes` is negative or too large to be
    /// represented.
    pub fn new(window_minutes: i64, timezone: Tz, signature: String) -> Result<Self> {
        if window_minutes < 0 {
            return Err(Error::NegativeWindow { minutes: window_minutes });
        }
        let window = TimeDelta::try_minutes(window_minutes)
            .ok_or(Error::WindowOutOfRange { minutes: window_minutes })?;

        Ok(Self { window, timezone, signature })
    }

    #[must_use]
    pub fn template(&self) -> ReminderTemplate {
        ReminderTemplate::new(self.timezone, self.signature.clone())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NotifierConfig {
    Gmail { impersonate_user: String },

    /// Only log reminders.
    Log,
}
