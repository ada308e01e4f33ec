use chrono_tz::Tz;
use interview_reminder_core::{
    DEFAULT_REMINDER_WINDOW_MINUTES, DEFAULT_SIGNATURE, DEFAULT_TIMEZONE,
};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use snafu::ResultExt;

use super::{error, Error};

#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ReminderConfig {
    /// Reminders go out at most this many minutes before the interview.
    #[serde(default = "ReminderConfig::default_window_minutes")]
    pub window_minutes: i64,

    /// IANA name of the timezone interview times are shown in, and naive
    /// dates are read in.
    #[serde(default = "ReminderConfig::default_timezone")]
    #[serde_as(as = "DisplayFromStr")]
    pub timezone: Tz,

    #[serde(default = "ReminderConfig::default_signature")]
    pub signature: String,
}

impl ReminderConfig {
    #[inline]
    pub const fn default_window_minutes() -> i64 { DEFAULT_REMINDER_WINDOW_MINUTES }

    #[inline]
    pub const fn default_timezone() -> Tz { DEFAULT_TIMEZONE }

    #[inline]
    pub fn default_signature() -> String { DEFAULT_SIGNATURE.to_string() }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            window_minutes: Self::default_window_minutes(),
            timezone: Self::default_timezone(),
            signature: Self::default_signature(),
        }
    }
}

impl TryFrom<ReminderConfig> for interview_reminder_core::config::ReminderConfig {
    type Error = Error;

    fn try_from(
        ReminderConfig { window_minutes, timezone, signature }: ReminderConfig,
    ) -> Result<Self, Self::Error> {
        Self::new(window_minutes, timezone, signature).context(error::InvalidReminderSnafu)
    }
}
