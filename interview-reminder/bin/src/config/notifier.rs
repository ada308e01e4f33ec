use serde::{Deserialize, Serialize};

use super::Error;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NotifierConfig {
    /// Send through the Gmail API as `impersonate_user`.
    Gmail {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        impersonate_user: Option<String>,
    },

    /// Only write reminders to the log.
    Log,
}

impl Default for NotifierConfig {
    fn default() -> Self { Self::Gmail { impersonate_user: None } }
}

impl NotifierConfig {
    /// A dry run never delivers, so it does not need a sender.
    pub fn into_core(
        self,
        dry_run: bool,
    ) -> Result<interview_reminder_core::config::NotifierConfig, Error> {
        use interview_reminder_core::config::NotifierConfig as Core;

        match self {
            Self::Log => Ok(Core::Log),
            Self::Gmail { impersonate_user: Some(impersonate_user) } => {
                Ok(Core::Gmail { impersonate_user })
            }
            Self::Gmail { impersonate_user: None } if dry_run => Ok(Core::Log),
            Self::Gmail { impersonate_user: None } => Err(Error::MissingImpersonateUser),
        }
    }
}
