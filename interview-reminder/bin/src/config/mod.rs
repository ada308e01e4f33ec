mod error;
mod notifier;
mod notion;
mod reminder;

use std::path::{Path, PathBuf};

use interview_reminder_core::FieldMapping;
use reminder_cli_common::config::LogConfig;
use resolve_path::PathResolveExt;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

pub use self::{
    error::Error, notifier::NotifierConfig, notion::NotionConfig, reminder::ReminderConfig,
};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub notion: NotionConfig,

    #[serde(default)]
    pub fields: FieldMapping,

    #[serde(default)]
    pub reminder: ReminderConfig,

    #[serde(default)]
    pub notifier: NotifierConfig,
}

/// Values taken from the command line or the environment, which win over
/// the configuration file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub notion_token: Option<String>,
    pub database_id: Option<String>,
    pub gmail_impersonate_user: Option<String>,
}

impl Config {
    #[inline]
    pub fn default_path() -> PathBuf {
        [
            interview_reminder_core::PROJECT_CONFIG_DIR.to_path_buf(),
            PathBuf::from(interview_reminder_core::CONFIG_NAME),
        ]
        .into_iter()
        .collect()
    }

    #[inline]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut config: Self = {
            let data = std::fs::read_to_string(&path)
                .context(error::OpenConfigSnafu { filename: path.as_ref().to_path_buf() })?;

            serde_yaml::from_str(&data)
                .context(error::ParseConfigSnafu { filename: path.as_ref().to_path_buf() })?
        };

        config.log.file = match config.log.file.map(|path| {
            path.try_resolve()
                .map(|path| path.to_path_buf())
                .with_context(|_| error::ResolveFilePathSnafu { file_path: path.clone() })
        }) {
            Some(Ok(path)) => Some(path),
            Some(Err(err)) => return Err(err),
            None => None,
        };

        Ok(config)
    }

    /// Like [`Config::load`], but a file that does not exist yields the
    /// defaults. Credentials are then expected from the environment.
    #[inline]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn apply(
        &mut self,
        Overrides { notion_token, database_id, gmail_impersonate_user }: Overrides,
    ) {
        if notion_token.is_some() {
            self.notion.api_token = notion_token;
        }
        if database_id.is_some() {
            self.notion.database_id = database_id;
        }
        if let Some(user) = gmail_impersonate_user {
            if let NotifierConfig::Gmail { impersonate_user } = &mut self.notifier {
                *impersonate_user = Some(user);
            }
        }
    }

    /// Validates the file configuration and turns it into the runtime one.
    pub fn into_runtime(
        self,
        dry_run: bool,
    ) -> Result<interview_reminder_core::config::Config, Error> {
        let Self { notion, fields, reminder, notifier, .. } = self;

        Ok(interview_reminder_core::config::Config {
            notion: notion.try_into()?,
            fields,
            reminder: reminder.try_into()?,
            notifier: notifier.into_core(dry_run)?,
            dry_run,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use interview_reminder_core::{config::NotifierConfig as CoreNotifier, NotifiedMarker};

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_partial_file() {
        let file = write_config(
            r#"
notion:
  database_id: "0f3c"
fields:
  name: Name
  contact: Phone
  notified:
    type: checkbox
    property: Reminder Sent
reminder:
  window_minutes: 15
  timezone: Europe/Berlin
notifier:
  type: log
"#,
        );

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.notion.database_id.as_deref(), Some("0f3c"));
        assert_eq!(config.notion.api_token, None);
        assert_eq!(config.fields.name, "Name");
        assert_eq!(config.fields.company, "Company Name");
        assert_eq!(
            config.fields.notified,
            NotifiedMarker::Checkbox { property: "Reminder Sent".to_string() }
        );
        assert_eq!(config.reminder.window_minutes, 15);
        assert_eq!(config.reminder.timezone, chrono_tz::Europe::Berlin);
        assert_eq!(config.reminder.signature, "Team TalentNiti");
        assert_eq!(config.notifier, NotifierConfig::Log);
    }

    #[test]
    fn test_unknown_timezone_is_a_parse_error() {
        let file = write_config("reminder:\n  timezone: Mars/Olympus_Mons\n");

        assert!(matches!(Config::load(file.path()), Err(Error::ParseConfig { .. })));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");

        assert!(matches!(Config::load(&path), Err(Error::OpenConfig { .. })));
        assert_eq!(Config::load_or_default(&path).unwrap().reminder.window_minutes, 60);
    }

    #[test]
    fn test_overrides_and_runtime_config() {
        let mut config = Config::default();
        assert!(matches!(config.clone().into_runtime(false), Err(Error::MissingNotionToken)));

        config.apply(Overrides {
            notion_token: Some("secret_x".to_string()),
            database_id: Some("db".to_string()),
            gmail_impersonate_user: None,
        });
        assert!(matches!(config.clone().into_runtime(false), Err(Error::MissingImpersonateUser)));

        let dry = config.clone().into_runtime(true).unwrap();
        assert_eq!(dry.notifier, CoreNotifier::Log);
        assert!(dry.dry_run);

        config.apply(Overrides {
            gmail_impersonate_user: Some("recruiting@example.com".to_string()),
            ..Overrides::default()
        });
        let runtime = config.into_runtime(false).unwrap();
        assert_eq!(runtime.notion.api_token, "secret_x");
        assert_eq!(runtime.notion.database_id, "db");
        assert_eq!(
            runtime.notifier,
            CoreNotifier::Gmail { impersonate_user: "recruiting@example.com".to_string() }
        );
        assert_eq!(runtime.reminder.window.num_minutes(), 60);
    }

    #[test]
    fn test_negative_window_is_rejected() {
        let mut config = Config::default();
        config.notion.api_token = Some("secret_x".to_string());
        config.notion.database_id = Some("db".to_string());
        config.notifier = NotifierConfig::Log;
        config.reminder.window_minutes = -5;

        assert!(matches!(config.into_runtime(false), Err(Error::InvalidReminder { .. })));
    }

    #[test]
    fn test_default_config_is_loadable() {
        let text = serde_yaml::to_string(&Config::default()).unwrap();
        let file = write_config(&text);

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.fields, FieldMapping::default());
        assert_eq!(config.notifier, NotifierConfig::default());
    }
}
