pub mod config;
pub mod error;
pub mod evaluator;
pub mod model;
pub mod source;
pub mod template;
pub mod timestamp;

use std::{path::PathBuf, sync::LazyLock};

use directories::ProjectDirs;

pub use self::{
    error::{Error, Result},
    evaluator::{evaluate, Decision},
    model::{FieldMapping, Interview, NotifiedMarker, Record, RecordId},
    source::RecordSource,
    template::{ReminderMessage, ReminderTemplate},
};

pub const PROJECT_NAME: &str = "interview-reminder";

pub const PROGRAM_NAME: &str = "interview-reminder";
pub const CONFIG_NAME: &str = "interview-reminder.yaml";

/// How far ahead of an interview a reminder may go out.
pub const DEFAULT_REMINDER_WINDOW_MINUTES: i64 = 60;

pub const DEFAULT_TIMEZONE: chrono_tz::Tz = chrono_tz::Asia::Kolkata;

pub const DEFAULT_SIGNATURE: &str = "Team TalentNiti";

pub static PROJECT_CONFIG_DIR: LazyLock<PathBuf> = LazyLock::new(|| {
    ProjectDirs::from("", PROJECT_NAME, PROJECT_NAME)
        .map_or_else(|| PathBuf::from("."), |dirs| dirs.config_dir().to_path_buf())
});
