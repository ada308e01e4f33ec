use std::{io, io::Write, path::PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::{
    command::run_reminders,
    config::{Config, Overrides},
    error, shadow,
};

#[derive(Debug, Parser)]
#[command(author,
    version,
    long_version = shadow::CLAP_LONG_VERSION,
    about,
    long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(
        long = "config",
        short = 'c',
        env = "INTERVIEW_REMINDER_CONFIG_FILE_PATH",
        help = "Specify a configuration file"
    )]
    config_file_path: Option<PathBuf>,

    #[clap(
        long = "notion-token",
        env = "NOTION_TOKEN",
        hide_env_values = true,
        help = "Notion integration token, overrides `notion.api_token`"
    )]
    notion_token: Option<String>,

    #[clap(
        long = "database-id",
        env = "DATABASE_ID",
        help = "Notion database holding the interviews, overrides `notion.database_id`"
    )]
    database_id: Option<String>,

    #[clap(
        long = "gmail-impersonate-user",
        env = "GMAIL_IMPERSONATE_USER",
        help = "Workspace user sending the reminders, overrides `notifier.impersonate_user`"
    )]
    gmail_impersonate_user: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[clap(about = "Print version information")]
    Version,

    #[clap(about = "Output shell completion code for the specified shell (bash, zsh, fish)")]
    Completion { shell: Shell },

    #[clap(about = "Output default configuration")]
    DefaultConfig,

    #[clap(
        visible_alias = "check",
        about = "Check the interview database once and send due reminders"
    )]
    Run {
        #[clap(long, help = "Only log the reminders that would be sent")]
        dry_run: bool,
    },
}

impl Cli {
    pub fn run(self) -> Result<(), Box<error::Error>> {
        match self.command {
            Command::Version => {
                io::stdout()
                    .write_all(Self::command().render_long_version().as_bytes())
                    .expect("failed to write to stdout");
            }
            Command::Completion { shell } => {
                let mut command = Self::command();
                let bin_name = command.get_name().to_string();
                clap_complete::generate(shell, &mut command, bin_name, &mut io::stdout());
            }
            Command::DefaultConfig => {
                let config_text =
                    serde_yaml::to_string(&Config::default()).expect("`Config` is serializable");
                io::stdout().write_all(config_text.as_bytes()).expect("failed to write to stdout");
            }
            Command::Run { dry_run } => {
                let config = self.load_config()?;
                run_reminders(config, dry_run)?;
            }
        }

        Ok(())
    }

    #[allow(clippy::result_large_err)]
    fn load_config(&self) -> Result<Config, error::Error> {
        let mut config = match &self.config_file_path {
            Some(path) => Config::load(path)?,
            None => Config::load_or_default(Config::default_path())?,
        };

        config.apply(Overrides {
            notion_token: self.notion_token.clone(),
            database_id: self.database_id.clone(),
            gmail_impersonate_user: self.gmail_impersonate_user.clone(),
        });

        Ok(config)
    }
}
