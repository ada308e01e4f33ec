mod run;

pub use self::run::run_reminders;
