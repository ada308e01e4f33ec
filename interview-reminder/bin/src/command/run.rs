use std::process;

use interview_reminder_core::PROGRAM_NAME;
use snafu::ResultExt;
use tokio::runtime::Runtime;

use crate::{
    config::Config,
    error,
    error::{Error, Result},
    shadow::{PKG_VERSION, SHORT_COMMIT},
};

/// Run one reminder pass
#[allow(clippy::result_large_err)]
pub fn run_reminders(config: Config, dry_run: bool) -> Result<()> {
    config.log.registry();

    tracing::info!(
        "{PROGRAM_NAME} {PKG_VERSION} ({SHORT_COMMIT}) is starting, pid: {}",
        process::id()
    );
    if dry_run {
        tracing::info!("Dry run, no reminder will be delivered or marked");
    }

    let exit_status = config.into_runtime(dry_run).map_err(Error::from).and_then(|config| {
        let runtime = Runtime::new().context(error::InitializeTokioRuntimeSnafu)?;
        runtime.block_on(interview_reminder_dispatcher::run_once(config)).map_err(Error::from)
    });

    match exit_status {
        Ok(summary) => {
            tracing::info!(
                sent = summary.sent,
                delivery_failures = summary.delivery_failures,
                mark_failures = summary.mark_failures,
                "{PROGRAM_NAME} finished"
            );
            Ok(())
        }
        Err(error) => {
            tracing::error!(%error);
            Err(error)
        }
    }
}
