use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use interview_reminder_core::{
    evaluate, Decision, Interview, RecordSource, ReminderMessage, ReminderTemplate,
};
use notification::{Notification, NotificationClient};

use crate::error::{Error, Result};

/// Counters for one pass over the record source.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DispatchSummary {
    pub fetched: usize,
    pub sent: usize,
    pub would_send: usize,
    pub skipped_incomplete: usize,
    pub skipped_already_sent: usize,
    pub skipped_out_of_window: usize,
    pub delivery_failures: usize,
    pub mark_failures: usize,
}

impl fmt::Display for DispatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fetched: {}, sent: {}, would send: {}, incomplete: {}, already sent: {}, out of \
             window: {}, delivery failures: {}, mark failures: {}",
            self.fetched,
            self.sent,
            self.would_send,
            self.skipped_incomplete,
            self.skipped_already_sent,
            self.skipped_out_of_window,
            self.delivery_failures,
            self.mark_failures
        )
    }
}

enum Outcome {
    Sent,
    WouldSend,
    DeliveryFailed,
    /// Delivered, but the record is still unmarked.
    MarkFailed,
}

pub struct Dispatcher<S, N> {
    source: S,
    notifier: N,
    window: TimeDelta,
    template: ReminderTemplate,
    dry_run: bool,
}

impl<S, N> Dispatcher<S, N>
where
    S: RecordSource,
    N: NotificationClient,
{
    #[inline]
    pub fn new(source: S, notifier: N, window: TimeDelta, template: ReminderTemplate) -> Self {
        Self { source, notifier, window, template, dry_run: false }
    }

    /// Evaluate and log only; nothing is delivered or marked.
    #[inline]
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Runs one pass: fetch every record, evaluate against `now`, remind
    /// the due ones and mark them.
    ///
    /// Per-record failures are logged and counted in the summary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FetchRecords`] if the records cannot be retrieved.
    pub async fn run(&self, now: DateTime<Utc>) -> Result<DispatchSummary> {
        tracing::info!("Querying interview records");
        let records = self
            .source
            .fetch_records()
            .await
            .map_err(|source| Error::FetchRecords { source: Box::new(source) })?;
        tracing::info!("Found {} interviews to process", records.len());

        let mut summary = DispatchSummary { fetched: records.len(), ..DispatchSummary::default() };

        for decision in evaluate(&records, now, self.window) {
            match decision {
                Decision::SkipIncomplete { id, missing } => {
                    tracing::warn!(record_id = %id, ?missing, "Skipping record with missing data");
                    summary.skipped_incomplete += 1;
                }
                Decision::SkipAlreadySent { id } => {
                    tracing::info!(record_id = %id, "Reminder already sent");
                    summary.skipped_already_sent += 1;
                }
                Decision::SkipOutOfWindow { id, delta } => {
                    tracing::debug!(
                        record_id = %id,
                        delta_secs = delta.num_seconds(),
                        "Interview not within the reminder window"
                    );
                    summary.skipped_out_of_window += 1;
                }
                Decision::Send { interview } => match self.remind(&interview, now).await {
                    Outcome::Sent => summary.sent += 1,
                    Outcome::WouldSend => summary.would_send += 1,
                    Outcome::DeliveryFailed => summary.delivery_failures += 1,
                    Outcome::MarkFailed => {
                        summary.sent += 1;
                        summary.mark_failures += 1;
                    }
                },
            }
        }

        tracing::info!("Reminder check completed, {summary}");
        Ok(summary)
    }

    async fn remind(&self, interview: &Interview, now: DateTime<Utc>) -> Outcome {
        let ReminderMessage { subject, body } = self.template.render(interview);

        if self.dry_run {
            tracing::info!(
                record_id = %interview.id,
                recipient = %interview.contact,
                %subject,
                "Dry run, reminder not sent"
            );
            return Outcome::WouldSend;
        }

        tracing::info!(
            record_id = %interview.id,
            recipient = %interview.contact,
            "Sending reminder for {}",
            interview.name
        );
        let notification = Notification::Email { to: interview.contact.clone(), subject, body };
        if let Err(error) = self.notifier.send_notification(&notification).await {
            tracing::error!(
                record_id = %interview.id,
                recipient = %interview.contact,
                %error,
                "Failed to deliver reminder, the record stays pending"
            );
            return Outcome::DeliveryFailed;
        }

        if let Err(error) = self.source.mark_notified(&interview.id, now).await {
            tracing::warn!(
                record_id = %interview.id,
                %error,
                "Reminder delivered but the record could not be marked, the next run may send it \
                 again"
            );
            return Outcome::MarkFailed;
        }

        Outcome::Sent
    }
}
