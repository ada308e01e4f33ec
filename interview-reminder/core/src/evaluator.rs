//! Decides, for a snapshot of records and one evaluation time, which
//! records get a reminder.

use chrono::{DateTime, TimeDelta, Utc};

use crate::model::{Interview, Record, RecordId};

/// Outcome of evaluating one record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Decision {
    /// Remind now, then mark the record as notified.
    Send { interview: Interview },

    /// A required field is absent or unreadable.
    SkipIncomplete { id: RecordId, missing: Vec<&'static str> },

    SkipAlreadySent { id: RecordId },

    /// The interview already started, or is further away than the window.
    SkipOutOfWindow { id: RecordId, delta: TimeDelta },
}

impl Decision {
    #[must_use]
    pub const fn id(&self) -> &RecordId {
        match self {
            Self::Send { interview } => &interview.id,
            Self::SkipIncomplete { id, .. }
            | Self::SkipAlreadySent { id }
            | Self::SkipOutOfWindow { id, .. } => id,
        }
    }

    #[must_use]
    pub const fn is_send(&self) -> bool { matches!(self, Self::Send { .. }) }
}

/// Evaluates every record against `now`, preserving input order.
#[must_use]
pub fn evaluate(records: &[Record], now: DateTime<Utc>, window: TimeDelta) -> Vec<Decision> {
    records.iter().map(|record| record.decide(now, window)).collect()
}

impl Record {
    /// A record is due when all required fields are present, it was never
    /// notified, and `0 <= scheduled_time - now <= window`.
    #[must_use]
    pub fn decide(&self, now: DateTime<Utc>, window: TimeDelta) -> Decision {
        let (Some(name), Some(contact), Some(scheduled_time)) =
            (&self.name, &self.contact, self.scheduled_time)
        else {
            return Decision::SkipIncomplete { id: self.id.clone(), missing: self.missing_fields() };
        };

        if self.already_notified {
            return Decision::SkipAlreadySent { id: self.id.clone() };
        }

        let delta = scheduled_time.with_timezone(&Utc) - now;
        if delta < TimeDelta::zero() || delta > window {
            return Decision::SkipOutOfWindow { id: self.id.clone(), delta };
        }

        Decision::Send {
            interview: Interview {
                id: self.id.clone(),
                name: name.clone(),
                contact: contact.clone(),
                company: self.company.clone(),
                scheduled_time,
            },
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", self.name.is_none()),
            ("contact", self.contact.is_none()),
            ("scheduled_time", self.scheduled_time.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, missing)| missing.then_some(field))
        .collect()
    }
}
