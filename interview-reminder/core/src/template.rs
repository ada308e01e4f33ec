use chrono_tz::Tz;

use crate::{model::Interview, DEFAULT_SIGNATURE, DEFAULT_TIMEZONE};

const TIME_FORMAT: &str = "%I:%M %p on %d %b, %Y";

/// A rendered reminder, independent of the channel delivering it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReminderMessage {
    pub subject: String,
    pub body: String,
}

/// Renders reminders with the interview time shown in `timezone`.
#[derive(Clone, Debug)]
pub struct ReminderTemplate {
    timezone: Tz,
    signature: String,
}

impl Default for ReminderTemplate {
    fn default() -> Self { Self::new(DEFAULT_TIMEZONE, DEFAULT_SIGNATURE) }
}

impl ReminderTemplate {
    #[inline]
    pub fn new(timezone: Tz, signature: impl Into<String>) -> Self {
        Self { timezone, signature: signature.into() }
    }

    #[must_use]
    pub fn render(&self, interview: &Interview) -> ReminderMessage {
        let Interview { name, company, scheduled_time, .. } = interview;
        let time = scheduled_time.with_timezone(&self.timezone).format(TIME_FORMAT);

        let (subject, with_company) = match company {
            Some(company) => {
                (format!("Interview Reminder | {company} | {time}"), format!(" with {company}"))
            }
            None => (format!("Interview Reminder | {time}"), String::new()),
        };

        let body = format!(
            "Hi {name},\n\nThis is a gentle reminder for your interview{with_company} scheduled \
             at {time}.\n\nLet me know if you face any issues in connecting.\n\nAll the \
             best!\n\nRegards,\n{signature}",
            signature = self.signature
        );

        ReminderMessage { subject, body }
    }
}
