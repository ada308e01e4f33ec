//! Notion database as the interview record source.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use chrono_tz::Tz;
use interview_reminder_core::{
    timestamp, FieldMapping, NotifiedMarker, Record, RecordId, RecordSource,
};
use notion::{Page, PropertyValue};

pub struct NotionSource {
    client: notion::Client,
    fields: FieldMapping,
    timezone: Tz,
}

impl NotionSource {
    #[inline]
    #[must_use]
    pub const fn new(client: notion::Client, fields: FieldMapping, timezone: Tz) -> Self {
        Self { client, fields, timezone }
    }
}

#[async_trait]
impl RecordSource for NotionSource {
    type Error = notion::Error;

    async fn fetch_records(&self) -> Result<Vec<Record>, Self::Error> {
        let pages = self.client.query_database().await?;
        Ok(pages.iter().map(|page| record_from_page(page, &self.fields, self.timezone)).collect())
    }

    async fn mark_notified(&self, id: &RecordId, at: DateTime<Utc>) -> Result<(), Self::Error> {
        let properties = mark_properties(&self.fields.notified, at, self.timezone);
        self.client.update_page(id.as_str(), &properties).await?;
        tracing::debug!(record_id = %id, "Marked record as notified");
        Ok(())
    }
}

/// Reads a page through `fields`. Unreadable dates count as absent.
///
/// Dates without an offset are read in the zone Notion attached to them,
/// or in `timezone` when there is none.
pub fn record_from_page(page: &Page, fields: &FieldMapping, timezone: Tz) -> Record {
    let date = |property: &str| -> Option<DateTime<FixedOffset>> {
        let value = page.date(property)?;
        let zone = match value.time_zone.as_deref().map(str::parse::<Tz>) {
            Some(Ok(zone)) => zone,
            Some(Err(_)) => {
                tracing::warn!(
                    record_id = %page.id,
                    property,
                    time_zone = value.time_zone.as_deref(),
                    "Unknown time zone on date, using {timezone}"
                );
                timezone
            }
            None => timezone,
        };
        let parsed = timestamp::parse(&value.start, zone);
        if parsed.is_none() {
            tracing::warn!(
                record_id = %page.id,
                property,
                raw = value.start.as_str(),
                "Could not parse date"
            );
        }
        parsed
    };
    let text = |property: &str| page.text(property).map(ToString::to_string);

    let already_notified = match &fields.notified {
        NotifiedMarker::Timestamp { property } => date(property).is_some(),
        NotifiedMarker::Checkbox { property } => page.checkbox(property).unwrap_or(false),
    };

    Record {
        id: RecordId::new(page.id.as_str()),
        name: text(&fields.name),
        contact: text(&fields.contact),
        company: text(&fields.company),
        scheduled_time: date(&fields.scheduled_time),
        already_notified,
    }
}

fn mark_properties(
    marker: &NotifiedMarker,
    at: DateTime<Utc>,
    timezone: Tz,
) -> HashMap<String, PropertyValue> {
    let value = match marker {
        NotifiedMarker::Timestamp { .. } => {
            PropertyValue::date(
                at.with_timezone(&timezone).to_rfc3339_opts(SecondsFormat::Millis, false),
            )
        }
        NotifiedMarker::Checkbox { .. } => PropertyValue::checkbox(true),
    };
    HashMap::from([(marker.property().to_string(), value)])
}
