use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Opaque identifier the record source uses to address a record.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    #[inline]
    pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self { Self::new(id) }
}

/// One interview entry as read from the record source.
///
/// Every field the source may leave blank is optional here; whether the
/// record is usable is decided by the evaluator.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    pub id: RecordId,
    pub name: Option<String>,
    /// Email address or phone number.
    pub contact: Option<String>,
    pub company: Option<String>,
    pub scheduled_time: Option<DateTime<FixedOffset>>,
    pub already_notified: bool,
}

/// A record with every required field present, ready to be reminded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Interview {
    pub id: RecordId,
    pub name: String,
    pub contact: String,
    pub company: Option<String>,
    pub scheduled_time: DateTime<FixedOffset>,
}

/// How the "already notified" state is stored in the record source.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NotifiedMarker {
    /// A date property holding the time the reminder went out. The record
    /// counts as notified when the property holds a readable date.
    Timestamp { property: String },

    /// A checkbox property, ticked once the reminder went out.
    Checkbox { property: String },
}

impl NotifiedMarker {
    #[must_use]
    pub fn property(&self) -> &str {
        match self {
            Self::Timestamp { property } | Self::Checkbox { property } => property,
        }
    }
}

impl Default for NotifiedMarker {
    fn default() -> Self { Self::Timestamp { property: "Reminder Sent At".to_string() } }
}

/// Names of the record source properties holding each field.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldMapping {
    #[serde(default = "FieldMapping::default_name")]
    pub name: String,

    #[serde(default = "FieldMapping::default_contact")]
    pub contact: String,

    #[serde(default = "FieldMapping::default_company")]
    pub company: String,

    #[serde(default = "FieldMapping::default_scheduled_time")]
    pub scheduled_time: String,

    #[serde(default)]
    pub notified: NotifiedMarker,
}

impl FieldMapping {
    #[inline]
    #[must_use]
    pub fn default_name() -> String { "Candidate Name".to_string() }

    #[inline]
    #[must_use]
    pub fn default_contact() -> String { "Email".to_string() }

    #[inline]
    #[must_use]
    pub fn default_company() -> String { "Company Name".to_string() }

    #[inline]
    #[must_use]
    pub fn default_scheduled_time() -> String { "Interview Date".to_string() }

    /// Rejects mappings with blank property names, which would silently
    /// turn every record incomplete.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPropertyName`] naming the first blank field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("name", self.name.as_str()),
            ("contact", self.contact.as_str()),
            ("company", self.company.as_str()),
            ("scheduled_time", self.scheduled_time.as_str()),
            ("notified", self.notified.property()),
        ];

        match fields.into_iter().find(|(_, property)| property.trim().is_empty()) {
            Some((field, _)) => Err(Error::EmptyPropertyName { field }),
            None => Ok(()),
        }
    }
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            contact: Self::default_contact(),
            company: Self::default_company(),
            scheduled_time: Self::default_scheduled_time(),
            notified: NotifiedMarker::default(),
        }
    }
}
