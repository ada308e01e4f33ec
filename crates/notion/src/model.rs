//! The subset of Notion's page and property objects this client reads and
//! writes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Body of a `POST /databases/{id}/query` response.
#[derive(Clone, Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<Page>,

    #[serde(default)]
    pub has_more: bool,
}

/// A database row.
#[derive(Clone, Debug, Deserialize)]
pub struct Page {
    pub id: String,

    #[serde(default)]
    pub properties: HashMap<String, Property>,
}

impl Page {
    /// Plain text of a property, if the property exists and is non-empty.
    ///
    /// Title and rich text properties yield their first fragment, email and
    /// phone number properties yield their value.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        let text = match self.properties.get(name)? {
            Property::Title { title: fragments } | Property::RichText { rich_text: fragments } => {
                fragments.first().map(|fragment| fragment.plain_text.as_str())
            }
            Property::Email { email: value } | Property::PhoneNumber { phone_number: value } => {
                value.as_deref()
            }
            Property::Date { .. } | Property::Checkbox { .. } | Property::Unsupported => None,
        }?;
        let text = text.trim();
        (!text.is_empty()).then_some(text)
    }

    /// The value of a non-empty date property.
    #[must_use]
    pub fn date(&self, name: &str) -> Option<&DateValue> {
        match self.properties.get(name)? {
            Property::Date { date: Some(date) } => Some(date),
            _ => None,
        }
    }

    /// Value of a checkbox property.
    #[must_use]
    pub fn checkbox(&self, name: &str) -> Option<bool> {
        match self.properties.get(name)? {
            Property::Checkbox { checkbox } => Some(*checkbox),
            _ => None,
        }
    }
}

/// A property value as returned by the API. Types this client has no use
/// for deserialize to [`Property::Unsupported`].
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Property {
    Title {
        #[serde(default)]
        title: Vec<RichText>,
    },
    RichText {
        #[serde(default)]
        rich_text: Vec<RichText>,
    },
    Email {
        email: Option<String>,
    },
    PhoneNumber {
        phone_number: Option<String>,
    },
    Date {
        date: Option<DateValue>,
    },
    Checkbox {
        checkbox: bool,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RichText {
    pub plain_text: String,
}

/// A Notion date. When `time_zone` is set, `start` carries no UTC offset
/// and is a wall-clock time in that IANA zone.
#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
pub struct DateValue {
    pub start: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// A property value sent in a page update.
#[derive(Clone, Debug, Serialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PropertyValue {
    Date(DateValue),
    Checkbox(bool),
}

impl PropertyValue {
    #[inline]
    pub fn date(start: impl Into<String>) -> Self {
        Self::Date(DateValue { start: start.into(), time_zone: None })
    }

    #[inline]
    #[must_use]
    pub const fn checkbox(checked: bool) -> Self { Self::Checkbox(checked) }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn page() -> Page {
        serde_json::from_value(json!({
            "object": "page",
            "id": "5e1c1b4a-0000-4000-8000-000000000001",
            "properties": {
                "Candidate Name": {
                    "id": "title",
                    "type": "title",
                    "title": [{ "type": "text", "plain_text": "Asha Rao" }]
                },
                "Company Name": { "id": "a", "type": "rich_text", "rich_text": [] },
                "Email": { "id": "b", "type": "email", "email": "asha@example.com" },
                "Phone": { "id": "c", "type": "phone_number", "phone_number": null },
                "Interview Date": {
                    "id": "d",
                    "type": "date",
                    "date": { "start": "2024-01-10T09:30:00.000+05:30", "end": null }
                },
                "Reminder Sent At": { "id": "e", "type": "date", "date": null },
                "Call Date": {
                    "id": "h",
                    "type": "date",
                    "date": { "start": "2024-01-10T09:30:00.000", "time_zone": "America/New_York" }
                },
                "Reminder Sent": { "id": "f", "type": "checkbox", "checkbox": true },
                "Stage": { "id": "g", "type": "select", "select": { "name": "Final" } }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_text_properties() {
        let page = page();

        assert_eq!(page.text("Candidate Name"), Some("Asha Rao"));
        assert_eq!(page.text("Email"), Some("asha@example.com"));
        assert_eq!(page.text("Company Name"), None);
        assert_eq!(page.text("Phone"), None);
        assert_eq!(page.text("Stage"), None);
        assert_eq!(page.text("Missing"), None);
    }

    #[test]
    fn test_date_and_checkbox_properties() {
        let page = page();

        assert_eq!(
            page.date("Interview Date"),
            Some(&DateValue { start: "2024-01-10T09:30:00.000+05:30".to_string(), time_zone: None })
        );
        assert_eq!(
            page.date("Call Date").and_then(|date| date.time_zone.as_deref()),
            Some("America/New_York")
        );
        assert_eq!(page.date("Reminder Sent At"), None);
        assert_eq!(page.date("Candidate Name"), None);
        assert_eq!(page.checkbox("Reminder Sent"), Some(true));
        assert_eq!(page.checkbox("Interview Date"), None);
    }

    #[test]
    fn test_property_value_wire_format() {
        let properties = HashMap::from([
            ("Reminder Sent At".to_string(), PropertyValue::date("2024-01-10T09:00:00+05:30")),
        ]);
        assert_eq!(
            serde_json::to_value(&properties).unwrap(),
            json!({ "Reminder Sent At": { "date": { "start": "2024-01-10T09:00:00+05:30" } } })
        );

        assert_eq!(
            serde_json::to_value(PropertyValue::checkbox(true)).unwrap(),
            json!({ "checkbox": true })
        );
    }
}
