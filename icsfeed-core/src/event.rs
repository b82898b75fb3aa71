//! Events read from a `VEVENT` block.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::config::FeedOptions;
use crate::datetime::decode_with_reference;
use crate::location::{Location, LocationParser};

/// An imported event. Every field is optional because feeds routinely omit
/// properties or carry values we cannot decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Feed-supplied identifier (UID)
    pub uid: Option<String>,
    /// SUMMARY
    pub title: Option<String>,
    pub description: Option<String>,
    /// URL
    pub link: Option<String>,
    /// DTSTART
    pub start_date: Option<DateTime<Local>>,
    /// DTEND
    pub end_date: Option<DateTime<Local>>,
    /// CREATED
    pub created_date: Option<DateTime<Local>>,
    /// LAST-MODIFIED
    pub updated_date: Option<DateTime<Local>>,
    pub location: Option<Location>,
}

/// Event properties we recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventField {
    Start,
    End,
    Updated,
    Created,
    Uid,
    Title,
    Description,
    Link,
    Location,
}

impl EventField {
    /// Look up the field for an exact, case-sensitive property key.
    pub fn from_key(key: &str, options: &FeedOptions) -> Option<Self> {
        let field = match key {
            "DTSTART" => Self::Start,
            "DTEND" => Self::End,
            "CREATED" => Self::Created,
            "UID" => Self::Uid,
            "SUMMARY" => Self::Title,
            "DESCRIPTION" => Self::Description,
            "URL" => Self::Link,
            "LOCATION" => Self::Location,
            k if k == options.last_modified_key() => Self::Updated,
            _ => return None,
        };
        Some(field)
    }
}

impl Event {
    /// Apply one `KEY:VALUE` property. Unknown keys are ignored.
    ///
    /// Date fields that fail to decode end up unset. Locations are only kept
    /// when `locations` considers the parsed result valid.
    pub fn set_value(
        &mut self,
        key: &str,
        value: &str,
        options: &FeedOptions,
        locations: &dyn LocationParser,
    ) {
        let Some(field) = EventField::from_key(key, options) else {
            return;
        };

        let decode = || decode_with_reference(value, options.time_reference);

        match field {
            EventField::Start => self.start_date = decode(),
            EventField::End => self.end_date = decode(),
            EventField::Updated => self.updated_date = decode(),
            EventField::Created => self.created_date = decode(),
            EventField::Uid => self.uid = Some(value.to_string()),
            EventField::Title => self.title = Some(value.to_string()),
            EventField::Description => self.description = Some(value.to_string()),
            EventField::Link => self.link = Some(value.to_string()),
            EventField::Location => {
                let location = locations.parse_free_text(value);
                if locations.is_valid(&location) {
                    self.location = Some(location);
                } else {
                    tracing::debug!(value, "discarding unrecognised location");
                }
            }
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title.as_deref().unwrap_or("(No title)"))
    }
}
