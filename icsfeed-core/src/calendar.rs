//! Calendars read from a `VCALENDAR` block.

use serde::{Deserialize, Serialize};

use crate::event::Event;

/// A calendar and the events that were closed inside it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Calendar {
    /// Events in the order their `END:VEVENT` markers appeared.
    pub events: Vec<Event>,
    /// Original feed URL (`X-ORGINAL_URL`)
    pub link: Option<String>,
    /// Display name (`X-WR-CALNAME`)
    pub name: Option<String>,
    /// Producing application (`PRODID`)
    pub product_id: Option<String>,
}

/// Calendar properties we recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarField {
    Link,
    Name,
    ProductId,
}

impl CalendarField {
    /// Look up the field for an exact, case-sensitive property key.
    ///
    /// `X-ORGINAL_URL` is misspelled in the feeds we import and is matched as is.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "X-ORGINAL_URL" => Some(Self::Link),
            "X-WR-CALNAME" => Some(Self::Name),
            "PRODID" => Some(Self::ProductId),
            _ => None,
        }
    }
}

impl Calendar {
    /// Apply one `KEY:VALUE` property. Unknown keys are ignored.
    pub fn set_value(&mut self, key: &str, value: &str) {
        let Some(field) = CalendarField::from_key(key) else {
            return;
        };

        let value = Some(value.to_string());
        match field {
            CalendarField::Link => self.link = value,
            CalendarField::Name => self.name = value,
            CalendarField::ProductId => self.product_id = value,
        }
    }

    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Title shown for the calendar: its name, or the product id without one.
    pub fn title(&self) -> Option<&str> {
        non_empty(self.name.as_deref()).or_else(|| self.product_id.as_deref())
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_known_keys() {
        let mut cal = Calendar::default();
        cal.set_value("X-ORGINAL_URL", "https://example.com/feed.ics");
        cal.set_value("X-WR-CALNAME", "Community Events");
        cal.set_value("PRODID", "-//Example//Feed 1.0//EN");

        assert_eq!(cal.link.as_deref(), Some("https://example.com/feed.ics"));
        assert_eq!(cal.name.as_deref(), Some("Community Events"));
        assert_eq!(cal.product_id.as_deref(), Some("-//Example//Feed 1.0//EN"));
    }

    #[test]
    fn test_keys_are_exact() {
        let mut cal = Calendar::default();
        cal.set_value("X-ORIGINAL-URL", "https://example.com");
        cal.set_value("prodid", "lowercase");
        cal.set_value("VERSION", "2.0");

        assert_eq!(cal, Calendar::default());
    }

    #[test]
    fn test_last_write_wins() {
        let mut cal = Calendar::default();
        cal.set_value("X-WR-CALNAME", "First");
        cal.set_value("X-WR-CALNAME", "Second");
        assert_eq!(cal.name.as_deref(), Some("Second"));
    }

    #[test]
    fn test_title_falls_back_to_product_id() {
        let mut cal = Calendar::default();
        assert_eq!(cal.title(), None);

        cal.set_value("PRODID", "-//Example//EN");
        assert_eq!(cal.title(), Some("-//Example//EN"));

        cal.set_value("X-WR-CALNAME", "");
        assert_eq!(cal.title(), Some("-//Example//EN"));

        cal.set_value("X-WR-CALNAME", "Named");
        assert_eq!(cal.title(), Some("Named"));
    }
}
