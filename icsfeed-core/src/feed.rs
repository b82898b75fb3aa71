//! Cached accessor over a feed source.

use std::sync::OnceLock;

use crate::calendar::{Calendar, non_empty};
use crate::config::FeedOptions;
use crate::event::Event;
use crate::location::{FreeTextLocationParser, LocationParser};
use crate::parse::parse_calendars;

/// Message reported when the primary calendar carries no `PRODID`.
pub const MISSING_PRODID: &str = "No PRODID found for ical feed";

/// Supplies feed lines and receives non-fatal diagnostics.
pub trait FeedSource {
    /// The fetched feed content, one ICS line per element.
    fn lines_data(&self) -> Vec<String>;

    /// Report a problem with the feed without aborting the import.
    fn set_error(&self, message: &str);
}

impl<S: FeedSource + ?Sized> FeedSource for &S {
    fn lines_data(&self) -> Vec<String> {
        (**self).lines_data()
    }

    fn set_error(&self, message: &str) {
        (**self).set_error(message)
    }
}

/// An ICS feed whose calendars are parsed on first access and then cached.
///
/// The first calendar in the feed is the primary one: title, uuid and events
/// are all read from it.
pub struct IcsFeed<S, P = FreeTextLocationParser> {
    source: S,
    options: FeedOptions,
    locations: P,
    calendars: OnceLock<Vec<Calendar>>,
}

impl<S: FeedSource> IcsFeed<S> {
    pub fn new(source: S) -> Self {
        Self::with_location_parser(source, FreeTextLocationParser)
    }
}

impl<S: FeedSource, P: LocationParser> IcsFeed<S, P> {
    pub fn with_location_parser(source: S, locations: P) -> Self {
        Self {
            source,
            options: FeedOptions::default(),
            locations,
            calendars: OnceLock::new(),
        }
    }

    /// Replace the parsing options. Has no effect once the feed was parsed.
    pub fn with_options(mut self, options: FeedOptions) -> Self {
        self.options = options;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// All calendars in the feed, in order.
    pub fn calendars(&self) -> &[Calendar] {
        self.calendars.get_or_init(|| {
            let lines = self.source.lines_data();
            let calendars = parse_calendars(&lines, &self.options, &self.locations);
            tracing::debug!(
                lines = lines.len(),
                calendars = calendars.len(),
                "parsed ical feed"
            );
            calendars
        })
    }

    fn primary(&self) -> Option<&Calendar> {
        self.calendars().first()
    }

    /// Whether the feed contains at least one calendar.
    pub fn is_feed_valid(&self) -> bool {
        self.primary().is_some()
    }

    /// The primary calendar's `PRODID`.
    ///
    /// Reports [`MISSING_PRODID`] to the source when there is none.
    pub fn read_feed_uuid(&self) -> Option<&str> {
        let product_id = non_empty(self.primary().and_then(|c| c.product_id.as_deref()));
        if product_id.is_none() {
            self.source.set_error(MISSING_PRODID);
        }
        product_id
    }

    /// The primary calendar's name, falling back to its `PRODID`.
    pub fn read_feed_title(&self) -> Option<&str> {
        self.primary().and_then(Calendar::title)
    }

    /// Events of the primary calendar in feed order.
    pub fn read_events_from_feed(&self) -> &[Event] {
        self.primary().map(|c| c.events.as_slice()).unwrap_or_default()
    }
}
