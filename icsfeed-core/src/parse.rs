//! Block state machine over the lines of a feed.
//!
//! Only `VCALENDAR` and `VEVENT` blocks are tracked. Properties are routed to
//! the innermost open block; blocks still open at the end of input are dropped.

use crate::calendar::Calendar;
use crate::config::FeedOptions;
use crate::event::Event;
use crate::line::{Line, Marker};
use crate::location::LocationParser;

/// Where the parser is in the block structure, together with the blocks
/// being filled in.
#[derive(Debug, Default)]
enum ParseState {
    #[default]
    Outside,
    InCalendar(Calendar),
    InEvent { calendar: Calendar, event: Event },
}

/// Incremental feed parser. Feed it lines, then call [`FeedParser::finish`].
pub struct FeedParser<'a> {
    options: &'a FeedOptions,
    locations: &'a dyn LocationParser,
    state: ParseState,
    calendars: Vec<Calendar>,
}

impl<'a> FeedParser<'a> {
    pub fn new(options: &'a FeedOptions, locations: &'a dyn LocationParser) -> Self {
        Self {
            options,
            locations,
            state: ParseState::Outside,
            calendars: Vec::new(),
        }
    }

    pub fn feed_line(&mut self, line: &str) {
        let state = std::mem::take(&mut self.state);

        self.state = match (state, Line::classify(line)) {
            (ParseState::Outside, Line::Marker(Marker::BeginCalendar)) => {
                ParseState::InCalendar(Calendar::default())
            }
            (ParseState::InCalendar(calendar), Line::Marker(Marker::EndCalendar)) => {
                self.calendars.push(calendar);
                ParseState::Outside
            }
            (ParseState::InCalendar(calendar), Line::Marker(Marker::BeginEvent)) => {
                ParseState::InEvent {
                    calendar,
                    event: Event::default(),
                }
            }
            (ParseState::InEvent { mut calendar, event }, Line::Marker(Marker::EndEvent)) => {
                calendar.add_event(event);
                ParseState::InCalendar(calendar)
            }
            (ParseState::InCalendar(mut calendar), Line::Property { key, value }) => {
                calendar.set_value(key, value);
                ParseState::InCalendar(calendar)
            }
            (ParseState::InEvent { calendar, mut event }, Line::Property { key, value }) => {
                event.set_value(key, value, self.options, self.locations);
                ParseState::InEvent { calendar, event }
            }
            (state, Line::Marker(marker)) => {
                tracing::trace!(?marker, state = state.name(), "ignoring unexpected marker");
                state
            }
            (state @ ParseState::Outside, Line::Property { .. }) => state,
        };
    }

    /// Finish parsing and return the completed calendars in feed order.
    pub fn finish(self) -> Vec<Calendar> {
        match &self.state {
            ParseState::Outside => {}
            ParseState::InCalendar(_) => {
                tracing::debug!("feed ended inside VCALENDAR, dropping calendar");
            }
            ParseState::InEvent { .. } => {
                tracing::debug!("feed ended inside VEVENT, dropping event and calendar");
            }
        }
        self.calendars
    }
}

impl ParseState {
    fn name(&self) -> &'static str {
        match self {
            ParseState::Outside => "outside",
            ParseState::InCalendar(_) => "calendar",
            ParseState::InEvent { .. } => "event",
        }
    }
}

/// Parse all calendars from a sequence of feed lines.
pub fn parse_calendars<I, L>(
    lines: I,
    options: &FeedOptions,
    locations: &dyn LocationParser,
) -> Vec<Calendar>
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    let mut parser = FeedParser::new(options, locations);
    for line in lines {
        parser.feed_line(line.as_ref());
    }
    parser.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::FreeTextLocationParser;

    fn parse(ics: &str) -> Vec<Calendar> {
        parse_calendars(ics.lines(), &FeedOptions::default(), &FreeTextLocationParser)
    }

    fn titles(calendar: &Calendar) -> Vec<&str> {
        calendar
            .events
            .iter()
            .map(|e| e.title.as_deref().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_parse_calendar_with_events_in_order() {
        let ics = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:-//Example//Feed//EN
X-WR-CALNAME:Community
X-ORGINAL_URL:https://example.com/community.ics
BEGIN:VEVENT
UID:1
SUMMARY:First
DTSTART:20240301T180000
END:VEVENT
BEGIN:VEVENT
UID:2
SUMMARY:Second
END:VEVENT
BEGIN:VEVENT
UID:3
SUMMARY:Third
END:VEVENT
END:VCALENDAR"#;

        let calendars = parse(ics);
        assert_eq!(calendars.len(), 1);

        let calendar = &calendars[0];
        assert_eq!(calendar.product_id.as_deref(), Some("-//Example//Feed//EN"));
        assert_eq!(calendar.name.as_deref(), Some("Community"));
        assert_eq!(calendar.link.as_deref(), Some("https://example.com/community.ics"));
        assert_eq!(titles(calendar), vec!["First", "Second", "Third"]);
        assert!(calendar.events[0].start_date.is_some());
    }

    #[test]
    fn test_event_properties_do_not_leak_into_calendar() {
        let ics = r#"BEGIN:VCALENDAR
BEGIN:VEVENT
PRODID:inside-event
SUMMARY:Event
END:VEVENT
SUMMARY:calendar-level
END:VCALENDAR"#;

        let calendars = parse(ics);
        assert_eq!(calendars[0].product_id, None);
        assert_eq!(titles(&calendars[0]), vec!["Event"]);
    }

    #[test]
    fn test_no_calendar_block() {
        let ics = "BEGIN:VEVENT\nSUMMARY:Orphan\nEND:VEVENT\nPRODID:nothing";
        assert!(parse(ics).is_empty());
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_two_calendars() {
        let ics = r#"BEGIN:VCALENDAR
PRODID:first
BEGIN:VEVENT
SUMMARY:A
END:VEVENT
END:VCALENDAR
BEGIN:VCALENDAR
PRODID:second
BEGIN:VEVENT
SUMMARY:B
END:VEVENT
BEGIN:VEVENT
SUMMARY:C
END:VEVENT
END:VCALENDAR"#;

        let calendars = parse(ics);
        assert_eq!(calendars.len(), 2);
        assert_eq!(calendars[0].product_id.as_deref(), Some("first"));
        assert_eq!(titles(&calendars[1]), vec!["B", "C"]);
    }

    #[test]
    fn test_unclosed_event_is_dropped() {
        let ics = r#"BEGIN:VCALENDAR
BEGIN:VEVENT
SUMMARY:Complete
END:VEVENT
BEGIN:VEVENT
SUMMARY:Incomplete"#;

        // The calendar itself is never closed either.
        assert!(parse(ics).is_empty());

        let ics = r#"BEGIN:VCALENDAR
BEGIN:VEVENT
SUMMARY:Complete
END:VEVENT
BEGIN:VEVENT
SUMMARY:Incomplete
END:VCALENDAR"#;

        // END:VCALENDAR while an event is open is ignored, so the calendar
        // stays open until the input ends.
        assert!(parse(ics).is_empty());
    }

    #[test]
    fn test_unexpected_markers_are_ignored() {
        let ics = r#"END:VEVENT
END:VCALENDAR
BEGIN:VCALENDAR
END:VEVENT
BEGIN:VCALENDAR
PRODID:kept
BEGIN:VEVENT
BEGIN:VEVENT
SUMMARY:Only
BEGIN:VCALENDAR
END:VEVENT
END:VCALENDAR"#;

        let calendars = parse(ics);
        assert_eq!(calendars.len(), 1);
        assert_eq!(calendars[0].product_id.as_deref(), Some("kept"));
        assert_eq!(titles(&calendars[0]), vec!["Only"]);
    }

    #[test]
    fn test_crlf_lines() {
        let ics = "BEGIN:VCALENDAR\r\nPRODID:crlf\r\nBEGIN:VEVENT\r\nURL:http://example.com/a:b\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n";
        let lines: Vec<&str> = ics.split('\n').collect();

        let calendars = parse_calendars(lines, &FeedOptions::default(), &FreeTextLocationParser);
        assert_eq!(calendars[0].product_id.as_deref(), Some("crlf"));
        assert_eq!(
            calendars[0].events[0].link.as_deref(),
            Some("http://example.com/a:b")
        );
    }

    #[test]
    fn test_unknown_property_inside_event() {
        let ics = r#"BEGIN:VCALENDAR
BEGIN:VEVENT
X-CUSTOM:foo
END:VEVENT
END:VCALENDAR"#;

        let calendars = parse(ics);
        assert_eq!(calendars[0].events, vec![Event::default()]);
    }

    #[test]
    fn test_parsed_calendars_survive_json() {
        let ics = r#"BEGIN:VCALENDAR
PRODID:-//Example//Feed//EN
X-WR-CALNAME:Community
BEGIN:VEVENT
UID:1
SUMMARY:Repair Cafe
DTSTART:20240301T180000
DTEND:20240301T200000
LOCATION:Stadtbibliothek, Hauptstraße 1, 76133 Karlsruhe
END:VEVENT
END:VCALENDAR"#;

        let calendars = parse(ics);
        let json = serde_json::to_value(&calendars).expect("Should serialize");

        assert_eq!(json[0]["name"], "Community");
        assert_eq!(json[0]["events"][0]["title"], "Repair Cafe");
        assert_eq!(json[0]["events"][0]["location"]["zip"], "76133");
        assert!(json[0]["events"][0]["location"].get("country").is_none());
        assert!(json[0]["events"][0]["created_date"].is_null());

        let restored: Vec<Calendar> = serde_json::from_value(json).expect("Should deserialize");
        assert_eq!(restored, calendars);
    }
}
