//! Classification of single ICS lines.

/// A `BEGIN:`/`END:` block marker for the two block kinds we understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    BeginCalendar,
    EndCalendar,
    BeginEvent,
    EndEvent,
}

impl Marker {
    /// Marker tokens in the order they are tested against a line.
    const TOKENS: [(&'static str, Marker); 4] = [
        ("BEGIN:VCALENDAR", Marker::BeginCalendar),
        ("END:VCALENDAR", Marker::EndCalendar),
        ("BEGIN:VEVENT", Marker::BeginEvent),
        ("END:VEVENT", Marker::EndEvent),
    ];

    /// Find the first marker token contained in `line`, ignoring case.
    fn find(line: &str) -> Option<Marker> {
        let upper = line.to_ascii_uppercase();
        Self::TOKENS
            .iter()
            .find(|(token, _)| upper.contains(token))
            .map(|(_, marker)| *marker)
    }
}

/// A classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Marker(Marker),
    /// `KEY:VALUE`, split on the first colon. Lines without a colon come
    /// through with an empty key and value, which no mapper recognises.
    Property { key: &'a str, value: &'a str },
}

impl<'a> Line<'a> {
    /// Classify one line of a feed.
    ///
    /// Marker detection is a substring test, so a marker token anywhere in the
    /// line wins over the property interpretation.
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);

        if let Some(marker) = Marker::find(line) {
            return Line::Marker(marker);
        }

        match line.split_once(':') {
            Some((key, value)) => Line::Property { key, value },
            None => Line::Property { key: "", value: "" },
        }
    }
}
