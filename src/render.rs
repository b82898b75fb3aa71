//! Terminal rendering for feed types.
//!
//! Extension traits that add colored output to icsfeed-core types using
//! owo_colors.

use chrono::{DateTime, Local};
use icsfeed_core::location::Location;
use icsfeed_core::{Calendar, Event};
use owo_colors::OwoColorize;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Calendar {
    fn render(&self) -> String {
        let title = self.title().unwrap_or("(untitled calendar)");
        format!("📅 {} {}", title.bold(), pluralize_events(self.events.len()).dimmed())
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let mut lines = vec![format!("{} {}", format_time_span(self), self.to_string().bold())];

        if let Some(location) = &self.location {
            lines.push(format!("      {}", format_location(location).dimmed()));
        }
        if let Some(link) = &self.link {
            lines.push(format!("      {}", link.cyan()));
        }

        lines.join("\n")
    }
}

/// Format start/end as "Sat Mar 2 18:00 - 20:00", or a placeholder without a start
fn format_time_span(event: &Event) -> String {
    let Some(start) = event.start_date else {
        return format!("{:<22}", "(no date)").dimmed().to_string();
    };

    let end = event.end_date.map(|end| {
        if end.date_naive() == start.date_naive() {
            end.format("%H:%M").to_string()
        } else {
            format_datetime(&end)
        }
    });

    match end {
        Some(end) => format!("{} - {}", format_datetime(&start), end),
        None => format_datetime(&start),
    }
}

fn format_datetime(dt: &DateTime<Local>) -> String {
    dt.format("%a %b %-d %H:%M").to_string()
}

fn format_location(location: &Location) -> String {
    let city = match (&location.zip, &location.city) {
        (Some(zip), Some(city)) => Some(format!("{} {}", zip, city)),
        (Some(zip), None) => Some(zip.clone()),
        (None, Some(city)) => Some(city.clone()),
        (None, None) => None,
    };

    [
        location.name.clone(),
        location.street.clone(),
        city,
        location.country.clone(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ")
}

fn pluralize_events(count: usize) -> String {
    if count == 1 {
        "(1 event)".to_string()
    } else {
        format!("({} events)", count)
    }
}
