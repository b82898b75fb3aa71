use anyhow::Result;
use icsfeed_core::FeedOptions;
use owo_colors::OwoColorize;

use crate::input::{open_feed, print_feed_errors};
use crate::render::Render;

pub fn run(file: &str, options: FeedOptions, json: bool) -> Result<()> {
    let feed = open_feed(file, options)?;
    let events = feed.read_events_from_feed();

    if json {
        println!("{}", serde_json::to_string_pretty(events)?);
    } else if events.is_empty() {
        println!("{}", "No events found".dimmed());
    } else {
        for event in events {
            println!("  {}", event.render());
        }
    }

    print_feed_errors(&feed);
    Ok(())
}
