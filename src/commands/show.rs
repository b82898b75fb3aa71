use anyhow::Result;
use icsfeed_core::FeedOptions;
use owo_colors::OwoColorize;

use crate::input::{open_feed, print_feed_errors};
use crate::render::Render;

pub fn run(file: &str, options: FeedOptions) -> Result<()> {
    let feed = open_feed(file, options)?;

    if !feed.is_feed_valid() {
        println!("{}", "No VCALENDAR block found".red());
        return Ok(());
    }

    let calendars = feed.calendars();
    if let Some(primary) = calendars.first() {
        println!("{}", primary.render());
    }

    println!("   {:<10} {}", "Title:".dimmed(), feed.read_feed_title().unwrap_or("-"));
    println!("   {:<10} {}", "UUID:".dimmed(), feed.read_feed_uuid().unwrap_or("-"));
    if let Some(link) = calendars.first().and_then(|c| c.link.as_deref()) {
        println!("   {:<10} {}", "Link:".dimmed(), link);
    }
    println!("   {:<10} {}", "Events:".dimmed(), feed.read_events_from_feed().len());

    if calendars.len() > 1 {
        println!();
        println!(
            "{}",
            format!("{} more calendars in feed (ignored):", calendars.len() - 1).dimmed()
        );
        for calendar in &calendars[1..] {
            println!("   {}", calendar.render());
        }
    }

    print_feed_errors(&feed);
    Ok(())
}
