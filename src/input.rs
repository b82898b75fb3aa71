//! Loading feed files for the commands.

use std::path::Path;

use anyhow::{Context, Result};
use icsfeed_core::{FeedOptions, IcsFeed, TextSource};
use owo_colors::OwoColorize;

/// Read `file` (or stdin for "-") into a feed using `options`.
pub fn open_feed(file: &str, options: FeedOptions) -> Result<IcsFeed<TextSource>> {
    let source = if file == "-" {
        TextSource::from_reader(std::io::stdin().lock()).context("Failed to read feed from stdin")?
    } else {
        TextSource::from_path(Path::new(file))
            .with_context(|| format!("Failed to read feed file '{}'", file))?
    };

    tracing::debug!(file, "loaded feed source");
    Ok(IcsFeed::new(source).with_options(options))
}

/// Print errors the feed reported while being read.
pub fn print_feed_errors(feed: &IcsFeed<TextSource>) {
    for error in feed.source().errors() {
        eprintln!("{} {}", "warning:".yellow(), error);
    }
}
