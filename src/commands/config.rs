use std::path::Path;

use anyhow::Result;
use icsfeed_core::FeedOptions;
use owo_colors::OwoColorize;

pub fn run(path: Option<&Path>, init: bool) -> Result<()> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => FeedOptions::config_path()?,
    };

    if init {
        if path.exists() {
            println!("{} {}", "Config already exists:".dimmed(), path.display());
        } else {
            FeedOptions::create_default_config(&path)?;
            println!("{} {}", "Created config:".green(), path.display());
        }
        return Ok(());
    }

    let status = if path.exists() { "" } else { " (not created yet)" };
    println!("{}{}", path.display(), status.dimmed());

    let options = FeedOptions::load(Some(&path))?;
    println!("   legacy_last_modified = {}", options.legacy_last_modified);
    println!("   time_reference = {:?}", options.time_reference);
    Ok(())
}
