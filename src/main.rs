mod commands;
mod input;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use icsfeed_core::FeedOptions;

#[derive(Parser)]
#[command(name = "icsfeed")]
#[command(about = "Inspect the calendars and events of an iCalendar feed")]
struct Cli {
    /// Use this config file instead of ~/.config/icsfeed/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show feed metadata: validity, title, uuid and counts
    Show {
        /// Path to an .ics file, or "-" for stdin
        file: String,
    },
    /// List the events of the feed's primary calendar
    Events {
        /// Path to an .ics file, or "-" for stdin
        file: String,

        /// Print events as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the config file location
    Config {
        /// Write a commented default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { file } => {
            let options = load_options(cli.config.as_deref())?;
            commands::show::run(&file, options)
        }
        Commands::Events { file, json } => {
            let options = load_options(cli.config.as_deref())?;
            commands::events::run(&file, options, json)
        }
        Commands::Config { init } => commands::config::run(cli.config.as_deref(), init),
    }
}

fn load_options(path: Option<&std::path::Path>) -> Result<FeedOptions> {
    FeedOptions::load(path).context("Failed to load icsfeed config")
}
