//! Line-based iCalendar feed import.
//!
//! This crate turns the lines of an ICS feed into calendars and events:
//! - `line` classifies lines into block markers and `KEY:VALUE` properties
//! - `datetime` decodes ICS date-time values
//! - `calendar` and `event` map properties onto typed fields
//! - `parse` drives the block state machine
//! - `feed` exposes a cached accessor over a `FeedSource`

pub mod calendar;
pub mod config;
pub mod datetime;
pub mod error;
pub mod event;
pub mod feed;
pub mod line;
pub mod location;
pub mod parse;
pub mod source;

pub use calendar::Calendar;
pub use config::FeedOptions;
pub use datetime::{TimeReference, decode_ics_datetime};
pub use error::{FeedError, FeedResult};
pub use event::Event;
pub use feed::{FeedSource, IcsFeed};
pub use location::{FreeTextLocationParser, Location, LocationParser};
pub use parse::{FeedParser, parse_calendars};
pub use source::TextSource;
