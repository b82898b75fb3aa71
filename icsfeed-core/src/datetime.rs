//! Decoding of ICS date-time values.
//!
//! Accepts `YYYYMMDD[T]HHMMSS[Z]` and `YYYYMMDDHHMMSS`, with the time part
//! optional or partial. Values in or before 1970 are rejected.

use std::sync::OnceLock;

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Years up to and including this one cannot be represented.
const EPOCH_YEAR: i32 = 1970;

/// How a decoded wall-clock time is turned into an instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeReference {
    /// Always interpret the components in the system time zone, even when
    /// the value carried a `Z` suffix.
    #[default]
    Local,
    /// Interpret values with a `Z` suffix as UTC; others stay local.
    Utc,
}

/// Decode an ICS date-time in local time.
///
/// Returns `None` when no date can be found or the year is 1970 or earlier.
pub fn decode_ics_datetime(value: &str) -> Option<DateTime<Local>> {
    decode_with_reference(value, TimeReference::Local)
}

/// Decode an ICS date-time using the given time reference.
pub fn decode_with_reference(value: &str, reference: TimeReference) -> Option<DateTime<Local>> {
    let utc_marked = value.contains('Z');
    let naive = decode_naive(value)?;

    match reference {
        TimeReference::Utc if utc_marked => Some(Utc.from_utc_datetime(&naive).with_timezone(&Local)),
        _ => resolve_local(&naive),
    }
}

/// Extract the date components and build a wall-clock time.
///
/// Out-of-range components roll over into the next larger unit.
fn decode_naive(value: &str) -> Option<NaiveDateTime> {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    const RE: &str = r"([0-9]{4})([0-9]{2})([0-9]{2})([0-9]{0,2})([0-9]{0,2})([0-9]{0,2})";

    let stripped = value.replace(['T', 'Z'], "");
    let re = REGEX.get_or_init(|| Regex::new(RE).expect("static date-time pattern is valid"));
    let caps = re.captures(&stripped)?;

    let group = |i: usize| -> i64 {
        caps.get(i)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse().ok())
            .unwrap_or(0)
    };

    let year = group(1);
    if year <= i64::from(EPOCH_YEAR) {
        tracing::trace!(value, "date before the epoch boundary");
        return None;
    }

    let months = year * 12 + group(2) - 1;
    let first_of_month = NaiveDate::from_ymd_opt(
        i32::try_from(months.div_euclid(12)).ok()?,
        u32::try_from(months.rem_euclid(12) + 1).ok()?,
        1,
    )?;

    first_of_month
        .and_hms_opt(0, 0, 0)?
        .checked_add_signed(Duration::days(group(3) - 1))?
        .checked_add_signed(Duration::hours(group(4)))?
        .checked_add_signed(Duration::minutes(group(5)))?
        .checked_add_signed(Duration::seconds(group(6)))
}

fn resolve_local(naive: &NaiveDateTime) -> Option<DateTime<Local>> {
    resolve_in(&Local, naive)
}

/// Map a wall-clock time onto `tz`.
///
/// Ambiguous times take the earlier instant; times inside a DST gap are moved
/// forward by one hour.
fn resolve_in<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(naive).earliest().or_else(|| {
        let shifted = naive.checked_add_signed(Duration::hours(1))?;
        tz.from_local_datetime(&shifted).earliest()
    })
}
