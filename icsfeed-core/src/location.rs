//! Structured event locations and the free-text parser capability.

use serde::{Deserialize, Serialize};

/// A postal-style location extracted from an event's `LOCATION` text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Turns free-text location descriptions into structured locations.
///
/// Geocoding services plug in here; the event mapper only keeps locations
/// the parser reports as valid.
pub trait LocationParser {
    fn parse_free_text(&self, text: &str) -> Location;

    fn is_valid(&self, location: &Location) -> bool;
}

/// Comma-separated address heuristic.
///
/// Understands `name, street, 12345 City, country` and its shorter forms.
/// The part that starts with a postal code anchors the layout: the part
/// before it is the street, the one after it the country, anything earlier
/// the name. Without a postal code, a single part is a name and two or more
/// parts read as `name, street, city`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeTextLocationParser;

impl LocationParser for FreeTextLocationParser {
    fn parse_free_text(&self, text: &str) -> Location {
        let parts: Vec<&str> = text
            .split(',')
            .map(|p| p.trim().trim_end_matches('\\').trim())
            .filter(|p| !p.is_empty())
            .collect();

        let mut location = Location::default();

        match parts.iter().position(|p| split_postal_code(p).is_some()) {
            Some(idx) => {
                if let Some((zip, city)) = split_postal_code(parts[idx]) {
                    location.zip = Some(zip.to_string());
                    location.city = (!city.is_empty()).then(|| city.to_string());
                }
                if idx >= 1 {
                    location.street = Some(parts[idx - 1].to_string());
                }
                if idx >= 2 {
                    location.name = Some(parts[..idx - 1].join(", "));
                }
                if idx + 1 < parts.len() {
                    location.country = Some(parts[idx + 1..].join(", "));
                }
            }
            None => match parts.as_slice() {
                [] => {}
                [name] => location.name = Some(name.to_string()),
                [name, street] => {
                    location.name = Some(name.to_string());
                    location.street = Some(street.to_string());
                }
                [name, street, rest @ ..] => {
                    location.name = Some(name.to_string());
                    location.street = Some(street.to_string());
                    location.city = Some(rest.join(", "));
                }
            },
        }

        location
    }

    fn is_valid(&self, location: &Location) -> bool {
        location.street.is_some() || location.city.is_some()
    }
}

/// Split `"12345 City"` into the postal code and the remainder.
fn split_postal_code(part: &str) -> Option<(&str, &str)> {
    let digits = part.chars().take_while(char::is_ascii_digit).count();
    if !(4..=5).contains(&digits) {
        return None;
    }

    let (zip, rest) = part.split_at(digits);
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }

    Some((zip, rest.trim()))
}
