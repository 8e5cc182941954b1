//! Date and time rendering
//!
//! Thin strftime-style wrappers over chrono. A pattern that fails to
//! parse falls back to ISO rendering instead of erroring, matching the
//! permissiveness of the rest of the crate.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

const ISO_DATETIME: &str = "%Y-%m-%d %H:%M:%S";

/// Formats an instant with a strftime-style pattern
///
/// Unparseable patterns fall back to "YYYY-MM-DD HH:MM:SS" rather than
/// failing.
///
/// # Arguments
/// - `instant` - The instant to render
/// - `pattern` - strftime-style format string (e.g. "%d %b %Y")
pub fn format_date(instant: DateTime<Utc>, pattern: &str) -> String {
    let items: Vec<Item> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return instant.format(ISO_DATETIME).to_string();
    }
    instant.format_with_items(items.into_iter()).to_string()
}

/// Formats an instant as "YYYY-MM-DD"
pub fn format_iso_date(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d").to_string()
}

/// Formats an instant as "YYYY-MM-DD HH:MM:SS"
pub fn format_iso_datetime(instant: DateTime<Utc>) -> String {
    instant.format(ISO_DATETIME).to_string()
}
