//! Timestamp formatting for store entries
//!
//! The store reports timestamps in several shapes: RFC 3339, `%z`-suffixed
//! local strings, and naive `%Y-%m-%dT%H:%M:%S`. Display is always
//! `DD.MM.YYYY HH:mm:ss` in UTC.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Display format for server timestamps
pub const DISPLAY_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Format a server timestamp for display, converted to UTC
///
/// Empty input stays empty; anything unparseable is returned verbatim so a
/// surprising backend value is still visible rather than hidden.
pub fn format_utc(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Utc).format(DISPLAY_FORMAT).to_string();
    }

    // '%FT%T%z' shapes like "2024-01-01T00:00:00+0000" (no offset colon)
    if let Ok(parsed) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return parsed.with_timezone(&Utc).format(DISPLAY_FORMAT).to_string();
    }

    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.and_utc().format(DISPLAY_FORMAT).to_string();
    }

    raw.to_string()
}

// ============================================================================
// Tests
// ============================================================================
