//! Expiration timestamp normalization.
//!
//! Waiver exports carry expiration timestamps in a few closely related
//! encodings: a bare UTC form with a literal `Z` suffix, the same form
//! with fractional seconds, and a form with an explicit numeric offset.
//! Candidate formats are tried in order; the first match wins, and
//! anything else falls through to [`ParsedExpiration::Unparseable`].

use chrono::{DateTime, NaiveDateTime, Utc};

/// Formats with a literal `Z` suffix, interpreted as UTC.
const UTC_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%SZ", "%Y-%m-%dT%H:%M:%S%.fZ"];

/// Formats carrying an explicit numeric offset.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%:z"];

/// Outcome of normalizing a raw expiration string.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedExpiration {
    /// Absolute instant, normalized to UTC.
    Instant(DateTime<Utc>),

    /// Input matched none of the accepted formats; carries the original
    /// string for diagnostics.
    Unparseable(String),
}

/// Parse a raw expiration timestamp into a UTC instant.
///
/// Never panics and never errors: every non-matching input, including
/// calendar-invalid dates, becomes `Unparseable`.
pub fn parse_expiration(raw: &str) -> ParsedExpiration {
    for format in UTC_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return ParsedExpiration::Instant(naive.and_utc());
        }
    }

    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(raw, format) {
            return ParsedExpiration::Instant(parsed.with_timezone(&Utc));
        }
    }

    ParsedExpiration::Unparseable(raw.to_string())
}
