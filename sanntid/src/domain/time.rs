//! Arrival time parsing.
//!
//! Upstreams send expected arrival times as `2015-02-27T12:30:25+01:00`.
//! A time that does not match this layout is not an error: it becomes
//! the Unix epoch, and callers must tolerate that sentinel.

use chrono::{DateTime, FixedOffset, Utc};

/// Layout of upstream arrival timestamps.
pub const ARRIVAL_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// The sentinel used for arrival times that could not be parsed.
pub fn unknown_time() -> DateTime<FixedOffset> {
    DateTime::<Utc>::default().fixed_offset()
}

/// Parse an upstream arrival timestamp, falling back to [`unknown_time`].
///
/// ```
/// use sanntid::domain::{parse_arrival_time, unknown_time};
///
/// let t = parse_arrival_time("2015-02-27T12:30:25+01:00");
/// assert_eq!(t.to_rfc3339(), "2015-02-27T12:30:25+01:00");
///
/// assert_eq!(parse_arrival_time("soon"), unknown_time());
/// ```
pub fn parse_arrival_time(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_str(s, ARRIVAL_TIME_FORMAT).unwrap_or_else(|e| {
        tracing::trace!(input = s, error = %e, "unparsable arrival time");
        unknown_time()
    })
}
