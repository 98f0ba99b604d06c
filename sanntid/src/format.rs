//! Terminal rendering of arrivals.
//!
//! Each arrival becomes one line: vehicle glyph, line name, destination
//! and a human time, e.g. `🚌  20 Skøyen - 3 min.`

use std::fmt;

use chrono::{DateTime, FixedOffset, TimeZone};

use crate::domain::{Arrival, VehicleMode};

/// Arrivals further away than this are shown as a clock time.
const CLOCK_THRESHOLD_MINUTES: f64 = 6.0;

/// Arrivals closer than this are shown as "now".
const NOW_THRESHOLD_MINUTES: f64 = 1.0;

/// Shown instead of a time when the upstream time was unparsable.
const UNKNOWN_TIME: &str = "?";

const ANSI_RESET: &str = "\x1b[0m";

/// Whether output may contain ANSI escape sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Styling {
    #[default]
    Plain,
    Ansi,
}

/// Service category of a numbered line, by Ruter's numbering scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCategory {
    /// Lines 1 to 9
    Metro,
    /// Lines 10 to 19
    Tram,
    /// Lines 20 to 99
    LocalBus,
    /// Lines 100 and up
    RegionalBus,
}

impl LineCategory {
    /// Categorise a line name. Only positive integers have a category.
    pub fn of(name: &str) -> Option<Self> {
        let number = name.parse::<u64>().ok().filter(|n| *n > 0)?;
        Some(match number {
            1..=9 => LineCategory::Metro,
            10..=19 => LineCategory::Tram,
            20..=99 => LineCategory::LocalBus,
            _ => LineCategory::RegionalBus,
        })
    }

    // Bold white text on the category colour.
    fn ansi_style(self) -> &'static str {
        match self {
            LineCategory::Metro => "\x1b[1;97;43m",
            LineCategory::Tram => "\x1b[1;97;44m",
            LineCategory::LocalBus => "\x1b[1;97;41m",
            LineCategory::RegionalBus => "\x1b[1;97;42m",
        }
    }
}

/// Glyph for a vehicle mode.
pub fn vehicle_glyph(mode: VehicleMode) -> &'static str {
    match mode {
        VehicleMode::Bus => "🚌",
        VehicleMode::Train => "🚆",
        VehicleMode::Tram => "🚋",
        VehicleMode::Metro => "🚇",
        VehicleMode::Unknown => "❔",
    }
}

/// Line name, coloured by category when styling allows it.
pub fn format_line_name(name: &str, styling: Styling) -> String {
    match (styling, LineCategory::of(name)) {
        (Styling::Ansi, Some(category)) => {
            format!("{}{name}{ANSI_RESET}", category.ansi_style())
        }
        _ => name.to_string(),
    }
}

/// Human arrival time relative to `now`.
///
/// More than six minutes away gives `HH:MM` in `now`'s time zone, less
/// than a minute (or already passed) gives `now`, anything between gives
/// the rounded number of minutes, e.g. `4 min.`.
pub fn format_time<Tz>(time: &DateTime<FixedOffset>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let remaining = time.signed_duration_since(now.clone());
    let minutes = remaining.num_milliseconds() as f64 / 60_000.0;

    if minutes > CLOCK_THRESHOLD_MINUTES {
        time.with_timezone(&now.timezone()).format("%H:%M").to_string()
    } else if minutes < NOW_THRESHOLD_MINUTES {
        "now".to_string()
    } else {
        format!("{} min.", minutes.round() as i64)
    }
}

/// One output line for an arrival, including the trailing newline.
///
/// The glyph is followed by two spaces because the emoji are rendered
/// double width by most terminals. An arrival without a known time shows
/// `?` in place of the time.
pub fn format_arrival<Tz>(arrival: &Arrival, now: &DateTime<Tz>, styling: Styling) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let time = if arrival.has_known_time() {
        format_time(&arrival.expected_arrival_time, now)
    } else {
        UNKNOWN_TIME.to_string()
    };
    format!(
        "{}  {} {} - {}\n",
        vehicle_glyph(arrival.line.vehicle_mode),
        format_line_name(&arrival.line.name, styling),
        arrival.line.destination,
        time,
    )
}
