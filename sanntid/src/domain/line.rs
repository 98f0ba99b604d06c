//! Line, direction and vehicle mode types.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown direction name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction {0:?}: expected any, up or down")]
pub struct InvalidDirection(String);

/// Travel direction of a line.
///
/// Upstreams send a numeric code. `Any` doubles as the filter wildcard
/// and as the value for codes that carry no direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Any,
    Up,
    Down,
}

impl Direction {
    /// Map an upstream direction code. Unrecognised codes become `Any`.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Direction::Up,
            2 => Direction::Down,
            _ => Direction::Any,
        }
    }
}

impl FromStr for Direction {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "any" => Ok(Direction::Any),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Any => "any",
            Direction::Up => "up",
            Direction::Down => "down",
        })
    }
}

/// Kind of vehicle serving a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleMode {
    Bus,
    Train,
    Tram,
    Metro,
    /// Any other mode (ferry, cable car, unmapped codes).
    Unknown,
}

impl VehicleMode {
    /// Map a Ruter vehicle mode code.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => VehicleMode::Bus,
            2 => VehicleMode::Train,
            3 => VehicleMode::Tram,
            4 => VehicleMode::Metro,
            _ => VehicleMode::Unknown,
        }
    }

    /// Map an Entur transport mode name.
    pub fn from_transport_mode(mode: &str) -> Self {
        match mode {
            "bus" | "coach" => VehicleMode::Bus,
            "rail" => VehicleMode::Train,
            "tram" => VehicleMode::Tram,
            "metro" => VehicleMode::Metro,
            _ => VehicleMode::Unknown,
        }
    }
}

/// A public transport line as seen from one stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub name: String,
    pub destination: String,
    pub vehicle_mode: VehicleMode,
    pub direction: Direction,
}
