//! Arrival type.

use chrono::{DateTime, FixedOffset};

use super::Line;
use super::time::unknown_time;

/// One predicted vehicle visit to a stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrival {
    pub line: Line,
    /// Expected arrival. The Unix epoch when the upstream time was unparsable.
    pub expected_arrival_time: DateTime<FixedOffset>,
    pub platform: String,
}

impl Arrival {
    /// Whether the expected arrival time is a real upstream time rather
    /// than the unparsable-time sentinel.
    pub fn has_known_time(&self) -> bool {
        self.expected_arrival_time != unknown_time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Direction, VehicleMode, parse_arrival_time};

    fn arrival(time: &str) -> Arrival {
        Arrival {
            line: Line {
                name: "20".into(),
                destination: "Skøyen".into(),
                vehicle_mode: VehicleMode::Bus,
                direction: Direction::Down,
            },
            expected_arrival_time: parse_arrival_time(time),
            platform: "2".into(),
        }
    }

    #[test]
    fn known_time() {
        assert!(arrival("2015-02-27T12:30:25+01:00").has_known_time());
    }

    #[test]
    fn unknown_time_is_flagged() {
        assert!(!arrival("garbage").has_known_time());
    }
}
