//! Direction filtering of arrivals.

use crate::domain::{Arrival, Direction};

/// Keep the arrivals travelling in `direction`, in their original order.
///
/// `Direction::Any` keeps everything.
pub fn filter_direction(arrivals: Vec<Arrival>, direction: Direction) -> Vec<Arrival> {
    if direction == Direction::Any {
        return arrivals;
    }
    arrivals
        .into_iter()
        .filter(|a| a.line.direction == direction)
        .collect()
}
