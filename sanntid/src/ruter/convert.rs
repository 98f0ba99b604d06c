//! Conversion from Ruter DTOs to domain types.

use crate::decode::{Decoded, decode_json};
use crate::domain::{Arrival, Direction, Line, Stop, VehicleMode, parse_arrival_time};
use crate::error::SanntidError;

use super::types::{ArrivalRecord, PlaceRecord};

/// Place type of the records that can receive arrivals.
const STOP_PLACE_TYPE: &str = "Stop";

/// Decode a `stopvisit/getdepartures` body.
pub fn decode_arrivals(body: &[u8]) -> Decoded<ArrivalRecord> {
    decode_json(body, |records: Vec<ArrivalRecord>| records)
}

/// Decode a `place/getplaces` body.
pub fn decode_stops(body: &[u8]) -> Decoded<PlaceRecord> {
    decode_json(body, |records: Vec<PlaceRecord>| records)
}

/// Convert one departure record to an arrival.
pub fn to_arrival(record: &ArrivalRecord) -> Arrival {
    let journey = &record.monitored_vehicle_journey;
    let call = &journey.monitored_call;

    Arrival {
        line: Line {
            name: journey.published_line_name.clone().unwrap_or_default(),
            destination: journey.destination_name.clone().unwrap_or_default(),
            vehicle_mode: VehicleMode::from_code(journey.vehicle_mode.unwrap_or_default()),
            direction: Direction::from_code(journey.direction_ref),
        },
        expected_arrival_time: parse_arrival_time(
            call.expected_arrival_time.as_deref().unwrap_or_default(),
        ),
        platform: call.departure_platform_name.clone().unwrap_or_default(),
    }
}

/// All records that are stops, in upstream order.
///
/// Areas, streets and points of interest are dropped.
pub fn to_stops(records: &[PlaceRecord]) -> Vec<Stop> {
    records
        .iter()
        .filter(|r| r.place_type == STOP_PLACE_TYPE)
        .map(|r| Stop::new(r.name.clone(), r.id))
        .collect()
}

/// The first stop among the search results for `search`.
pub fn to_stop(records: &[PlaceRecord], search: &str) -> Result<Stop, SanntidError> {
    to_stops(records)
        .into_iter()
        .next()
        .ok_or_else(|| SanntidError::StopNotFound {
            search: search.to_string(),
        })
}
