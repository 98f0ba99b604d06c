//! Conversion from Entur DTOs to domain types.

use crate::decode::{Decoded, decode_json};
use crate::domain::{Arrival, Direction, Line, Stop, VehicleMode, parse_arrival_time};
use crate::error::SanntidError;

use super::types::{
    EstimatedCallRecord, GraphQlResponse, StopPlaceDepartures, StopPlaceRecord, StopPlaceSearch,
};

/// Decode a stop-places search response.
pub fn decode_stop_places(body: &[u8]) -> Decoded<StopPlaceRecord> {
    decode_json(body, |response: GraphQlResponse<StopPlaceSearch>| {
        response.data.map(|d| d.stop_place).unwrap_or_default()
    })
}

/// Decode a journey-planner departures response.
pub fn decode_estimated_calls(body: &[u8]) -> Decoded<EstimatedCallRecord> {
    decode_json(body, |response: GraphQlResponse<StopPlaceDepartures>| {
        response
            .data
            .and_then(|d| d.stop_place)
            .map(|s| s.estimated_calls)
            .unwrap_or_default()
    })
}

/// The first stop place returned for `search`.
pub fn to_stop(records: &[StopPlaceRecord], search: &str) -> Result<Stop, SanntidError> {
    let record = records.first().ok_or_else(|| SanntidError::StopNotFound {
        search: search.to_string(),
    })?;

    let name = record
        .name
        .as_ref()
        .and_then(|n| n.value.clone())
        .unwrap_or_default();

    Ok(Stop::new(name, record.id.clone()))
}

/// Convert one estimated call to an arrival.
pub fn to_arrival(call: &EstimatedCallRecord) -> Arrival {
    let pattern = call
        .service_journey
        .as_ref()
        .and_then(|j| j.journey_pattern.as_ref());
    let line = pattern.and_then(|p| p.line.as_ref());

    Arrival {
        line: Line {
            name: line
                .and_then(|l| l.public_code.clone())
                .unwrap_or_default(),
            destination: call
                .destination_display
                .as_ref()
                .and_then(|d| d.front_text.clone())
                .unwrap_or_default(),
            vehicle_mode: line
                .and_then(|l| l.transport_mode.as_deref())
                .map_or(VehicleMode::Unknown, VehicleMode::from_transport_mode),
            direction: direction_from_type(pattern.and_then(|p| p.direction_type.as_deref())),
        },
        expected_arrival_time: parse_arrival_time(
            call.expected_arrival_time.as_deref().unwrap_or_default(),
        ),
        platform: call
            .quay
            .as_ref()
            .and_then(|q| q.public_code.clone())
            .unwrap_or_default(),
    }
}

fn direction_from_type(direction_type: Option<&str>) -> Direction {
    match direction_type {
        Some("outbound") => Direction::Up,
        Some("inbound") => Direction::Down,
        _ => Direction::Any,
    }
}
