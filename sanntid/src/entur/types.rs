//! Entur GraphQL request and response DTOs.

use serde::{Deserialize, Serialize};

/// A GraphQL request body.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<V> {
    pub query: &'static str,
    pub variables: V,
}

/// Standard GraphQL response envelope. Errors are ignored; a response
/// carrying only errors has no `data` and yields no records.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<D> {
    pub data: Option<D>,
}

/// `data` of the stop-places search query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPlaceSearch {
    #[serde(default)]
    pub stop_place: Vec<StopPlaceRecord>,
}

/// A stop place returned by the search.
#[derive(Debug, Clone, Deserialize)]
pub struct StopPlaceRecord {
    /// NeTEx ID, e.g. `NSR:StopPlace:58366`.
    #[serde(alias = "ID")]
    pub id: String,

    #[serde(alias = "Name")]
    pub name: Option<LocalizedName>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedName {
    #[serde(alias = "Value")]
    pub value: Option<String>,
}

/// `data` of the journey-planner departures query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPlaceDepartures {
    pub stop_place: Option<StopPlaceCalls>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPlaceCalls {
    #[serde(default)]
    pub estimated_calls: Vec<EstimatedCallRecord>,
}

/// One predicted call at the stop place.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatedCallRecord {
    pub expected_arrival_time: Option<String>,
    pub destination_display: Option<DestinationDisplay>,
    pub quay: Option<Quay>,
    pub service_journey: Option<ServiceJourney>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDisplay {
    pub front_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quay {
    pub public_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceJourney {
    pub journey_pattern: Option<JourneyPattern>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyPattern {
    /// `outbound`, `inbound`, `clockwise`, `anticlockwise` or `unknown`.
    pub direction_type: Option<String>,
    pub line: Option<EnturLine>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnturLine {
    pub public_code: Option<String>,
    /// `bus`, `rail`, `tram`, `metro`, `water`, ...
    pub transport_mode: Option<String>,
}
