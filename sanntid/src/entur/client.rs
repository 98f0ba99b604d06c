//! Entur GraphQL HTTP client.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use tracing::debug;

use crate::domain::{Arrival, Stop, StopId};
use crate::error::SanntidError;
use crate::fetch::{ClientConfig, post_json};
use crate::upstream::Upstream;

use super::convert::{decode_estimated_calls, decode_stop_places, to_arrival, to_stop};
use super::types::GraphQlRequest;

/// Default base URL for the Entur APIs.
pub const DEFAULT_BASE_URL: &str = "https://api.entur.io";

const STOP_PLACES_PATH: &str = "/stop-places/v1/graphql";
const JOURNEY_PLANNER_PATH: &str = "/journey-planner/v3/graphql";

/// Number of estimated calls requested per stop.
const NUMBER_OF_DEPARTURES: u32 = 20;

/// Entur asks every client to identify itself with this header.
const CLIENT_NAME_HEADER: &str = "et-client-name";

const STOP_PLACE_QUERY: &str = "query($stop: String) { stopPlace(query: $stop) { id name { value } } }";

const DEPARTURES_QUERY: &str = "query($id: String!, $count: Int) { stopPlace(id: $id) { id estimatedCalls(numberOfDepartures: $count) { expectedArrivalTime destinationDisplay { frontText } quay { publicCode } serviceJourney { journeyPattern { directionType line { publicCode transportMode } } } } } }";

#[derive(Debug, Serialize)]
struct StopVariables<'a> {
    stop: &'a str,
}

#[derive(Debug, Serialize)]
struct DeparturesVariables {
    id: String,
    count: u32,
}

/// Entur client for stop search and departures.
#[derive(Debug, Clone)]
pub struct EnturClient {
    http: reqwest::Client,
    base_url: String,
}

impl EnturClient {
    /// Create a new Entur client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, SanntidError> {
        let mut headers = HeaderMap::new();
        let client_name = HeaderValue::from_str(&config.client_name)
            .map_err(|_| SanntidError::Client("invalid client name".to_string()))?;
        headers.insert(HeaderName::from_static(CLIENT_NAME_HEADER), client_name);

        let http = config.build_http(headers)?;
        Ok(Self {
            http,
            base_url: config.base().to_string(),
        })
    }

    fn stop_places_url(&self) -> String {
        format!("{}{}", self.base_url, STOP_PLACES_PATH)
    }

    fn journey_planner_url(&self) -> String {
        format!("{}{}", self.base_url, JOURNEY_PLANNER_PATH)
    }
}

/// Entur stop place ID for a stop ID. Bare numbers are taken as
/// National Stop Register stop place numbers.
fn stop_place_id(id: &StopId) -> String {
    match id {
        StopId::Numeric(n) => format!("NSR:StopPlace:{n}"),
        StopId::Text(s) => s.clone(),
    }
}

impl Upstream for EnturClient {
    async fn fetch_arrivals(&self, id: &StopId) -> Result<Vec<Arrival>, SanntidError> {
        let request = GraphQlRequest {
            query: DEPARTURES_QUERY,
            variables: DeparturesVariables {
                id: stop_place_id(id),
                count: NUMBER_OF_DEPARTURES,
            },
        };
        let body = post_json(&self.http, &self.journey_planner_url(), &request).await?;
        let decoded = decode_estimated_calls(&body);
        debug!(
            stop = %id,
            records = decoded.items.len(),
            degraded = decoded.is_degraded(),
            "decoded estimated calls"
        );
        Ok(decoded.into_items().iter().map(to_arrival).collect())
    }

    async fn find_stop(&self, name: &str) -> Result<Stop, SanntidError> {
        let request = GraphQlRequest {
            query: STOP_PLACE_QUERY,
            variables: StopVariables { stop: name },
        };
        let body = post_json(&self.http, &self.stop_places_url(), &request).await?;
        let decoded = decode_stop_places(&body);
        debug!(
            search = name,
            records = decoded.items.len(),
            degraded = decoded.is_degraded(),
            "decoded stop places"
        );
        to_stop(&decoded.items, name)
    }
}
