//! Ruter reisapi HTTP client.

use reqwest::Url;
use reqwest::header::HeaderMap;
use tracing::debug;

use crate::domain::{Arrival, Stop, StopId};
use crate::error::SanntidError;
use crate::fetch::{ClientConfig, fetch};
use crate::upstream::Upstream;

use super::convert::{decode_arrivals, decode_stops, to_arrival, to_stop};

/// Default base URL for the Ruter reisapi.
pub const DEFAULT_BASE_URL: &str = "https://reisapi.ruter.no";

/// Ruter reisapi client.
///
/// Requests carry no headers and no authentication.
#[derive(Debug, Clone)]
pub struct RuterClient {
    http: reqwest::Client,
    base_url: String,
}

impl RuterClient {
    /// Create a new Ruter client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, SanntidError> {
        let http = config.build_http(HeaderMap::new())?;
        Ok(Self {
            http,
            base_url: config.base().to_string(),
        })
    }

    fn departures_url(&self, id: &StopId) -> String {
        format!("{}/stopvisit/getdepartures/{}", self.base_url, id)
    }

    // The search text becomes a single, percent-encoded path segment.
    fn places_url(&self, search: &str) -> Result<Url, SanntidError> {
        let mut url = Url::parse(&format!("{}/place/getplaces", self.base_url))
            .map_err(|e| SanntidError::Client(format!("invalid base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| SanntidError::Client("base URL cannot take a path".to_string()))?
            .push(search);
        Ok(url)
    }
}

impl Upstream for RuterClient {
    async fn fetch_arrivals(&self, id: &StopId) -> Result<Vec<Arrival>, SanntidError> {
        let body = fetch(&self.http, &self.departures_url(id)).await?;
        let decoded = decode_arrivals(&body);
        debug!(
            stop = %id,
            records = decoded.items.len(),
            degraded = decoded.is_degraded(),
            "decoded departures"
        );
        Ok(decoded.into_items().iter().map(to_arrival).collect())
    }

    async fn find_stop(&self, name: &str) -> Result<Stop, SanntidError> {
        let url = self.places_url(name)?;
        let body = fetch(&self.http, url.as_str()).await?;
        let decoded = decode_stops(&body);
        debug!(
            search = name,
            records = decoded.items.len(),
            degraded = decoded.is_degraded(),
            "decoded places"
        );
        to_stop(&decoded.items, name)
    }
}
