//! Upstream selection.
//!
//! Each transit API is wrapped in a client implementing [`Upstream`], so
//! the lookup flow in [`crate::cli`] is written once and tested with mock
//! data.

use std::fmt;
use std::str::FromStr;

use crate::domain::{Arrival, Stop, StopId};
use crate::entur::EnturClient;
use crate::error::SanntidError;
use crate::fetch::ClientConfig;
use crate::ruter::RuterClient;

/// A transit API that can look up stops and their arrivals.
#[allow(async_fn_in_trait)]
pub trait Upstream {
    /// Upcoming arrivals at a stop, in upstream order.
    async fn fetch_arrivals(&self, id: &StopId) -> Result<Vec<Arrival>, SanntidError>;

    /// The best stop matching a free-text search.
    async fn find_stop(&self, name: &str) -> Result<Stop, SanntidError>;
}

/// Error returned when parsing an unknown backend name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown backend {0:?}: expected ruter or entur")]
pub struct InvalidBackend(String);

/// The upstream APIs this client can talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackendKind {
    /// Ruter reisapi (REST/JSON)
    #[default]
    Ruter,
    /// Entur (GraphQL)
    Entur,
}

impl BackendKind {
    /// Default base URL of this backend.
    pub fn default_base_url(self) -> &'static str {
        match self {
            BackendKind::Ruter => crate::ruter::DEFAULT_BASE_URL,
            BackendKind::Entur => crate::entur::DEFAULT_BASE_URL,
        }
    }
}

impl FromStr for BackendKind {
    type Err = InvalidBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ruter" => Ok(BackendKind::Ruter),
            "entur" => Ok(BackendKind::Entur),
            _ => Err(InvalidBackend(s.to_string())),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BackendKind::Ruter => "ruter",
            BackendKind::Entur => "entur",
        })
    }
}

/// An upstream chosen at startup.
#[derive(Debug, Clone)]
pub enum Backend {
    Ruter(RuterClient),
    Entur(EnturClient),
}

impl Backend {
    /// Build the client for `kind`.
    pub fn new(kind: BackendKind, config: ClientConfig) -> Result<Self, SanntidError> {
        Ok(match kind {
            BackendKind::Ruter => Backend::Ruter(RuterClient::new(config)?),
            BackendKind::Entur => Backend::Entur(EnturClient::new(config)?),
        })
    }
}

impl Upstream for Backend {
    async fn fetch_arrivals(&self, id: &StopId) -> Result<Vec<Arrival>, SanntidError> {
        match self {
            Backend::Ruter(client) => client.fetch_arrivals(id).await,
            Backend::Entur(client) => client.fetch_arrivals(id).await,
        }
    }

    async fn find_stop(&self, name: &str) -> Result<Stop, SanntidError> {
        match self {
            Backend::Ruter(client) => client.find_stop(name).await,
            Backend::Entur(client) => client.find_stop(name).await,
        }
    }
}
