//! Entur GraphQL client.
//!
//! Entur serves national Norwegian transit data. Stop names are searched
//! through the stop-places API and departures come from the journey
//! planner, both over GraphQL. Stop IDs are NeTEx strings such as
//! `NSR:StopPlace:58366`.

mod client;
mod convert;
mod types;

pub use client::{DEFAULT_BASE_URL, EnturClient};
pub use convert::{decode_estimated_calls, decode_stop_places, to_arrival, to_stop};
pub use types::{EstimatedCallRecord, StopPlaceRecord};
