//! Ruter reisapi client.
//!
//! The reisapi is a REST/JSON API serving Oslo and Akershus:
//! - `stopvisit/getdepartures/{id}` lists upcoming visits at a stop
//! - `place/getplaces/{search}` searches stops, areas, streets and POIs
//!
//! Bodies that fail to decode are treated as empty, and only places of
//! type "Stop" are accepted as lookup results.

mod client;
mod convert;
mod types;

pub use client::{DEFAULT_BASE_URL, RuterClient};
pub use convert::{decode_arrivals, decode_stops, to_arrival, to_stop, to_stops};
pub use types::{ArrivalRecord, MonitoredCall, MonitoredVehicleJourney, PlaceRecord};
