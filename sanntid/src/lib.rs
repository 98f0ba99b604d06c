//! Real-time public transit arrivals in the terminal.
//!
//! Given a stop ID or a stop name, looks up the upcoming arrivals at that
//! stop and prints one line per vehicle, with a glyph for the vehicle
//! kind and a human-friendly arrival time.

pub mod cli;
pub mod decode;
pub mod domain;
pub mod entur;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod format;
pub mod ruter;
pub mod upstream;
