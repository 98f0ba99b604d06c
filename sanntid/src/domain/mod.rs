//! Domain types for transit arrivals.
//!
//! These types are independent of any upstream API. Upstream responses
//! are converted into them by the `ruter` and `entur` modules.

mod arrival;
mod line;
mod stop;
mod time;

pub use arrival::Arrival;
pub use line::{Direction, InvalidDirection, Line, VehicleMode};
pub use stop::{Stop, StopId};
pub use time::{ARRIVAL_TIME_FORMAT, parse_arrival_time, unknown_time};
