//! Stop identity types.

use std::fmt;

/// Identifier of a stop as understood by an upstream.
///
/// Ruter identifies stops with integers (`3010200`), Entur with
/// namespaced strings (`NSR:StopPlace:58366`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StopId {
    Numeric(i64),
    Text(String),
}

impl StopId {
    /// Interpret a command-line argument as a stop ID.
    ///
    /// Returns `None` when the argument is not an integer, meaning it
    /// should be resolved through a stop search instead.
    ///
    /// ```
    /// use sanntid::domain::StopId;
    ///
    /// assert_eq!(StopId::parse_numeric("3010200"), Some(StopId::Numeric(3010200)));
    /// assert_eq!(StopId::parse_numeric("Majorstuen"), None);
    /// ```
    pub fn parse_numeric(s: &str) -> Option<Self> {
        s.parse::<i64>().ok().map(StopId::Numeric)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopId::Numeric(id) => write!(f, "{id}"),
            StopId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for StopId {
    fn from(id: i64) -> Self {
        StopId::Numeric(id)
    }
}

impl From<String> for StopId {
    fn from(id: String) -> Self {
        StopId::Text(id)
    }
}

/// A physical stop that can receive arrivals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    pub name: String,
    pub id: StopId,
}

impl Stop {
    pub fn new(name: impl Into<String>, id: impl Into<StopId>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}
