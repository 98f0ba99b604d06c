//! Command-line interface.
//!
//! The flow has two steps: resolve the argument to a stop ID (searching
//! by name when it is not a number), then display the arrivals at that
//! stop. Errors are printed, never propagated, and nothing is retried.

use std::io::{self, Write};
use std::time::Duration;

use chrono::{DateTime, TimeZone};
use clap::{Parser, ValueEnum};
use tracing::debug;

use crate::domain::{Arrival, Direction, StopId};
use crate::error::SanntidError;
use crate::fetch::{ClientConfig, DEFAULT_CLIENT_NAME};
use crate::filter::filter_direction;
use crate::format::{Styling, format_arrival};
use crate::upstream::{BackendKind, Upstream};

/// Printed when no stop was given.
pub const MISSING_LOCATION: &str = "Error: Missing location ID";

#[derive(Debug, Parser)]
#[command(name = "sanntid")]
#[command(about = "Show upcoming arrivals at a public transit stop", long_about = None)]
pub struct Cli {
    /// Stop ID, or a stop name to search for. Only the first word is used.
    #[arg(value_name = "STOP", num_args = 0.., allow_negative_numbers = true)]
    pub location: Vec<String>,

    /// Upstream API to query
    #[arg(long, default_value_t = BackendKind::Ruter)]
    pub backend: BackendKind,

    /// Override the upstream base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Client name sent to upstreams that ask for one
    #[arg(long, value_name = "NAME", default_value = DEFAULT_CLIENT_NAME)]
    pub client_name: String,

    /// Only show arrivals travelling in this direction (any, up, down)
    #[arg(short, long, default_value_t = Direction::Any)]
    pub direction: Direction,

    /// When to colour line names
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Request timeout in seconds (none by default)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// When to emit ANSI colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Colour when stdout is a terminal
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn styling(self, stdout_is_terminal: bool) -> Styling {
        match self {
            ColorChoice::Always => Styling::Ansi,
            ColorChoice::Auto if stdout_is_terminal => Styling::Ansi,
            ColorChoice::Auto | ColorChoice::Never => Styling::Plain,
        }
    }
}

impl Cli {
    /// The stop to look up, if one was given.
    pub fn location(&self) -> Option<&str> {
        self.location.first().map(String::as_str)
    }

    /// Client configuration for the selected backend.
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(self.backend.default_base_url())
            .with_client_name(self.client_name.as_str());
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url.as_str());
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

/// Turn the argument into a stop ID, searching by name if needed.
pub async fn resolve<U: Upstream>(upstream: &U, location: &str) -> Result<StopId, SanntidError> {
    if let Some(id) = StopId::parse_numeric(location) {
        return Ok(id);
    }
    let stop = upstream.find_stop(location).await?;
    debug!(search = location, stop = %stop.name, id = %stop.id, "resolved stop");
    Ok(stop.id)
}

/// Arrivals at a stop in one direction, in upstream order.
pub async fn arrivals<U: Upstream>(
    upstream: &U,
    id: &StopId,
    direction: Direction,
) -> Result<Vec<Arrival>, SanntidError> {
    let arrivals = upstream.fetch_arrivals(id).await?;
    Ok(filter_direction(arrivals, direction))
}

/// Run one lookup and write the result to `out`.
///
/// `clock` is read once, after the arrivals have been fetched.
pub async fn run<U, W, Tz>(
    upstream: &U,
    location: Option<&str>,
    direction: Direction,
    styling: Styling,
    clock: impl FnOnce() -> DateTime<Tz>,
    out: &mut W,
) -> io::Result<()>
where
    U: Upstream,
    W: Write,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let Some(location) = location else {
        return writeln!(out, "{MISSING_LOCATION}");
    };

    let result = match resolve(upstream, location).await {
        Ok(id) => arrivals(upstream, &id, direction).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(arrivals) => {
            let now = clock();
            for arrival in &arrivals {
                out.write_all(format_arrival(arrival, &now, styling).as_bytes())?;
            }
            Ok(())
        }
        Err(e) => writeln!(out, "Error: {:?}", e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, Stop, VehicleMode, parse_arrival_time};
    use chrono::{FixedOffset, Utc};
    use std::sync::Mutex;

    /// Mock upstream recording every call.
    struct MockUpstream {
        stops: Vec<Stop>,
        arrivals: Vec<Arrival>,
        fail_fetch: bool,
        calls: Mutex<Vec<String>>,
    }

    impl MockUpstream {
        fn new() -> Self {
            Self {
                stops: Vec::new(),
                arrivals: Vec::new(),
                fail_fetch: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Upstream for MockUpstream {
        async fn fetch_arrivals(&self, id: &StopId) -> Result<Vec<Arrival>, SanntidError> {
            self.calls.lock().unwrap().push(format!("arrivals {id}"));
            if self.fail_fetch {
                return Err(SanntidError::Client("connection refused".into()));
            }
            Ok(self.arrivals.clone())
        }

        async fn find_stop(&self, name: &str) -> Result<Stop, SanntidError> {
            self.calls.lock().unwrap().push(format!("stop {name}"));
            self.stops
                .iter()
                .find(|s| s.name.starts_with(name))
                .cloned()
                .ok_or_else(|| SanntidError::StopNotFound {
                    search: name.to_string(),
                })
        }
    }

    fn arrival(name: &str, destination: &str, direction: Direction, time: &str) -> Arrival {
        Arrival {
            line: Line {
                name: name.into(),
                destination: destination.into(),
                vehicle_mode: VehicleMode::Bus,
                direction,
            },
            expected_arrival_time: parse_arrival_time(time),
            platform: String::new(),
        }
    }

    fn clock() -> DateTime<FixedOffset> {
        parse_arrival_time("2015-02-27T12:30:25+01:00")
    }

    async fn output<U: Upstream>(upstream: &U, location: Option<&str>, direction: Direction) -> String {
        let mut out = Vec::new();
        run(upstream, location, direction, Styling::Plain, clock, &mut out)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn missing_location_makes_no_calls() {
        let upstream = MockUpstream::new();

        let printed = output(&upstream, None, Direction::Any).await;

        assert_eq!(printed, "Error: Missing location ID\n");
        assert!(upstream.calls().is_empty());
    }

    #[tokio::test]
    async fn numeric_location_skips_search() {
        let mut upstream = MockUpstream::new();
        upstream.arrivals = vec![arrival(
            "20",
            "Skøyen",
            Direction::Down,
            "2015-02-27T12:30:25+01:00",
        )];

        let printed = output(&upstream, Some("3010536"), Direction::Any).await;

        assert_eq!(printed, "🚌  20 Skøyen - now\n");
        assert_eq!(upstream.calls(), ["arrivals 3010536"]);
    }

    #[tokio::test]
    async fn negative_location_skips_search() {
        let upstream = MockUpstream::new();

        let printed = output(&upstream, Some("-5"), Direction::Any).await;

        assert_eq!(printed, "");
        assert_eq!(upstream.calls(), ["arrivals -5"]);
    }

    #[tokio::test]
    async fn name_is_resolved_before_fetching() {
        let mut upstream = MockUpstream::new();
        upstream.stops = vec![Stop::new("Majorstuen [T-bane]", StopId::Numeric(3010200))];
        upstream.arrivals = vec![
            arrival("5", "Vestli", Direction::Up, "2015-02-27T12:33:25+01:00"),
            arrival("3", "Mortensrud", Direction::Down, "2015-02-27T12:50:00+01:00"),
        ];

        let printed = output(&upstream, Some("Majorstuen"), Direction::Any).await;

        assert_eq!(
            printed,
            "🚌  5 Vestli - 3 min.\n🚌  3 Mortensrud - 12:50\n"
        );
        assert_eq!(upstream.calls(), ["stop Majorstuen", "arrivals 3010200"]);
    }

    #[tokio::test]
    async fn unknown_name_stops_before_fetching() {
        let upstream = MockUpstream::new();

        let printed = output(&upstream, Some("Atlantis"), Direction::Any).await;

        assert_eq!(
            printed,
            "Error: \"Unable to find stop with search text: Atlantis\"\n"
        );
        assert_eq!(upstream.calls(), ["stop Atlantis"]);
    }

    #[tokio::test]
    async fn fetch_error_is_printed() {
        let mut upstream = MockUpstream::new();
        upstream.fail_fetch = true;

        let printed = output(&upstream, Some("42"), Direction::Any).await;

        assert_eq!(
            printed,
            "Error: \"client configuration error: connection refused\"\n"
        );
    }

    #[tokio::test]
    async fn order_is_kept_and_direction_filtered() {
        let mut upstream = MockUpstream::new();
        upstream.arrivals = vec![
            arrival("31", "Snarøya", Direction::Up, "2015-02-27T13:10:00+01:00"),
            arrival("20", "Skøyen", Direction::Down, "2015-02-27T12:40:00+01:00"),
            arrival("31", "Tonsenhagen", Direction::Down, "2015-02-27T12:35:00+01:00"),
        ];

        let all = output(&upstream, Some("1"), Direction::Any).await;
        assert_eq!(
            all,
            "🚌  31 Snarøya - 13:10\n🚌  20 Skøyen - 12:40\n🚌  31 Tonsenhagen - 5 min.\n"
        );

        let down = output(&upstream, Some("1"), Direction::Down).await;
        assert_eq!(down, "🚌  20 Skøyen - 12:40\n🚌  31 Tonsenhagen - 5 min.\n");
    }

    #[tokio::test]
    async fn no_arrivals_prints_nothing() {
        let upstream = MockUpstream::new();
        assert_eq!(output(&upstream, Some("1"), Direction::Any).await, "");
    }

    #[tokio::test]
    async fn clock_time_zone_is_used() {
        let mut upstream = MockUpstream::new();
        upstream.arrivals = vec![arrival(
            "20",
            "Skøyen",
            Direction::Down,
            "2015-02-27T13:00:00+01:00",
        )];

        let mut out = Vec::new();
        let utc_clock = || clock().with_timezone(&Utc);
        run(&upstream, Some("1"), Direction::Any, Styling::Plain, utc_clock, &mut out)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "🚌  20 Skøyen - 12:00\n");
    }

    #[test]
    fn bare_invocation_parses() {
        let cli = Cli::try_parse_from(["sanntid"]).unwrap();
        assert_eq!(cli.location(), None);
        assert_eq!(cli.direction, Direction::Any);
        assert_eq!(cli.color, ColorChoice::Auto);

        let config = cli.client_config();
        assert_eq!(config.base_url, crate::ruter::DEFAULT_BASE_URL);
        assert_eq!(config.client_name, DEFAULT_CLIENT_NAME);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn extra_words_are_ignored() {
        let cli = Cli::try_parse_from(["sanntid", "Oslo", "S"]).unwrap();
        assert_eq!(cli.location(), Some("Oslo"));
    }

    #[test]
    fn negative_id_is_a_location() {
        let cli = Cli::try_parse_from(["sanntid", "-5"]).unwrap();
        assert_eq!(cli.location(), Some("-5"));
        assert_eq!(StopId::parse_numeric("-5"), Some(StopId::Numeric(-5)));
    }

    #[test]
    fn flags_after_location() {
        let cli = Cli::try_parse_from(["sanntid", "Majorstuen", "--direction", "down"]).unwrap();
        assert_eq!(cli.location(), Some("Majorstuen"));
        assert_eq!(cli.direction, Direction::Down);
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "sanntid",
            "--backend",
            "entur",
            "--base-url",
            "http://localhost:9000",
            "--direction",
            "up",
            "--color",
            "never",
            "--timeout",
            "5",
            "--client-name",
            "acme-departures",
            "Jernbanetorget",
        ])
        .unwrap();

        assert_eq!(cli.location(), Some("Jernbanetorget"));
        assert_eq!(cli.backend, BackendKind::Entur);
        assert_eq!(cli.direction, Direction::Up);
        assert_eq!(cli.color, ColorChoice::Never);

        let config = cli.client_config();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.client_name, "acme-departures");
    }

    #[test]
    fn bad_direction_is_rejected() {
        assert!(Cli::try_parse_from(["sanntid", "--direction", "left", "1"]).is_err());
    }

    #[test]
    fn color_choice() {
        assert_eq!(ColorChoice::Auto.styling(true), Styling::Ansi);
        assert_eq!(ColorChoice::Auto.styling(false), Styling::Plain);
        assert_eq!(ColorChoice::Always.styling(false), Styling::Ansi);
        assert_eq!(ColorChoice::Never.styling(true), Styling::Plain);
    }
}
