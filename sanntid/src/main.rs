use std::io::{self, IsTerminal, Write};

use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sanntid::cli::{Cli, run};
use sanntid::upstream::Backend;

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    // Logs go to stderr so they never mix with the arrivals on stdout
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    let styling = cli.color.styling(stdout.is_terminal());
    let mut out = stdout.lock();

    let backend = match Backend::new(cli.backend, cli.client_config()) {
        Ok(backend) => backend,
        Err(e) => return writeln!(out, "Error: {:?}", e.to_string()),
    };

    run(
        &backend,
        cli.location(),
        cli.direction,
        styling,
        Local::now,
        &mut out,
    )
    .await?;
    out.flush()
}
