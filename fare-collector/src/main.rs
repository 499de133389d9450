use std::io;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fare_collector::collector::{Collector, CollectorConfig, SystemClock, TokioPacer};
use fare_collector::psc::{PscClient, PscConfig};

#[tokio::main]
async fn main() -> ExitCode {
    // Records go to stdout; logs must stay out of the CSV stream.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = CollectorConfig::default();

    if let Ok(start) = std::env::var("FARE_START") {
        match chrono::NaiveDateTime::parse_from_str(&start, "%d.%m.%Y %H:%M") {
            Ok(parsed) => config.start = parsed,
            Err(e) => {
                error!("invalid FARE_START {start:?} (expected DD.MM.YYYY HH:MM): {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    if let Ok(days) = std::env::var("FARE_DAYS") {
        match days.parse() {
            Ok(n) => config.days = n,
            Err(e) => {
                error!("invalid FARE_DAYS {days:?}: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    // Fail fast on unknown station names, before any network traffic.
    if let Err(e) = config.validate() {
        error!("configuration error: {e}");
        return ExitCode::FAILURE;
    }

    let client = match PscClient::new(PscConfig::new()) {
        Ok(client) => client,
        Err(e) => {
            error!("failed to build HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        pairs = config.pairs.len(),
        days = config.days,
        start = %config.start.format("%d.%m.%Y %H:%M"),
        "starting collection run"
    );

    let collector = Collector::new(client, config);
    let mut out = io::stdout().lock();
    let mut rng = rand::thread_rng();

    match collector.run(&mut out, &SystemClock, &TokioPacer, &mut rng).await {
        Ok(written) => {
            info!(records = written, "run complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("run aborted: {e}");
            ExitCode::FAILURE
        }
    }
}
