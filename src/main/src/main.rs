use anyhow::Result;
use log::*;

mod config;
mod email;
mod error;
mod http;
mod ports;
mod protection;
mod scheduler;
mod sprinkler;
mod weather;

use config::Config;
use control::FrostStateMachine;
use email::EmailRelay;
use http::HttpClient;
use ports::SystemClock;
use protection::FrostProtection;
use scheduler::Scheduler;
use sprinkler::OpenSprinkler;
use weather::WeatherLink;

fn main() -> Result<()> {
    // Also picks up records from the `log` macros; filter with RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::read()?;
    info!(
        "Protecting at or below {}, stopping at or above {}, polling every {:?}",
        config.thresholds.activate_below(),
        config.thresholds.deactivate_at_or_above(),
        config.poll_interval
    );

    let http = HttpClient::new(config.http_timeout)?;
    let endpoints = config.endpoints;

    let mut protection = FrostProtection::new(
        FrostStateMachine::new(config.thresholds),
        WeatherLink::new(http.clone(), endpoints.weatherlink),
        OpenSprinkler::new(http.clone(), endpoints.opensprinkler),
        EmailRelay::new(http, endpoints.email, endpoints.email_key),
        SystemClock,
    );

    let mut scheduler = Scheduler::new(config.poll_interval);
    scheduler.run(|| protection.run_cycle())
}
