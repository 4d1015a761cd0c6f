//! Binary crate for the weather lookup HTTP service.
//!
//! This crate focuses on:
//! - Process bootstrap (env loading, logging, CLI)
//! - Route wiring and HTTP translation of core results

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use weather_core::provider::rapidapi::RapidApiProvider;
use weather_core::{Config, WeatherService};

mod server;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather lookup HTTP service")]
struct Cli {
    /// Address to listen on; overrides the WEATHER_BIND environment variable.
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_server=info,weather_core=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }

    let provider = RapidApiProvider::new(config.api_key.clone());
    let service = WeatherService::new(Arc::new(provider));
    let app = server::router(server::AppState::new(service));

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("listening on {}", config.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
