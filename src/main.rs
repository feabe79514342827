use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use ordersum::config::Config;
use ordersum::server::{self, AppState};
use ordersum::sink::SinkFactory;
use ordersum::sources::HttpSource;

/// Aggregate companies, products and sales orders into a summary service
#[derive(Parser)]
#[command(name = "ordersum")]
#[command(about = "Serves a per-company sales summary assembled from three upstream sources")]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,

    /// Port for the HTTP server
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(cli.verbose >= 2)
        .init();

    let config = Config::from_env().context("loading configuration")?;
    debug!("source configuration: {:?}", config.sources);

    // The sink must be usable before we accept any traffic; a missing or
    // broken storage configuration aborts startup.
    let sink = SinkFactory::from_config(&config.sink)
        .await
        .context("initializing summary sink")?;

    let source = Arc::new(HttpSource::new(config.sources)?);

    let state = AppState { source, sink };
    let app = server::router(state);

    let addr = format!("{}:{}", cli.bind, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("ordersum listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutdown complete");
    Ok(())
}

/// Resolve when SIGINT (or SIGTERM on unix) is received
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to register SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = sigterm.recv() => {},
        }
    }
    #[cfg(not(unix))]
    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for ctrl+c");

    info!("received shutdown signal, draining");
}
