//! Binary entry point for the wmcp-weather MCP server.

use anyhow::Context;
use clap::Parser;
use rmcp::ServiceExt;
use wmcp_weather::WeatherServer;

/// Walrus MCP Weather Server — provides mock Shanghai weather.
#[derive(Parser)]
#[command(name = "wmcp-weather", version, about)]
struct Cli {}

/// Resolve once Ctrl-C or, on Unix, SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

async fn run() -> anyhow::Result<()> {
    let server = WeatherServer::new();
    let transport = rmcp::transport::stdio();
    let service = server
        .serve(transport)
        .await
        .context("failed to start server")?;
    tracing::info!("wmcp-weather listening on stdio");

    let cancel = service.cancellation_token();
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("shutdown requested, closing transport");
        cancel.cancel();
    });

    let reason = service.waiting().await.context("server error")?;
    tracing::info!(?reason, "server stopped");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }
    run().await.inspect_err(|e| tracing::error!("fatal: {e:#}"))
}
