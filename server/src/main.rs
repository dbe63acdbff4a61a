//! GWS Server - Main Entry Point
//!
//! Binds the webhook receiver and logs every delivered event to stdout.

use anyhow::Result;
use tracing::{info, warn};

use gws_server::{api, config, subscriber, webhooks::Dispatcher};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gws_server=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env()?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting GWS Server");

    if config.has_secret() {
        info!("Webhook signature verification enabled");
    } else {
        warn!("WEBHOOK_SECRET is empty; accepting unsigned webhooks");
    }

    let (dispatcher, streams) = Dispatcher::new(config.webhook_secret.as_bytes());
    info!(
        events = ?dispatcher.known_events().collect::<Vec<_>>(),
        "Typed delivery channels ready"
    );

    let consumer = tokio::spawn(subscriber::run(streams));

    let app = api::create_router(dispatcher, &config);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(address = %config.bind_address, "Server listening");

    // Graceful shutdown handler
    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
        info!("Received shutdown signal, cleaning up...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    // The router owned the last dispatcher handle, so every channel is closed
    // and the subscriber finishes once it has drained them.
    let consumed = consumer.await?;
    info!(consumed, "Server shutdown complete");

    Ok(())
}
