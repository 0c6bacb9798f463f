/**
 * formauth Server Entry Point
 *
 * Loads configuration, initializes tracing and serves the app until Ctrl-C.
 */

use formauth::backend::server::{config::ServerConfig, create_app, StartupError};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[STARTUP] Server initialization started");

    let config = ServerConfig::load()?;
    let app = create_app(&config).await?;

    let listener = tokio::net::TcpListener::bind((config.bind_address.as_str(), config.port)).await?;
    tracing::info!("[STARTUP] Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections");
}
