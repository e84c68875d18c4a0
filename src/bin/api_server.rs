// src/bin/api_server.rs

use anyhow::Context;
use product_crud_api::infra::logging;
use product_crud_api::transport;
use product_crud_api::{AppConfig, PgProductStore};
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "Server stopped with an error");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    // --- Storage Initialization ---
    // The listener is only bound once the database is reachable.
    tracing::info!("Connecting to the database...");
    let store = PgProductStore::connect(&config.database_url)
        .await
        .context("Database connection failed")?;
    tracing::info!("Connected to the database");

    // --- API Server Initialization ---
    let app_state = transport::http::AppState::new(Arc::new(store));
    let app = transport::http::build_app(app_state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server is running on http://localhost:{}", config.port);
    tracing::info!("Swagger UI available at http://localhost:{}/swagger-ui", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received (Ctrl+C)");
}
