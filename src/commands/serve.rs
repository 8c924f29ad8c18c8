//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::{Config, EXPENSES_TABLE, SPA_INDEX_FILE};
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: Config) -> AppResult<()> {
    if let Some(host) = args.host {
        config.server_host = host;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }
    if let Some(static_dir) = args.static_dir {
        config.static_dir = static_dir;
    }

    tracing::info!("Starting server...");

    // Initialize database
    let db = Arc::new(
        Database::connect(&config.database_url)
            .await
            .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?,
    );

    match db.has_table(EXPENSES_TABLE).await {
        Ok(true) => tracing::info!("'{}' table found in the database", EXPENSES_TABLE),
        Ok(false) => tracing::warn!("'{}' table not found after migrations", EXPENSES_TABLE),
        Err(e) => tracing::error!("Could not verify '{}' table: {}", EXPENSES_TABLE, e),
    }

    if !config.static_dir.join(SPA_INDEX_FILE).is_file() {
        tracing::warn!(
            "No client build at {}; only the API will respond",
            config.static_dir.display()
        );
    }

    let app_state = AppState::from_config(db.clone(), &config);
    let app = create_router(app_state, &config.static_dir);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);
    tracing::info!("Serving client files from {}", config.static_dir.display());
    tracing::info!("Date policy: {}", config.date_policy);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    db.close().await?;
    tracing::info!("Database closed, server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal, stopping server...");
}
