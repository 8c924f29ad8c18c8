//! Application route configuration.

use std::path::Path;

use axum::Router;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{expense_routes, health_routes};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::SPA_INDEX_FILE;

/// Create the application router with all routes configured.
///
/// Requests matching no API route are served from `static_dir`; paths
/// with no file there get `index.html` so client-side routes resolve.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        // Health check
        .nest("/health", health_routes())
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Expense API
        .nest("/api/expenses", expense_routes())
        // Browser client
        .fallback_service(client_assets(static_dir))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Static files of the built client with the SPA index as fallback.
fn client_assets(static_dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join(SPA_INDEX_FILE)))
}
