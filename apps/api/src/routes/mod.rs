pub mod health;

use axum::{http::Uri, routing::get, Router};

use crate::contributions::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Contribution heatmap
        .route(
            "/api/contributions",
            get(handlers::handle_get_contributions),
        )
        .route(
            "/api/contributions/summary",
            get(handlers::handle_get_summary),
        )
        .route("/api/contributions/grid", get(handlers::handle_get_grid))
        .route(
            "/api/contributions/overview",
            get(handlers::handle_get_overview),
        )
        .route(
            "/api/contributions/levels",
            get(handlers::handle_get_levels),
        )
        .fallback(not_found)
        .with_state(state)
}
