//! Route registration — module routes plus system endpoints.

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

/// Build the complete router from the modules' routes.
pub fn build_router(module_routes: Vec<(&str, Router)>) -> Router {
    let mut app = Router::new()
        .route("/health", get(health))
        .route("/version", get(version));

    // Module routes carry their own state and path prefixes.
    for (name, router) in module_routes {
        tracing::info!(module = name, "mounting module routes");
        app = app.merge(router);
    }

    app
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

async fn version() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
