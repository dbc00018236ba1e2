//! HTTP API routes

mod generate;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub fn create_router(state: AppState, cors_enabled: bool) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route("/api/voices", get(generate::voices))
        .route("/api/generate", post(generate::generate))
        .layer(TraceLayer::new_for_http());

    if cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    router.with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
