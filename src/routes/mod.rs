use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::with_request_span;

pub mod activity;
pub mod admin;
pub mod auth;
pub mod extract;
pub mod recommendations;
pub mod summarize;

mod state;

pub use state::AppState;

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/login", post(auth::login))
        .route("/recommend", post(recommendations::recommend))
        .route("/complete", post(activity::complete))
        .route("/summary", get(activity::summary))
        .route("/next-topic", get(activity::next_topic))
        .route("/summarize", post(summarize::summarize))
        .route("/admin/popular", get(admin::popular))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(with_request_span))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
