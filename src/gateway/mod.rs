//! HTTP gateway (Axum) for the rating service.
//!
//! Routes: `GET /health`, `GET /` (static form page), `POST /predict`.
//! This module is primarily used by the `stargrade` server binary.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    response::Html,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use handler::predict_handler;
pub use state::AppState;

use crate::pipeline::{Classifier, Encoder};

/// Static form page served at `/`.
const INDEX_HTML: &str = include_str!("index.html");

pub fn create_router_with_state<E, C>(state: AppState<E, C>) -> Router
where
    E: Encoder + Send + Sync + 'static,
    C: Classifier + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_handler))
        .route("/", get(index_handler))
        .route("/predict", post(predict_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
