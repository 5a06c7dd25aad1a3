// src/presentation/http/routes.rs
use crate::presentation::http::controllers::index;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

/// Path of the `index` route serving both the listing and submissions.
pub const INDEX_PATH: &str = "/";

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route(INDEX_PATH, get(index::index).post(index::submit_comment))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
