//! Health check HTTP handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::web::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub channels: usize,
    pub version: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        channels: state.channels.len().await,
        version: env!("CARGO_PKG_VERSION"),
    })
}
