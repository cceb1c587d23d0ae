//! Channel browsing handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::{AppError, AppResult};
use crate::models::Channel;
use crate::web::AppState;

/// List every channel in the store
pub async fn list_channels(State(state): State<AppState>) -> Json<Vec<Channel>> {
    Json(state.channels.list().await)
}

/// Look up a channel by name, ignoring case
pub async fn get_channel(
    State(state): State<AppState>,
    Path(channel_name): Path<String>,
) -> AppResult<Json<Channel>> {
    state
        .channels
        .find_by_name(&channel_name)
        .await
        .map(Json)
        .ok_or_else(|| AppError::not_found("Channel", channel_name))
}

/// Distinct channel categories
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.channels.categories().await)
}
