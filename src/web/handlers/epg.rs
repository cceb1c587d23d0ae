//! Programme guide handlers

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Local;

use crate::epg::{generate_epg, programs_for_channel};
use crate::models::{EpgData, EpgProgram};
use crate::web::AppState;

/// Guide data for every channel in the store
pub async fn get_epg(State(state): State<AppState>) -> Json<EpgData> {
    let channels = state.channels.list().await;
    let today = Local::now().date_naive();
    Json(generate_epg(&channels, today, state.config.epg.days))
}

/// Guide data for one EPG id; an unknown id yields an empty list
pub async fn get_channel_epg(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
) -> Json<Vec<EpgProgram>> {
    let channels = state.channels.list().await;
    let today = Local::now().date_naive();
    Json(programs_for_channel(
        &channels,
        &channel_id,
        today,
        state.config.epg.days,
    ))
}
