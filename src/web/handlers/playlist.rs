//! Playlist download and upload handlers

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{info, warn};

use crate::errors::{AppError, AppResult, WebError};
use crate::models::Channel;
use crate::parser::parse_playlist;
use crate::proxy::generate_m3u;
use crate::web::{responses::UploadResponse, AppState};

const UPLOAD_FIELD: &str = "file";

/// The stored channels as an M3U playlist
pub async fn get_playlist(State(state): State<AppState>) -> impl IntoResponse {
    let channels = state.channels.list().await;
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        generate_m3u(&channels),
    )
}

fn multipart_error(err: MultipartError, max_size: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        WebError::PayloadTooLarge { max_size }.into()
    } else {
        WebError::from(err).into()
    }
}

/// Pull the uploaded playlist out of the multipart body as text
async fn read_upload(multipart: &mut Multipart, max_size: usize) -> AppResult<String> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_size))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        if file_name.is_empty() {
            return Err(WebError::invalid_request(UPLOAD_FIELD, "No file selected").into());
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, max_size))?;
        info!("Received playlist upload '{}' ({} bytes)", file_name, bytes.len());
        return Ok(String::from_utf8(bytes.to_vec())?);
    }

    Err(WebError::invalid_request(UPLOAD_FIELD, "No file uploaded").into())
}

/// Replace the channel store with the channels of an uploaded playlist
pub async fn upload_playlist(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse<Vec<Channel>>>> {
    let content = read_upload(&mut multipart, state.config.web.max_upload_bytes)
        .await
        .inspect_err(|e| warn!("Rejected playlist upload: {}", e))?;

    let channels =
        parse_playlist(&content).inspect_err(|e| warn!("Rejected playlist upload: {}", e))?;
    state.channels.replace_all(channels.clone()).await;

    Ok(Json(UploadResponse {
        success: true,
        channels,
    }))
}
