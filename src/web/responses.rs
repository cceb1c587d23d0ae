//! HTTP response types and utilities
//!
//! Errors leave the API as `{"error": "<message>"}` with a status code chosen
//! from the [`AppError`] variant; the browser front end reads only the message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use crate::errors::{AppError, WebError};

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of a successful playlist upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse<T> {
    pub success: bool,
    pub channels: T,
}

/// Convert AppError to appropriate HTTP response
pub fn handle_error(error: AppError) -> Response {
    let (status, message) = match &error {
        AppError::Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),
        AppError::NotFound { resource, .. } => {
            (StatusCode::NOT_FOUND, format!("{} not found", resource))
        }
        AppError::Decode(e) => (
            StatusCode::BAD_REQUEST,
            format!("Playlist is not valid UTF-8: {}", e),
        ),
        AppError::Web(web_error) => match web_error {
            WebError::InvalidRequest { message, .. } => (StatusCode::BAD_REQUEST, message.clone()),
            WebError::Multipart { message } => (StatusCode::BAD_REQUEST, message.clone()),
            WebError::PayloadTooLarge { .. } => {
                (StatusCode::PAYLOAD_TOO_LARGE, web_error.to_string())
            }
        },
    };

    (status, Json(ErrorResponse { error: message })).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        handle_error(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            handle_error(AppError::validation("bad")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            handle_error(AppError::not_found("Channel", "x")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            handle_error(WebError::PayloadTooLarge { max_size: 10 }.into()).status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            handle_error(WebError::multipart("truncated body").into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let response = handle_error(AppError::not_found("Channel", "missing"));
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "Channel not found");
    }
}
