//! Error type definitions for the IPTV server
//!
//! A small hierarchical error system: [`AppError`] is what services and
//! handlers return, [`WebError`] carries request-shape problems raised by the
//! HTTP layer before any domain logic runs.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Input validation errors, including "no valid channels" after parsing
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Resource not found errors
    #[error("Not found: {resource} with id {id}")]
    NotFound { resource: String, id: String },

    /// Uploaded bytes were not valid UTF-8
    #[error("Decode error: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// Web layer errors
    #[error("Web error: {0}")]
    Web(#[from] WebError),
}

/// Web layer specific errors
#[derive(Error, Debug)]
pub enum WebError {
    /// Invalid request format
    #[error("Invalid request: {field} - {message}")]
    InvalidRequest { field: String, message: String },

    /// Multipart body could not be read
    #[error("Multipart error: {message}")]
    Multipart { message: String },

    /// Request payload exceeded the configured body limit
    #[error("Payload too large (max: {max_size} bytes)")]
    PayloadTooLarge { max_size: usize },
}

impl AppError {
    /// Create a validation error with a custom message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not found error for a specific resource
    pub fn not_found<R: Into<String>, I: Into<String>>(resource: R, id: I) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }
}

impl WebError {
    /// Create an invalid request error
    pub fn invalid_request<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::InvalidRequest {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a multipart error
    pub fn multipart<M: Into<String>>(message: M) -> Self {
        Self::Multipart {
            message: message.into(),
        }
    }
}

impl From<axum::extract::multipart::MultipartError> for WebError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        Self::multipart(err.body_text())
    }
}
