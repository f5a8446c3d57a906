//! Mapping of domain errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::ChatError;

/// Handler error that renders as `{"error": {"code", "message"}}`.
#[derive(Debug)]
pub enum ApiError {
    /// Error raised by the chat domain
    Chat(ChatError),
    /// Malformed request (e.g. unparsable JSON body or path)
    BadRequest(String),
}

impl From<ChatError> for ApiError {
    fn from(e: ChatError) -> Self {
        ApiError::Chat(e)
    }
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Chat(ChatError::Validation(_)) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::Chat(ChatError::NotFound(_)) => (StatusCode::NOT_FOUND, "CHAT_NOT_FOUND"),
            ApiError::Chat(ChatError::EmptyChat(_)) => (StatusCode::NOT_FOUND, "EMPTY_CHAT"),
            ApiError::Chat(ChatError::Storage(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR")
            }
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = match &self {
            ApiError::Chat(e) => e.to_string(),
            ApiError::BadRequest(msg) => msg.clone(),
        };

        if status.is_server_error() {
            tracing::error!("{}: {}", code, message);
        } else {
            tracing::warn!("{}: {}", code, message);
        }

        let body = json!({
            "error": {
                "code": code,
                "message": message,
            }
        });
        (status, Json(body)).into_response()
    }
}
