//! Error-to-HTTP response conversion.
//!
//! Implements `IntoResponse` for [`cutlist_core::Error`] so that route
//! handlers can return `Result<T, AppError>` directly.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Wrapper so we can implement `IntoResponse` for an external type.
pub struct AppError {
    inner: cutlist_core::Error,
    public_message: Option<String>,
}

impl AppError {
    pub fn new(inner: cutlist_core::Error) -> Self {
        Self {
            inner,
            public_message: None,
        }
    }

    /// Replace the message shown to clients. The underlying error is still
    /// logged for server errors.
    pub fn with_public_message(mut self, message: impl Into<String>) -> Self {
        self.public_message = Some(message.into());
        self
    }

    fn message(&self) -> String {
        match (&self.public_message, &self.inner) {
            (Some(message), _) => message.clone(),
            (None, cutlist_core::Error::Validation(message)) => message.clone(),
            (None, other) => other.to_string(),
        }
    }
}

impl From<cutlist_core::Error> for AppError {
    fn from(e: cutlist_core::Error) -> Self {
        Self::new(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.inner.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                status = %status,
                error = %self.inner,
                "Server error in API handler"
            );
        }

        let body = json!({
            "error": self.message(),
            "code": self.inner.code(),
        });

        (status, axum::Json(body)).into_response()
    }
}
