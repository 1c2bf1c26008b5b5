use std::time::Duration;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::domain::errors::GenerationError;

/// HTTP-facing wrapper pairing a classified generation failure with the
/// elapsed wall-clock time of the attempt.
///
/// Every failure body carries the duration alongside the fields specific to
/// its class; nothing here can crash the process.
#[derive(Debug)]
pub struct ApiError {
    error: GenerationError,
    elapsed: Duration,
}

impl ApiError {
    pub fn new(error: GenerationError, elapsed: Duration) -> Self {
        Self { error, elapsed }
    }

    fn status(&self) -> StatusCode {
        match self.error {
            GenerationError::InvalidInput => StatusCode::BAD_REQUEST,
            GenerationError::UpstreamRejected { .. }
            | GenerationError::UnexpectedContentType { .. }
            | GenerationError::TransportFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let duration = format_duration(self.elapsed);
        let body = match &self.error {
            GenerationError::UpstreamRejected { body_snippet, .. } => json!({
                "error": self.error.to_string(),
                "response": body_snippet,
                "duration": duration,
            }),
            GenerationError::UnexpectedContentType { content_type } => json!({
                "error": self.error.to_string(),
                "content_type": content_type,
                "duration": duration,
            }),
            GenerationError::InvalidInput | GenerationError::TransportFailure { .. } => json!({
                "error": self.error.to_string(),
                "duration": duration,
            }),
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Seconds with two decimals, e.g. `"1.27s"`.
pub fn format_duration(elapsed: Duration) -> String {
    format!("{:.2}s", elapsed.as_secs_f64())
}
