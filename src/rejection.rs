//! Per-request failure type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// An internal per-request failure, rendered as a plain-text 500
///
/// The detail is logged, not sent: clients get a generic error body. The
/// failure stays contained to its request and never terminates the process.
#[derive(Debug)]
pub struct InternalError(String);

impl<T: Into<String>> From<T> for InternalError {
    fn from(val: T) -> Self {
        Self(val.into())
    }
}

impl IntoResponse for InternalError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
    }
}

impl std::fmt::Display for InternalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for InternalError {}
