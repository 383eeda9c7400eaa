use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Every failure a handler can produce. Translated to HTTP exactly once,
/// in the `IntoResponse` impl below.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required parameter is missing or blank.
    #[error("{0}")]
    InvalidRequest(&'static str),

    /// lat/lon did not parse as floats, or fell outside valid ranges.
    #[error("Invalid coordinates")]
    InvalidCoordinates,

    /// The upstream API answered with a non-success status. Surfaced to
    /// the caller with that same status and a fixed message.
    #[error("{message}")]
    Upstream {
        status: StatusCode,
        message: &'static str,
    },

    /// Anything else: network failure, timeout, body decode failure.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Unexpected(err.into())
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::InvalidCoordinates => StatusCode::BAD_REQUEST,
            Self::Upstream { status, .. } => *status,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
