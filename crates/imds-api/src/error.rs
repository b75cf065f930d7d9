use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::render::error_reply;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "failed to build response");
        error_reply(StatusCode::INTERNAL_SERVER_ERROR, &self.to_string())
    }
}
