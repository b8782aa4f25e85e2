//! Request errors and their HTTP mapping.

use crate::Envelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("per_page must be at least 1, got {0}")]
    InvalidPerPage(i64),

    #[error("no award with number {0:?}")]
    AwardNotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidPerPage(_) => StatusCode::BAD_REQUEST,
            ApiError::AwardNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "request rejected");
        let body = Envelope {
            success: false,
            data: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
