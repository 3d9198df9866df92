//! API error type mapping to HTTP status codes.
//!
//! Every variant renders as a plain-text body with a fixed message; the
//! underlying cause is logged at the failure site, never echoed to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller's role does not satisfy the route's requirement.
    #[error("Unauthorized")]
    Forbidden,
    /// A referenced company or user failed the existence check.
    #[error("Invalid company or user")]
    InvalidReference,
    /// Database or task failure. Carries the route's fixed public message.
    #[error("{0}")]
    Internal(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::InvalidReference => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
