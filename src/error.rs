//! API error type and its HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::auth::jwt::TokenError;
use crate::auth::models::ErrorMessage;

#[derive(Debug, Error)]
pub enum ApiError {
    /// No `Authorization` header, a scheme other than `Bearer`, or no token segment.
    #[error("Invalid authentication scheme.")]
    InvalidScheme,
    #[error("Invalid token or expired token.")]
    InvalidOrExpiredToken,
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Token(#[from] TokenError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidScheme | Self::InvalidOrExpiredToken => StatusCode::FORBIDDEN,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            Self::Token(e) => {
                tracing::error!("Token issuance failed: {}", e);
                "internal error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorMessage::new(message))).into_response()
    }
}
