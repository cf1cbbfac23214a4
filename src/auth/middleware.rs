//! Authentication Middleware
//!
//! Axum middleware that gates protected routes on a valid bearer token.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::auth::jwt::JwtService;
use crate::error::ApiError;

const BEARER_SCHEME: &str = "Bearer";

/// Authentication middleware for bearer tokens
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// Reject the request unless it carries a valid, unexpired bearer token.
    ///
    /// Claims are not forwarded to the handler.
    pub async fn validate_token(
        State(jwt_service): State<Arc<JwtService>>,
        req: Request,
        next: Next,
    ) -> Result<Response, ApiError> {
        let token = match extract_bearer(req.headers()) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("[AuthMiddleware] {} {} denied: {}", req.method(), req.uri(), e);
                return Err(e);
            }
        };

        match jwt_service.decode(token) {
            Ok(claims) => {
                tracing::debug!("[AuthMiddleware] token accepted for {}", claims.user_id);
            }
            Err(e) => {
                tracing::warn!("[AuthMiddleware] {} {} denied: {}", req.method(), req.uri(), e);
                return Err(ApiError::InvalidOrExpiredToken);
            }
        }

        Ok(next.run(req).await)
    }
}

/// Pull the token out of `Authorization: Bearer <token>`.
///
/// The header must split on whitespace into exactly the scheme and one token.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, ApiError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(ApiError::InvalidScheme)?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(BEARER_SCHEME), Some(token), None) => Ok(token),
        _ => Err(ApiError::InvalidScheme),
    }
}
