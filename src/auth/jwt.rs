//! JWT Token Service
//!
//! Issues bearer tokens for a subject and turns them back into validated claims.
//! Expiry is carried in the `expires` claim and checked here rather than by
//! `jsonwebtoken`'s registered `exp` handling.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::models::TokenResponse;
use crate::config::JwtConfig;

/// Lifetime of an access token in seconds
pub const TOKEN_TTL_SECS: i64 = 600;

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// Subject the token was issued for (the user's email)
    pub user_id: String,
    /// Expiry as unix seconds
    pub expires: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,
    #[error("invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),
    #[error("failed to encode token: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),
}

/// JWT Service for token operations
#[derive(Clone)]
pub struct JwtService {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    /// Create a new JWT service with the provided secret and algorithm
    pub fn new(secret: &str, algorithm: Algorithm) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(algorithm);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        Self {
            algorithm,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(&config.secret, config.algorithm)
    }

    /// Issue an access token for `subject`, valid for [`TOKEN_TTL_SECS`].
    pub fn encode(&self, subject: &str) -> Result<TokenResponse, TokenError> {
        let claims = Claims {
            user_id: subject.to_string(),
            expires: Utc::now().timestamp() + TOKEN_TTL_SECS,
        };
        let access_token = self.sign(&claims)?;
        Ok(TokenResponse { access_token })
    }

    /// Verify signature and algorithm, then reject tokens whose `expires` is in the past.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(TokenError::Invalid)?;

        if data.claims.expires >= Utc::now().timestamp() {
            Ok(data.claims)
        } else {
            Err(TokenError::Expired)
        }
    }

    pub(crate) fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(self.algorithm), claims, &self.encoding_key)
            .map_err(TokenError::Encode)
    }
}
