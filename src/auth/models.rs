//! Authentication Models
//!
//! Request and response payloads for signup and login.

use serde::{Deserialize, Serialize};

use crate::database::models::User;
use crate::error::ApiError;

/// Signup request payload
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    #[serde(alias = "fullName")]
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_email(&self.email)
    }
}

impl From<SignupRequest> for User {
    fn from(req: SignupRequest) -> Self {
        Self {
            full_name: req.full_name,
            email: req.email,
            password: req.password,
        }
    }
}

/// Login request payload
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_email(&self.email)
    }
}

/// Token response after signup or login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Soft failure body returned with a 200 status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorMessage {
    pub error: String,
}

impl ErrorMessage {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Loose shape check: `local@domain.tld`, no whitespace.
fn validate_email(email: &str) -> Result<(), ApiError> {
    let invalid = || ApiError::Validation(format!("'{email}' is not a valid email address"));

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    let well_formed = !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'));

    if well_formed { Ok(()) } else { Err(invalid()) }
}
