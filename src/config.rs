//! Configuration module for environment variables and application settings

use std::env;
use std::str::FromStr;

use jsonwebtoken::Algorithm;
use thiserror::Error;

/// Errors raised while loading configuration. Any of these aborts startup.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
    #[error("ALGORITHM must be one of HS256, HS384, HS512 (got {0})")]
    UnsupportedAlgorithm(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Token signing configuration
    pub jwt: JwtConfig,

    /// Server configuration
    pub server: ServerConfig,

    /// How the user directory matches login credentials
    pub credential_scan: CredentialScan,

    /// Allowed CORS origins; `None` allows any origin
    pub cors_origins: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Credential matching policy for [`crate::database::users::UserDirectory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialScan {
    /// Scan every registered user.
    #[default]
    Full,
    /// Give up after the first registered user. Only that user can log in.
    FirstRecordOnly,
}

impl FromStr for CredentialScan {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "first-record" | "first_record" => Ok(Self::FirstRecordOnly),
            _ => Err(()),
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("SECRET"))?;

        let algorithm_raw = lookup("ALGORITHM").ok_or(ConfigError::Missing("ALGORITHM"))?;
        let algorithm = parse_hmac_algorithm(&algorithm_raw)?;

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            None => 8000,
        };

        let credential_scan = match lookup("CREDENTIAL_SCAN") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "CREDENTIAL_SCAN",
                value: raw,
            })?,
            None => CredentialScan::default(),
        };

        let cors_origins = lookup("CORS_ORIGINS").map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        });

        Ok(Self {
            jwt: JwtConfig { secret, algorithm },
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port,
            },
            credential_scan,
            cors_origins,
        })
    }
}

/// Only shared-secret algorithms make sense with a single `SECRET`.
fn parse_hmac_algorithm(raw: &str) -> Result<Algorithm, ConfigError> {
    match Algorithm::from_str(raw.trim()) {
        Ok(alg @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)) => Ok(alg),
        _ => Err(ConfigError::UnsupportedAlgorithm(raw.to_string())),
    }
}
