//! # Blog API
//!
//! Minimal blog HTTP API built with Axum and Tokio: public post listing,
//! signup/login that issue short-lived JWT access tokens, and a post-creation
//! endpoint protected by bearer authentication.
//!
//! ## Architecture
//! - `server`: application state, router assembly and serving
//! - `config`: environment variable configuration
//! - `auth`: token issuance/validation and the bearer middleware
//! - `database`: in-memory user and post stores
//! - `routes`: HTTP handlers grouped by API area
//!
//! ## Environment Setup
//! `SECRET` and `ALGORITHM` (HS256, HS384 or HS512) are required and may be
//! placed in a `.env` file:
//! ```bash
//! SECRET=change-me
//! ALGORITHM=HS256
//! ```
//!
//! ## Running the Server
//! ```bash
//! cargo run
//! ```
//!
//! The server listens on `http://0.0.0.0:8000` unless `SERVER_HOST`/`PORT` say otherwise.

mod auth;
mod config;
mod database;
mod error;
mod routes;
mod server;

use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();

    tracing::info!("🏁 Starting Blog API...");
    tracing::info!("📦 Package: {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    // Signing configuration is mandatory; refuse to start without it.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = server::start(config).await {
        tracing::error!("Server stopped: {:#}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
