//! # Server Module
//!
//! HTTP server setup and route configuration for the blog API.

use anyhow::{Context, Result};
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::auth::jwt::JwtService;
use crate::config::{Config, CredentialScan};
use crate::database::{InMemoryPostRepository, PostRepository, UserDirectory, UserRepository};
use crate::routes;

/// Application state shared across all route handlers
#[derive(Clone)]
pub struct AppState {
    pub jwt_service: Arc<JwtService>,
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Fresh in-memory state: no users, one seeded post.
    pub fn in_memory(jwt_service: JwtService, scan: CredentialScan) -> Self {
        Self {
            jwt_service: Arc::new(jwt_service),
            users: Arc::new(UserDirectory::new(scan)),
            posts: Arc::new(InMemoryPostRepository::seeded()),
        }
    }
}

/// Assemble every route on top of `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::create_routes())
        .merge(routes::posts::create_routes(state.jwt_service.clone()))
        .merge(routes::user::create_routes())
        .with_state(state)
}

fn cors_layer(origins: Option<&[String]>) -> Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    Ok(match origins {
        Some(origins) => {
            let origins = origins
                .iter()
                .map(|o| o.parse::<HeaderValue>().with_context(|| format!("Invalid CORS origin: {o}")))
                .collect::<Result<Vec<_>>>()?;
            cors.allow_origin(AllowOrigin::list(origins))
        }
        None => cors.allow_origin(Any),
    })
}

/// Starts the blog HTTP server and serves until the process is stopped.
pub async fn start(config: Config) -> Result<()> {
    let jwt_service = JwtService::from_config(&config.jwt);
    let state = AppState::in_memory(jwt_service, config.credential_scan);

    let app = build_router(state).layer(cors_layer(config.cors_origins.as_deref())?);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr} - port may already be in use"))?;

    tracing::info!("📡 Listening on http://{}", addr);
    tracing::info!("🔐 Token algorithm: {:?}", config.jwt.algorithm);
    tracing::info!("👥 Credential scan: {:?}", config.credential_scan);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
