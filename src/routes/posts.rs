//! Blog post routes. Reads are public; creating a post needs a bearer token.

use axum::{
    Json, Router,
    extract::{Path, State},
    middleware,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::auth::{jwt::JwtService, middleware::AuthMiddleware, models::ErrorMessage};
use crate::database::NewPost;
use crate::server::AppState;

const POST_NOT_FOUND: &str = "Post not found";

/// `GET /posts`
pub async fn list_posts(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "data": state.posts.list() }))
}

/// `GET /posts/{id}`
///
/// Unknown ids get a `{"error": "Post not found"}` body with a 200 status.
pub async fn get_post(State(state): State<AppState>, Path(id): Path<u64>) -> Json<Value> {
    let found = if id > state.posts.count() as u64 {
        None
    } else {
        state.posts.get(id)
    };

    match found {
        Some(post) => Json(json!({ "data": post })),
        None => {
            tracing::debug!("Post {} not found", id);
            Json(json!(ErrorMessage::new(POST_NOT_FOUND)))
        }
    }
}

/// `POST /posts`, behind [`AuthMiddleware::validate_token`].
pub async fn create_post(State(state): State<AppState>, Json(post): Json<NewPost>) -> Json<Value> {
    let post = state.posts.add(post);
    tracing::info!("Post {} added", post.id);
    Json(json!({ "data": "post added" }))
}

pub fn create_routes(jwt_service: Arc<JwtService>) -> Router<AppState> {
    let protected = post(create_post).route_layer(middleware::from_fn_with_state(
        jwt_service,
        AuthMiddleware::validate_token,
    ));

    Router::new()
        .route("/posts", get(list_posts).merge(protected))
        .route("/posts/{id}", get(get_post))
}
