//! User routes for signup and login

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
};

use crate::auth::models::{ErrorMessage, LoginRequest, SignupRequest, TokenResponse};
use crate::error::ApiError;
use crate::server::AppState;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// `POST /user/signup`: register the user and hand back a token for their email.
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    payload.validate()?;

    let email = payload.email.clone();
    state.users.add(payload.into());
    tracing::info!("User {} signed up", email);

    Ok(Json(state.jwt_service.encode(&email)?))
}

/// `POST /user/login`
///
/// Wrong credentials are a soft failure: 200 with an `error` body.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    payload.validate()?;

    if !state.users.matches(&payload.email, &payload.password) {
        tracing::info!("Login rejected for {}", payload.email);
        return Ok(Json(ErrorMessage::new(INVALID_CREDENTIALS)).into_response());
    }

    tracing::info!("User {} logged in", payload.email);
    let token = state.jwt_service.encode(&payload.email)?;
    Ok(Json(token).into_response())
}

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/user/signup", post(signup))
        .route("/user/login", post(login))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::config::CredentialScan;
    use crate::routes::test_util::{app, app_with, jwt_service, post_json};

    fn signup_body(name: &str, email: &str, password: &str) -> Value {
        json!({ "full_name": name, "email": email, "password": password })
    }

    fn login_body(email: &str, password: &str) -> Value {
        json!({ "email": email, "password": password })
    }

    fn subject_of(body: &Value) -> String {
        let token = body["access_token"].as_str().expect("access_token in body");
        jwt_service().decode(token).unwrap().user_id
    }

    #[tokio::test]
    async fn test_signup_issues_token_for_email() {
        let (status, body) =
            post_json(&app(), "/user/signup", signup_body("A", "a@x.com", "p"), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(subject_of(&body), "a@x.com");
    }

    #[tokio::test]
    async fn test_signup_then_login() {
        let app = app();
        post_json(&app, "/user/signup", signup_body("A", "a@x.com", "p"), None).await;

        let (status, body) = post_json(&app, "/user/login", login_body("a@x.com", "p"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(subject_of(&body), "a@x.com");
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_soft_error() {
        let app = app();
        post_json(&app, "/user/signup", signup_body("A", "a@x.com", "p"), None).await;

        let (status, body) =
            post_json(&app, "/user/login", login_body("a@x.com", "wrong"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "error": "Invalid email or password" }));
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let (status, body) =
            post_json(&app(), "/user/login", login_body("nobody@x.com", "p"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "error": "Invalid email or password" }));
    }

    #[tokio::test]
    async fn test_full_scan_lets_later_users_log_in() {
        let app = app_with(CredentialScan::Full);
        post_json(&app, "/user/signup", signup_body("A", "a@x.com", "p"), None).await;
        post_json(&app, "/user/signup", signup_body("B", "b@x.com", "q"), None).await;

        let (_, body) = post_json(&app, "/user/login", login_body("b@x.com", "q"), None).await;
        assert_eq!(subject_of(&body), "b@x.com");
    }

    #[tokio::test]
    async fn test_first_record_scan_only_admits_first_user() {
        let app = app_with(CredentialScan::FirstRecordOnly);
        post_json(&app, "/user/signup", signup_body("A", "a@x.com", "p"), None).await;
        post_json(&app, "/user/signup", signup_body("B", "b@x.com", "q"), None).await;

        let (_, first) = post_json(&app, "/user/login", login_body("a@x.com", "p"), None).await;
        assert_eq!(subject_of(&first), "a@x.com");

        let (status, second) =
            post_json(&app, "/user/login", login_body("b@x.com", "q"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(second, json!({ "error": "Invalid email or password" }));
    }

    #[tokio::test]
    async fn test_signup_validation() {
        let app = app();
        let (status, response) =
            post_json(&app, "/user/signup", signup_body("A", "not-an-email", "p"), None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response["error"].is_string());

        let (status, _) =
            post_json(&app, "/user/signup", json!({ "email": "a@x.com", "password": "p" }), None)
                .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_blank_name_and_password_round_trip() {
        let app = app();
        let (status, body) =
            post_json(&app, "/user/signup", signup_body("", "a@x.com", ""), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(subject_of(&body), "a@x.com");

        let (status, body) = post_json(&app, "/user/login", login_body("a@x.com", ""), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(subject_of(&body), "a@x.com");

        let (status, body) =
            post_json(&app, "/user/login", login_body("a@x.com", "p"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "error": "Invalid email or password" }));
    }

    #[tokio::test]
    async fn test_signup_token_unlocks_post_creation() {
        let app = app();
        let (_, body) =
            post_json(&app, "/user/signup", signup_body("A", "a@x.com", "p"), None).await;
        let token = body["access_token"].as_str().unwrap();

        let (status, created) = post_json(
            &app,
            "/posts",
            json!({ "title": "Mine", "content": "Hello" }),
            Some(&format!("Bearer {token}")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created, json!({ "data": "post added" }));
    }
}
