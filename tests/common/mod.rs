#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use learnhub::router::init_router;
use learnhub::state::AppState;
use learnhub_auth::testutil::{InMemoryUserLookup, test_jwt_config};
use learnhub_auth::{Role, UserLookup, UserRecord, create_access_token};
use learnhub_config::CorsConfig;
use tower::ServiceExt;
use uuid::Uuid;

pub fn test_user(role: Role) -> UserRecord {
    UserRecord {
        id: Uuid::new_v4(),
        email: format!("{}@example.com", role.as_str().to_lowercase()),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        role,
        is_active: true,
    }
}

pub fn inactive_user(role: Role) -> UserRecord {
    UserRecord {
        is_active: false,
        ..test_user(role)
    }
}

/// Builds the full router over the given lookup.
pub fn setup_test_app(users: Arc<dyn UserLookup>) -> Router {
    let state = AppState::new(
        test_jwt_config(),
        CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        users,
    );
    init_router(state, None)
}

pub fn setup_app_with_users(users: impl IntoIterator<Item = UserRecord>) -> Router {
    setup_test_app(Arc::new(InMemoryUserLookup::new(users)))
}

pub fn access_token_for(user: &UserRecord) -> String {
    create_access_token(user.id, &user.email, user.role, &test_jwt_config()).unwrap()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Sends a GET and returns the status and JSON body.
pub async fn get_json(
    app: Router,
    uri: &str,
    authorization: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut request = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        request = request.header(header::AUTHORIZATION, value);
    }

    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, body)
}

pub fn error_body(message: &str) -> serde_json::Value {
    serde_json::json!({ "status": "error", "message": message })
}
