mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use chrono::Utc;
use common::{
    access_token_for, bearer, error_body, get_json, inactive_user, setup_app_with_users,
    setup_test_app, test_user,
};
use jsonwebtoken::{EncodingKey, Header, encode};
use learnhub_auth::testutil::{FailingUserLookup, InMemoryUserLookup, test_jwt_config};
use learnhub_auth::{Claims, Role, create_refresh_token};
use serde_json::json;
use uuid::Uuid;

fn expired_token_for(user: &learnhub_auth::UserRecord) -> String {
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        id: user.id,
        email: user.email.clone(),
        role: user.role,
        exp: now - 120,
        iat: now - 3720,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(test_jwt_config().secret.as_bytes()),
    )
    .unwrap()
}

fn foreign_token_for(user: &learnhub_auth::UserRecord) -> String {
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        id: user.id,
        email: user.email.clone(),
        role: user.role,
        exp: now + 3600,
        iat: now,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"some-other-service-secret-entirely"),
    )
    .unwrap()
}

#[tokio::test]
async fn test_health_is_public() {
    let app = setup_app_with_users([]);

    let (status, body) = get_json(app, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_me_returns_principal_matching_user_record() {
    let user = test_user(Role::Student);
    let token = access_token_for(&user);
    let app = setup_app_with_users([user.clone()]);

    let (status, body) = get_json(app, "/api/auth/me", Some(&bearer(&token))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": user.id,
            "email": user.email,
            "role": "STUDENT",
            "firstName": "Ada",
            "lastName": "Lovelace",
        })
    );
}

#[tokio::test]
async fn test_principal_reflects_current_user_record_not_token() {
    let user = test_user(Role::Student);
    let token = access_token_for(&user);
    let lookup = InMemoryUserLookup::new([user.clone()]);
    let app = setup_test_app(Arc::new(lookup.clone()));

    lookup.upsert(learnhub_auth::UserRecord {
        role: Role::Teacher,
        email: "promoted@example.com".to_string(),
        ..user.clone()
    });

    let (status, body) = get_json(app, "/api/auth/me", Some(&bearer(&token))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "TEACHER");
    assert_eq!(body["email"], "promoted@example.com");
}

#[tokio::test]
async fn test_me_without_header() {
    let app = setup_app_with_users([]);

    let (status, body) = get_json(app, "/api/auth/me", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, error_body("No token provided"));
}

#[tokio::test]
async fn test_me_with_non_bearer_headers() {
    for header in ["Basic dXNlcjpwYXNz", "Bearer", "Bearer    ", "Token abc", "Bearerabc"] {
        let app = setup_app_with_users([]);

        let (status, body) = get_json(app, "/api/auth/me", Some(header)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED, "header {header:?}");
        assert_eq!(body, error_body("No token provided"), "header {header:?}");
    }
}

#[tokio::test]
async fn test_me_accepts_loose_bearer_formatting() {
    let user = test_user(Role::Admin);
    let token = access_token_for(&user);
    let app = setup_app_with_users([user]);

    let header = format!("  bearer   {token}  ");
    let (status, _) = get_json(app, "/api/auth/me", Some(&header)).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_me_with_expired_token() {
    let user = test_user(Role::Student);
    let token = expired_token_for(&user);
    let app = setup_app_with_users([user]);

    let (status, body) = get_json(app, "/api/auth/me", Some(&bearer(&token))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, error_body("Token expired"));
}

#[tokio::test]
async fn test_me_with_wrong_signature() {
    let user = test_user(Role::Student);
    let token = foreign_token_for(&user);
    let app = setup_app_with_users([user]);

    let (status, body) = get_json(app, "/api/auth/me", Some(&bearer(&token))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, error_body("Invalid token"));
}

#[tokio::test]
async fn test_me_with_garbage_token() {
    let app = setup_app_with_users([]);

    let (status, body) = get_json(app, "/api/auth/me", Some("Bearer not.a.jwt")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, error_body("Invalid token"));
}

#[tokio::test]
async fn test_refresh_token_is_not_an_access_token() {
    let user = test_user(Role::Student);
    let token = create_refresh_token(user.id, &user.email, user.role, &test_jwt_config()).unwrap();
    let app = setup_app_with_users([user]);

    let (status, body) = get_json(app, "/api/auth/me", Some(&bearer(&token))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, error_body("Invalid token"));
}

#[tokio::test]
async fn test_me_for_unknown_user() {
    let user = test_user(Role::Student);
    let token = access_token_for(&user);
    let app = setup_app_with_users([]);

    let (status, body) = get_json(app, "/api/auth/me", Some(&bearer(&token))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, error_body("User not found"));
}

#[tokio::test]
async fn test_me_for_inactive_user() {
    let user = inactive_user(Role::Teacher);
    let token = access_token_for(&user);
    let app = setup_app_with_users([user]);

    let (status, body) = get_json(app, "/api/auth/me", Some(&bearer(&token))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, error_body("User account is inactive"));
}

#[tokio::test]
async fn test_lookup_failure_is_internal_error() {
    let user = test_user(Role::Student);
    let token = access_token_for(&user);
    let app = setup_test_app(Arc::new(FailingUserLookup));

    let (status, body) = get_json(app, "/api/auth/me", Some(&bearer(&token))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, error_body("Internal server error"));
}

#[tokio::test]
async fn test_authenticate_is_idempotent() {
    let user = test_user(Role::Teacher);
    let token = access_token_for(&user);
    let app = setup_app_with_users([user]);

    let (_, first) = get_json(app.clone(), "/api/auth/me", Some(&bearer(&token))).await;
    let (_, second) = get_json(app, "/api/auth/me", Some(&bearer(&token))).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_teacher_dashboard_admits_teacher_and_admin() {
    for role in [Role::Teacher, Role::Admin] {
        let user = test_user(role);
        let token = access_token_for(&user);
        let app = setup_app_with_users([user.clone()]);

        let (status, body) =
            get_json(app, "/api/teacher/dashboard", Some(&bearer(&token))).await;

        assert_eq!(status, StatusCode::OK, "role {role}");
        assert_eq!(body["userId"], json!(user.id));
        assert_eq!(body["role"], role.as_str());
    }
}

#[tokio::test]
async fn test_teacher_dashboard_denies_student() {
    let user = test_user(Role::Student);
    let token = access_token_for(&user);
    let app = setup_app_with_users([user]);

    let (status, body) = get_json(app, "/api/teacher/dashboard", Some(&bearer(&token))).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body,
        error_body("Access denied. Required role: TEACHER or ADMIN")
    );
}

#[tokio::test]
async fn test_admin_overview_denies_teacher() {
    let user = test_user(Role::Teacher);
    let token = access_token_for(&user);
    let app = setup_app_with_users([user]);

    let (status, body) = get_json(app, "/api/admin/overview", Some(&bearer(&token))).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["message"].as_str().unwrap().contains("Access denied"));
}

#[tokio::test]
async fn test_admin_overview_admits_admin() {
    let user = test_user(Role::Admin);
    let token = access_token_for(&user);
    let app = setup_app_with_users([user]);

    let (status, body) = get_json(app, "/api/admin/overview", Some(&bearer(&token))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "ADMIN");
}

#[tokio::test]
async fn test_role_route_authenticates_before_authorizing() {
    let app = setup_app_with_users([]);

    let (status, body) = get_json(app, "/api/admin/overview", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, error_body("No token provided"));
}

#[tokio::test]
async fn test_inactive_admin_is_unauthenticated_not_forbidden() {
    let user = inactive_user(Role::Admin);
    let token = access_token_for(&user);
    let app = setup_app_with_users([user]);

    let (status, body) = get_json(app, "/api/admin/overview", Some(&bearer(&token))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, error_body("User account is inactive"));
}

#[tokio::test]
async fn test_courses_personalized_for_active_user() {
    let user = test_user(Role::Student);
    let token = access_token_for(&user);
    let app = setup_app_with_users([user]);

    let (status, body) = get_json(app, "/api/courses", Some(&bearer(&token))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["personalized"], true);
    assert_eq!(body["greeting"], "Welcome back, Ada!");
    assert!(!body["courses"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_courses_never_rejects() {
    let active = test_user(Role::Student);
    let inactive = inactive_user(Role::Student);
    let missing = test_user(Role::Teacher);

    let headers = [
        None,
        Some("Basic dXNlcjpwYXNz".to_string()),
        Some("Bearer    ".to_string()),
        Some(bearer(&expired_token_for(&active))),
        Some(bearer(&foreign_token_for(&active))),
        Some(bearer(&access_token_for(&inactive))),
        Some(bearer(&access_token_for(&missing))),
        Some("Bearer not.a.jwt".to_string()),
    ];

    for header in headers {
        let app = setup_app_with_users([active.clone(), inactive.clone()]);

        let (status, body) = get_json(app, "/api/courses", header.as_deref()).await;

        assert_eq!(status, StatusCode::OK, "header {header:?}");
        assert_eq!(body["personalized"], false, "header {header:?}");
        assert_eq!(body["greeting"], "Welcome to LearnHub!");
    }
}

#[tokio::test]
async fn test_courses_swallow_lookup_failure() {
    let user = test_user(Role::Student);
    let token = access_token_for(&user);
    let app = setup_test_app(Arc::new(FailingUserLookup));

    let (status, body) = get_json(app, "/api/courses", Some(&bearer(&token))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["personalized"], false);
}

#[tokio::test]
async fn test_unknown_role_in_token_is_invalid() {
    let user = test_user(Role::Student);
    let now = Utc::now().timestamp() as usize;
    let claims = json!({
        "id": user.id,
        "email": user.email,
        "role": "SUPERUSER",
        "exp": now + 3600,
        "iat": now,
    });
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(test_jwt_config().secret.as_bytes()),
    )
    .unwrap();
    let app = setup_app_with_users([user]);

    let (status, body) = get_json(app, "/api/auth/me", Some(&bearer(&token))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, error_body("Invalid token"));
}

#[tokio::test]
async fn test_token_for_other_id_is_not_found() {
    let user = test_user(Role::Student);
    let stranger = learnhub_auth::UserRecord {
        id: Uuid::new_v4(),
        ..user.clone()
    };
    let token = access_token_for(&stranger);
    let app = setup_app_with_users([user]);

    let (status, body) = get_json(app, "/api/auth/me", Some(&bearer(&token))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, error_body("User not found"));
}
