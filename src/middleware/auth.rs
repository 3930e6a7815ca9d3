use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use learnhub_auth::{Principal, Role};
use learnhub_core::AppError;
use learnhub_observability::track_auth_gate;
use uuid::Uuid;

use crate::state::AppState;

/// Raw `Authorization` header value, if present and valid UTF-8 visible ASCII.
pub fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}

/// Authenticate gate.
///
/// Rejects the request with `401` unless it carries a valid token for an
/// existing, active user. On success the [`Principal`] is attached to the
/// request extensions before the inner service runs.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // A principal is only ever attached by this layer
    req.extensions_mut().remove::<Principal>();

    let outcome = state
        .authenticator
        .authenticate(authorization_header(req.headers()))
        .await;

    let principal = match outcome {
        Ok(principal) => principal,
        Err(failure) => {
            track_auth_gate("required", failure.reason());
            return Err(failure.into_app_error());
        }
    };

    track_auth_gate("required", "authenticated");
    req.extensions_mut().insert(principal);
    Ok(next.run(req).await)
}

/// Optional-auth gate.
///
/// Attaches a [`Principal`] when the request authenticates and otherwise
/// lets it through anonymously. Never rejects.
pub async fn optional_auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    req.extensions_mut().remove::<Principal>();

    let principal = state
        .authenticator
        .authenticate_optional(authorization_header(req.headers()))
        .await;

    match principal {
        Some(principal) => {
            track_auth_gate("optional", "authenticated");
            req.extensions_mut().insert(principal);
        }
        None => track_auth_gate("optional", "anonymous"),
    }

    next.run(req).await
}

/// Extractor for the principal attached by [`authenticate`].
///
/// Rejects with `401 Authentication required` when the route is not behind
/// the authenticate gate or the request was anonymous.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

impl AuthUser {
    pub fn user_id(&self) -> Uuid {
        self.0.id
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn role(&self) -> Role {
        self.0.role
    }

    /// Check if the user holds one of the given roles. An empty slice
    /// admits any role, as [`RoleGuard`](learnhub_auth::RoleGuard) does.
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.is_empty() || roles.contains(&self.0.role)
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}

/// Extractor for routes behind [`optional_auth`]. `None` means anonymous.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<Principal>);

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(parts.extensions.get::<Principal>().cloned()))
    }
}
