//! Role-based authorization middleware for Axum
//!
//! This module provides two approaches for role-based access control:
//! 1. Layer-based middleware using [`require_roles`] with a [`RoleGuard`] as state
//! 2. Helper functions for manual role checking inside handlers

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use learnhub_auth::{Principal, Role, RoleGuard};
use learnhub_core::AppError;
use learnhub_observability::track_authorization_check;

use crate::middleware::auth::AuthUser;

/// Authorize gate: checks the principal attached by the authenticate gate
/// against the guard's allowed roles.
///
/// Must run inside [`authenticate`](crate::middleware::auth::authenticate).
/// With axum `route_layer`s that means adding this layer first.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use learnhub_auth::{Role, RoleGuard};
///
/// let grading_routes = Router::new()
///     .route("/grades", get(grades_handler))
///     .route_layer(middleware::from_fn_with_state(
///         RoleGuard::new([Role::Teacher]),
///         require_roles,
///     ))
///     .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));
/// ```
pub async fn require_roles(
    State(guard): State<RoleGuard>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let principal = req.extensions().get::<Principal>();
    let decision = guard.check(principal);

    track_authorization_check(
        decision.is_ok(),
        principal.map_or("anonymous", |p| p.role.as_str()),
    );

    decision?;
    Ok(next.run(req).await)
}

/// Admin-only routes.
///
/// ```rust,ignore
/// let admin_routes = Router::new()
///     .route("/overview", get(overview_handler))
///     .route_layer(middleware::from_fn(require_admin))
///     .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));
/// ```
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    require_roles(State(RoleGuard::admin()), req, next).await
}

/// Teacher routes (Teacher and Admin allowed)
pub async fn require_teacher(req: Request, next: Next) -> Result<Response, AppError> {
    require_roles(State(RoleGuard::teacher()), req, next).await
}

/// Helper function to check if a user has a specific role in handler logic
///
/// # Example
///
/// ```rust,ignore
/// pub async fn handler(auth_user: AuthUser) -> Result<Json<Response>, AppError> {
///     check_role(&auth_user, Role::Admin)?;
///     // Handler logic
/// }
/// ```
pub fn check_role(auth_user: &AuthUser, required_role: Role) -> Result<(), AppError> {
    check_any_role(auth_user, &[required_role])
}

/// Helper function to check if a user has any of the specified roles.
///
/// An empty slice admits every authenticated user.
pub fn check_any_role(auth_user: &AuthUser, allowed_roles: &[Role]) -> Result<(), AppError> {
    RoleGuard::new(allowed_roles.iter().copied()).check(Some(&auth_user.0))
}
