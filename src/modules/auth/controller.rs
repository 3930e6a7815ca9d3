use axum::Json;
use learnhub_auth::Principal;
use learnhub_core::{AppError, ErrorBody};
use tracing::instrument;

use crate::middleware::auth::AuthUser;

/// Get the principal attached to the current request
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Authenticated principal", body = Principal),
        (status = 401, description = "Missing, expired or invalid token, or unknown/inactive user", body = ErrorBody),
        (status = 500, description = "User lookup failed", body = ErrorBody)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Authentication"
)]
#[instrument(skip_all, fields(user_id = %auth_user.user_id()))]
pub async fn get_me(auth_user: AuthUser) -> Result<Json<Principal>, AppError> {
    Ok(Json(auth_user.0))
}
