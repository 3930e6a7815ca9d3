use axum::Json;
use learnhub_core::ErrorBody;
use tracing::instrument;

use super::model::DashboardResponse;
use crate::middleware::auth::AuthUser;

/// Teacher dashboard (TEACHER or ADMIN)
#[utoipa::path(
    get,
    path = "/api/teacher/dashboard",
    responses(
        (status = 200, description = "Dashboard for the signed-in teacher", body = DashboardResponse),
        (status = 401, description = "Not authenticated", body = ErrorBody),
        (status = 403, description = "Access denied. Required role: TEACHER or ADMIN", body = ErrorBody)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Dashboards"
)]
#[instrument(skip_all, fields(user_id = %auth_user.user_id()))]
pub async fn get_teacher_dashboard(auth_user: AuthUser) -> Json<DashboardResponse> {
    Json(DashboardResponse {
        message: format!("Teacher dashboard for {}", auth_user.0.full_name()),
        user_id: auth_user.user_id(),
        role: auth_user.role(),
    })
}

/// Administration overview (ADMIN only)
#[utoipa::path(
    get,
    path = "/api/admin/overview",
    responses(
        (status = 200, description = "Overview for the signed-in administrator", body = DashboardResponse),
        (status = 401, description = "Not authenticated", body = ErrorBody),
        (status = 403, description = "Access denied. Required role: ADMIN", body = ErrorBody)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Dashboards"
)]
#[instrument(skip_all, fields(user_id = %auth_user.user_id()))]
pub async fn get_admin_overview(auth_user: AuthUser) -> Json<DashboardResponse> {
    Json(DashboardResponse {
        message: format!("Administration overview for {}", auth_user.0.full_name()),
        user_id: auth_user.user_id(),
        role: auth_user.role(),
    })
}
