use axum::{Router, middleware, routing::get};

use super::controller::{get_admin_overview, get_teacher_dashboard};
use crate::middleware::role::{require_admin, require_teacher};
use crate::state::AppState;

/// `/dashboard`, behind the teacher guard.
pub fn init_teacher_router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(get_teacher_dashboard))
        .route_layer(middleware::from_fn(require_teacher))
}

/// `/overview`, behind the admin guard.
pub fn init_admin_router() -> Router<AppState> {
    Router::new()
        .route("/overview", get(get_admin_overview))
        .route_layer(middleware::from_fn(require_admin))
}
