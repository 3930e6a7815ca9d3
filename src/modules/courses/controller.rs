use axum::Json;
use tracing::instrument;

use super::model::{CourseCatalog, featured_courses};
use crate::middleware::auth::MaybeAuthUser;

/// List featured courses, greeting the caller by name when signed in
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "Course catalog; never rejects a bad token", body = CourseCatalog)
    ),
    security(
        (),
        ("bearer_auth" = [])
    ),
    tag = "Courses"
)]
#[instrument(skip_all)]
pub async fn get_courses(MaybeAuthUser(viewer): MaybeAuthUser) -> Json<CourseCatalog> {
    let greeting = match &viewer {
        Some(principal) => format!("Welcome back, {}!", principal.first_name),
        None => "Welcome to LearnHub!".to_string(),
    };

    Json(CourseCatalog {
        greeting,
        personalized: viewer.is_some(),
        courses: featured_courses(),
    })
}
