use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use learnhub_auth::{Principal, Role};
use learnhub_core::ErrorBody;

use crate::modules::courses::model::{CourseCatalog, CourseSummary};
use crate::modules::dashboards::model::DashboardResponse;
use crate::modules::health::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::health_check,
        crate::modules::auth::controller::get_me,
        crate::modules::courses::controller::get_courses,
        crate::modules::dashboards::controller::get_teacher_dashboard,
        crate::modules::dashboards::controller::get_admin_overview,
    ),
    components(
        schemas(
            Principal,
            Role,
            ErrorBody,
            HealthResponse,
            CourseSummary,
            CourseCatalog,
            DashboardResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Authentication", description = "Identity of the calling user"),
        (name = "Courses", description = "Public catalog, personalized when signed in"),
        (name = "Dashboards", description = "Role-restricted dashboards")
    ),
    info(
        title = "LearnHub API",
        version = "0.1.0",
        description = "Online learning marketplace API secured with JWT bearer tokens.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
