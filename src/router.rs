use axum::http::{HeaderValue, Method};
use axum::{Router, middleware, routing::get};
use learnhub_observability::{MetricsHandle, logging_middleware, metrics_app, metrics_middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::middleware::auth::{authenticate, optional_auth};
use crate::modules::auth::router::init_auth_router;
use crate::modules::courses::router::init_courses_router;
use crate::modules::dashboards::router::{init_admin_router, init_teacher_router};
use crate::modules::health::health_check;
use crate::state::AppState;

/// Builds the application router.
///
/// Every route group that needs an identity gets the authenticate layer as
/// its outermost `route_layer`, so role guards added inside a group always
/// see the attached principal.
pub fn init_router(state: AppState, metrics: Option<MetricsHandle>) -> Router {
    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health_check))
        .nest(
            "/api",
            Router::new()
                .nest(
                    "/auth",
                    init_auth_router().route_layer(middleware::from_fn_with_state(
                        state.clone(),
                        authenticate,
                    )),
                )
                .nest(
                    "/courses",
                    init_courses_router().route_layer(middleware::from_fn_with_state(
                        state.clone(),
                        optional_auth,
                    )),
                )
                .nest(
                    "/teacher",
                    init_teacher_router().route_layer(middleware::from_fn_with_state(
                        state.clone(),
                        authenticate,
                    )),
                )
                .nest(
                    "/admin",
                    init_admin_router().route_layer(middleware::from_fn_with_state(
                        state.clone(),
                        authenticate,
                    )),
                ),
        )
        .with_state(state.clone());

    if let Some(handle) = metrics {
        router = router.merge(metrics_app(handle));
    }

    router
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
