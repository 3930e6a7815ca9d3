use std::sync::Arc;

use learnhub_auth::{Authenticator, UserLookup};
use learnhub_config::{CorsConfig, JwtConfig};
use learnhub_db::{PgUserLookup, init_db_pool, run_migrations};

#[derive(Clone, Debug)]
pub struct AppState {
    pub authenticator: Authenticator,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    /// Builds the state around any user lookup. Tests pass an in-memory one.
    pub fn new(jwt_config: JwtConfig, cors_config: CorsConfig, users: Arc<dyn UserLookup>) -> Self {
        Self {
            authenticator: Authenticator::new(jwt_config.clone(), users),
            jwt_config,
            cors_config,
        }
    }
}

/// Connects to Postgres and wires the production user lookup.
///
/// Migrations run only when `RUN_MIGRATIONS=true`; the `users` table is
/// normally owned by the service that manages accounts.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let pool = init_db_pool().await?;

    let run = std::env::var("RUN_MIGRATIONS")
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(false);
    if run {
        run_migrations(&pool).await?;
    }

    Ok(AppState::new(
        JwtConfig::from_env(),
        CorsConfig::from_env(),
        Arc::new(PgUserLookup::new(pool)),
    ))
}
