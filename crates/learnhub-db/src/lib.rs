//! # LearnHub DB
//!
//! Database pool initialization and the Postgres-backed user lookup.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use learnhub_db::{init_db_pool, run_migrations, PgUserLookup};
//!
//! let pool = init_db_pool().await?;
//! run_migrations(&pool).await?;
//! let users = Arc::new(PgUserLookup::new(pool));
//! ```

pub mod users;

use std::env;

use anyhow::Context;

pub use sqlx::PgPool;
pub use users::PgUserLookup;

/// Connects to the database named by `DATABASE_URL`.
///
/// Call once at startup; the pool is cheap to clone.
///
/// # Errors
///
/// Fails if `DATABASE_URL` is unset or the first connection cannot be made.
pub async fn init_db_pool() -> anyhow::Result<PgPool> {
    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    sqlx::postgres::PgPoolOptions::new()
        .max_connections(
            env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        )
        .connect(&database_url)
        .await
        .context("Failed to connect to database")
}

/// Applies the embedded migrations.
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")
}
