//! Postgres implementation of the user lookup collaborator.

use anyhow::Context;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use learnhub_auth::{Role, UserLookup, UserRecord};

/// The projection the gate reads; nothing else leaves the `users` table.
const FIND_USER_BY_ID: &str = r#"
    SELECT id, email, first_name, last_name, role::text AS role, is_active
    FROM users
    WHERE id = $1
"#;

#[derive(Debug, Clone, FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    first_name: String,
    last_name: String,
    role: String,
    is_active: bool,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = anyhow::Error;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role: Role = row
            .role
            .parse()
            .with_context(|| format!("user {} has an unrecognised role", row.id))?;

        Ok(UserRecord {
            id: row.id,
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
            role,
            is_active: row.is_active,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PgUserLookup {
    pool: PgPool,
}

impl PgUserLookup {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserLookup for PgUserLookup {
    async fn find_user_by_id(&self, id: Uuid) -> anyhow::Result<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(FIND_USER_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to look up user")?;

        row.map(UserRecord::try_from).transpose()
    }
}
