//! The user lookup collaborator.
//!
//! The gate only needs a narrow projection of the user row. Implementations
//! live outside this crate (`learnhub-db` for Postgres, [`crate::testutil`]
//! for tests) and are injected into [`crate::Authenticator`].

use async_trait::async_trait;
use uuid::Uuid;

use crate::role::Role;

/// The active-status projection of a user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub is_active: bool,
}

#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Returns the user with this id, or `None` if no such user exists.
    ///
    /// An `Err` means the lookup itself failed (I/O, decoding), not that the
    /// user is missing.
    async fn find_user_by_id(&self, id: Uuid) -> anyhow::Result<Option<UserRecord>>;
}
