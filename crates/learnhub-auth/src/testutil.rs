//! Test doubles for the user lookup collaborator.
//!
//! Compiled for this crate's own tests and, through the `test-utils`
//! feature, for downstream integration tests.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use learnhub_config::JwtConfig;

use crate::lookup::{UserLookup, UserRecord};

/// A JWT config with fixed secrets and the default lifetimes.
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-key-at-least-32-characters-long".to_string(),
        refresh_secret: "test-refresh-secret-at-least-32-characters".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 604800,
        leeway: 0,
    }
}

/// A user store backed by a map. Records can be changed between requests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserLookup {
    users: Arc<RwLock<HashMap<Uuid, UserRecord>>>,
}

impl InMemoryUserLookup {
    pub fn new(users: impl IntoIterator<Item = UserRecord>) -> Self {
        let users = users.into_iter().map(|user| (user.id, user)).collect();
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    pub fn upsert(&self, user: UserRecord) {
        self.users
            .write()
            .expect("user map lock poisoned")
            .insert(user.id, user);
    }

    pub fn remove(&self, id: Uuid) {
        self.users
            .write()
            .expect("user map lock poisoned")
            .remove(&id);
    }
}

#[async_trait]
impl UserLookup for InMemoryUserLookup {
    async fn find_user_by_id(&self, id: Uuid) -> anyhow::Result<Option<UserRecord>> {
        Ok(self
            .users
            .read()
            .expect("user map lock poisoned")
            .get(&id)
            .cloned())
    }
}

/// A user store whose every lookup fails, as an unreachable database would.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingUserLookup;

#[async_trait]
impl UserLookup for FailingUserLookup {
    async fn find_user_by_id(&self, _id: Uuid) -> anyhow::Result<Option<UserRecord>> {
        Err(anyhow::anyhow!("connection refused"))
    }
}
