//! JWT claim structures.
//!
//! - [`Claims`]: the credential payload carried by access tokens
//! - [`RefreshTokenClaims`]: claims carried by refresh tokens
//!
//! Access tokens only ever carry `{id, email, role}` plus the registered
//! `exp`/`iat` timestamps. Names and the active flag are read from the user
//! record at request time, never from the token.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::role::Role;

/// JWT claims for access tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID
    pub id: Uuid,
    /// User's email address at issue time
    pub email: String,
    /// User's role at issue time
    pub role: Role,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

/// JWT claims for refresh tokens.
///
/// Signed with a separate secret so a refresh token can never pass the
/// access gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenClaims {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    pub exp: usize,
    pub iat: usize,
    /// Unique token identifier (JWT ID)
    pub jti: String,
}
