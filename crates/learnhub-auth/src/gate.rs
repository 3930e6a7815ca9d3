//! The authenticate and optional-auth gates.
//!
//! [`Authenticator::authenticate`] walks a request's credential through
//! extraction, decoding, user lookup and the activity check:
//!
//! ```text
//! header ──extract──▶ token ──decode──▶ claims ──lookup──▶ user ──active?──▶ Principal
//!   │                   │                  │                 │
//!   ▼                   ▼                  ▼                 ▼
//! NoToken        ExpiredToken /      UserNotFound /     InactiveUser
//!                InvalidToken          Lookup
//! ```
//!
//! Each exit is an [`AuthFailure`] variant. The HTTP layer turns it into an
//! [`AppError`] with [`AuthFailure::into_app_error`]; that is the only place
//! the internal variants meet the two public error kinds.

use std::sync::Arc;

use learnhub_config::JwtConfig;
use learnhub_core::AppError;

use crate::bearer::extract_bearer;
use crate::jwt::{TokenError, decode_token};
use crate::lookup::UserLookup;
use crate::principal::Principal;

/// Why a request could not be authenticated.
#[derive(Debug, thiserror::Error)]
pub enum AuthFailure {
    #[error("No token provided")]
    NoToken,
    #[error("Token expired")]
    ExpiredToken,
    #[error("Invalid token")]
    InvalidToken,
    #[error("User not found")]
    UserNotFound,
    #[error("User account is inactive")]
    InactiveUser,
    /// The lookup collaborator failed; says nothing about the caller.
    #[error("User lookup failed")]
    Lookup(#[source] anyhow::Error),
}

impl AuthFailure {
    /// Stable label for logs and metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            AuthFailure::NoToken => "no_token",
            AuthFailure::ExpiredToken => "expired_token",
            AuthFailure::InvalidToken => "invalid_token",
            AuthFailure::UserNotFound => "user_not_found",
            AuthFailure::InactiveUser => "inactive_user",
            AuthFailure::Lookup(_) => "lookup_failed",
        }
    }

    /// Translates the failure into the error a client sees.
    ///
    /// Every credential or account problem becomes a 401 with a fixed
    /// message. A lookup failure becomes a 500 whose cause is logged but
    /// never rendered.
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthFailure::Lookup(err) => AppError::internal(err.context("user lookup failed")),
            failure => AppError::unauthorized(failure.to_string()),
        }
    }
}

impl From<TokenError> for AuthFailure {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => AuthFailure::ExpiredToken,
            TokenError::Malformed => AuthFailure::InvalidToken,
        }
    }
}

/// Verifies bearer credentials against the signing secret and the user store.
///
/// Cheap to clone; holds the process-wide config and lookup handle.
#[derive(Clone)]
pub struct Authenticator {
    jwt_config: Arc<JwtConfig>,
    users: Arc<dyn UserLookup>,
}

impl Authenticator {
    pub fn new(jwt_config: JwtConfig, users: Arc<dyn UserLookup>) -> Self {
        Self {
            jwt_config: Arc::new(jwt_config),
            users,
        }
    }

    pub fn jwt_config(&self) -> &JwtConfig {
        &self.jwt_config
    }

    /// Resolves the principal behind a raw `Authorization` header value.
    ///
    /// The lookup is the only await point. Nothing is retained between
    /// calls, so the same token against the same user state always yields
    /// the same principal.
    #[tracing::instrument(name = "authenticate", skip_all)]
    pub async fn authenticate(&self, authorization: Option<&str>) -> Result<Principal, AuthFailure> {
        let token = extract_bearer(authorization).ok_or(AuthFailure::NoToken)?;
        let claims = decode_token(token, &self.jwt_config)?;

        let user = self
            .users
            .find_user_by_id(claims.id)
            .await
            .map_err(AuthFailure::Lookup)?
            .ok_or(AuthFailure::UserNotFound)?;

        if !user.is_active {
            return Err(AuthFailure::InactiveUser);
        }

        tracing::debug!(user_id = %user.id, role = %user.role, "Request authenticated");
        Ok(Principal::from(user))
    }

    /// Like [`authenticate`](Self::authenticate), but every failure means
    /// "anonymous" instead of an error.
    pub async fn authenticate_optional(&self, authorization: Option<&str>) -> Option<Principal> {
        match self.authenticate(authorization).await {
            Ok(principal) => Some(principal),
            Err(AuthFailure::NoToken) => None,
            Err(failure) => {
                tracing::debug!(reason = failure.reason(), "Continuing without a principal");
                None
            }
        }
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("access_token_expiry", &self.jwt_config.access_token_expiry)
            .field("leeway", &self.jwt_config.leeway)
            .finish_non_exhaustive()
    }
}
