//! # LearnHub Auth
//!
//! The access-control gate of the LearnHub API.
//!
//! This crate provides:
//!
//! - [`bearer`]: parsing of the `Authorization: Bearer <token>` header
//! - [`claims`] and [`jwt`]: the signed credential and its codec
//! - [`role`]: the closed set of account roles
//! - [`lookup`]: the user lookup collaborator the gate depends on
//! - [`gate`]: the authenticate and optional-auth gates
//! - [`guard`]: the role membership guard
//!
//! The crate knows nothing about HTTP frameworks. The API crate wires
//! [`Authenticator`] and [`RoleGuard`] into axum middleware.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use learnhub_auth::{Authenticator, Role, RoleGuard};
//! use learnhub_config::JwtConfig;
//!
//! let authenticator = Authenticator::new(JwtConfig::from_env(), Arc::new(user_lookup));
//!
//! let principal = authenticator
//!     .authenticate(Some("Bearer eyJhbGciOi..."))
//!     .await?;
//!
//! RoleGuard::new([Role::Admin]).check(Some(&principal))?;
//! ```

pub mod bearer;
pub mod claims;
pub mod gate;
pub mod guard;
pub mod jwt;
pub mod lookup;
pub mod principal;
pub mod role;
#[cfg(any(test, feature = "test-utils"))]
pub mod testutil;

// Re-export commonly used types at crate root
pub use bearer::extract_bearer;
pub use claims::{Claims, RefreshTokenClaims};
pub use gate::{AuthFailure, Authenticator};
pub use guard::RoleGuard;
pub use jwt::{
    TokenError, create_access_token, create_refresh_token, decode_refresh_token, decode_token,
};
pub use lookup::{UserLookup, UserRecord};
pub use principal::Principal;
pub use role::{Role, UnknownRole};
