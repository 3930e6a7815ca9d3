//! Middleware and extractors for the access-control gates.
//!
//! # Modules
//!
//! - [`auth`]: the authenticate and optional-auth layers plus the
//!   [`AuthUser`](auth::AuthUser) / [`MaybeAuthUser`](auth::MaybeAuthUser) extractors
//! - [`role`]: the authorize layer driven by a [`RoleGuard`](learnhub_auth::RoleGuard)
//!
//! # Request Flow
//!
//! 1. Client sends a request with `Authorization: Bearer <token>`
//! 2. [`auth::authenticate`] verifies the token, loads the user and attaches
//!    a [`Principal`](learnhub_auth::Principal) to the request extensions
//! 3. [`role::require_roles`] checks the attached role against the guard
//! 4. The handler reads the principal through [`auth::AuthUser`]
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware, routing::get};
//! use learnhub::middleware::{auth::authenticate, role::require_roles};
//! use learnhub_auth::RoleGuard;
//!
//! // The authorize layer is added first so the authenticate layer wraps it.
//! let admin_routes = Router::new()
//!     .route("/overview", get(admin_overview))
//!     .route_layer(middleware::from_fn_with_state(RoleGuard::admin(), require_roles))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));
//! ```

pub mod auth;
pub mod role;
