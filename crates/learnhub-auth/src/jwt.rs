//! JWT (JSON Web Token) codec.
//!
//! Issues and verifies the two token kinds used by the LearnHub API:
//!
//! - **Access tokens**: short-lived, signed with [`JwtConfig::secret`],
//!   verified by the authenticate gate on every request
//! - **Refresh tokens**: long-lived, signed with
//!   [`JwtConfig::refresh_secret`], only accepted by the refresh flow
//!
//! Verification failures are reduced to a [`TokenError`]. Expiry is its own
//! variant so callers can tell "log in again" apart from "this token is
//! garbage"; every other library failure collapses into
//! [`TokenError::Malformed`] and its detail stays inside this module.
//!
//! # Example
//!
//! ```ignore
//! use learnhub_auth::{create_access_token, decode_token, Role};
//! use learnhub_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user_id, "student@example.com", Role::Student, &config)?;
//! let claims = decode_token(&token, &config)?;
//! assert_eq!(claims.id, user_id);
//! ```

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use uuid::Uuid;

use learnhub_config::JwtConfig;
use learnhub_core::AppError;

use crate::claims::{Claims, RefreshTokenClaims};
use crate::role::Role;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Why a token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// Signature and structure are valid but `exp` has passed.
    #[error("token expired")]
    Expired,
    /// Bad structure, encoding, signature, algorithm or claims.
    #[error("malformed token")]
    Malformed,
}

fn now() -> usize {
    Utc::now().timestamp() as usize
}

/// `iat + lifetime`, clamped at the epoch. A non-positive lifetime yields an
/// already-expired token.
fn expires_at(iat: usize, lifetime: i64) -> usize {
    (iat as i64).saturating_add(lifetime).max(0) as usize
}

fn validation(jwt_config: &JwtConfig) -> Validation {
    let mut validation = Validation::new(ALGORITHM);
    validation.leeway = jwt_config.leeway;
    validation
}

fn classify(err: jsonwebtoken::errors::Error) -> TokenError {
    match err.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        kind => {
            tracing::debug!(reason = ?kind, "Token rejected");
            TokenError::Malformed
        }
    }
}

/// Signs an access token for an already-built claim set.
///
/// [`create_access_token`] covers the usual case; this is exposed for tools
/// that need to control `iat`/`exp` themselves.
pub fn sign_access_claims(claims: &Claims, jwt_config: &JwtConfig) -> Result<String, AppError> {
    encode(
        &Header::new(ALGORITHM),
        claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Creates an access token carrying `{id, email, role}`.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn create_access_token(
    user_id: Uuid,
    email: &str,
    role: Role,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = now();
    let claims = Claims {
        id: user_id,
        email: email.to_string(),
        role,
        exp: expires_at(now, jwt_config.access_token_expiry),
        iat: now,
    };

    sign_access_claims(&claims, jwt_config)
}

/// Verifies an access token and returns its claims.
///
/// # Errors
///
/// - [`TokenError::Expired`] when the token is correctly signed but past `exp`
/// - [`TokenError::Malformed`] for everything else, including a token signed
///   with another secret or with a role outside [`Role`]
pub fn decode_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, TokenError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation(jwt_config),
    )
    .map(|data| data.claims)
    .map_err(classify)
}

/// Creates a refresh token with a unique `jti`.
pub fn create_refresh_token(
    user_id: Uuid,
    email: &str,
    role: Role,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = now();
    let claims = RefreshTokenClaims {
        id: user_id,
        email: email.to_string(),
        role,
        exp: expires_at(now, jwt_config.refresh_token_expiry),
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::new(ALGORITHM),
        &claims,
        &EncodingKey::from_secret(jwt_config.refresh_secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create refresh token: {}", e)))
}

/// Verifies a refresh token. Same error split as [`decode_token`].
pub fn decode_refresh_token(
    token: &str,
    jwt_config: &JwtConfig,
) -> Result<RefreshTokenClaims, TokenError> {
    decode::<RefreshTokenClaims>(
        token,
        &DecodingKey::from_secret(jwt_config.refresh_secret.as_bytes()),
        &validation(jwt_config),
    )
    .map(|data| data.claims)
    .map_err(classify)
}
