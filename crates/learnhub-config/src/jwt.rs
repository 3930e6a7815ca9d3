//! JWT signing configuration.
//!
//! # Environment Variables
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `JWT_SECRET` | development placeholder | HMAC secret for access tokens |
//! | `JWT_REFRESH_SECRET` | development placeholder | HMAC secret for refresh tokens |
//! | `JWT_ACCESS_EXPIRY` | `3600` | access token lifetime, seconds |
//! | `JWT_REFRESH_EXPIRY` | `604800` | refresh token lifetime, seconds |
//! | `JWT_LEEWAY` | `0` | clock skew tolerated on `exp`, seconds |

use std::env;

const DEV_SECRET: &str = "your-secret-key-change-in-production";
const DEV_REFRESH_SECRET: &str = "your-refresh-secret-key-change-in-production";

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub refresh_secret: String,
    pub access_token_expiry: i64,
    pub refresh_token_expiry: i64,
    pub leeway: u64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET is not set, using the development secret");
            DEV_SECRET.to_string()
        });
        let refresh_secret = lookup("JWT_REFRESH_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_REFRESH_SECRET is not set, using the development secret");
            DEV_REFRESH_SECRET.to_string()
        });

        Self {
            secret,
            refresh_secret,
            access_token_expiry: lookup("JWT_ACCESS_EXPIRY")
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600), // 1 hour
            refresh_token_expiry: lookup("JWT_REFRESH_EXPIRY")
                .and_then(|s| s.parse().ok())
                .unwrap_or(604800), // 7 days
            leeway: lookup("JWT_LEEWAY")
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
        }
    }

    /// Whether either secret is still the built-in development value.
    pub fn uses_development_secret(&self) -> bool {
        self.secret == DEV_SECRET || self.refresh_secret == DEV_REFRESH_SECRET
    }
}
