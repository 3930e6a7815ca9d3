//! # LearnHub Config
//!
//! Configuration structures loaded from environment variables once at
//! process start. Nothing here is reloaded per request.
//!
//! - [`jwt`]: signing secrets, token lifetimes and clock leeway
//! - [`cors`]: allowed browser origins
//! - [`server`]: listen address
//!
//! # Example
//!
//! ```ignore
//! use learnhub_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
