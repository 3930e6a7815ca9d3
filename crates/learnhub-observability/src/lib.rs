//! LearnHub Observability
//!
//! Provides configurable observability features including:
//! - Structured logging with rolling files and optional OpenTelemetry export
//! - Metrics collection via Prometheus
//! - HTTP request/response logging
//! - Counters for the access-control gates
//!
//! Compiled in with the `observability` feature (default). At runtime,
//! recording can be switched off with `OBSERVABILITY_ENABLED=false`; console
//! logging stays on either way.
//!
//! # Examples
//!
//! ```no_run
//! use learnhub_observability::{init_tracing, shutdown_tracer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     init_tracing()?;
//!     // ... application code ...
//!     shutdown_tracer().await;
//!     Ok(())
//! }
//! ```

use std::sync::OnceLock;

pub mod basic_logging;
#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use basic_logging::init_basic_console_logging;

#[cfg(feature = "observability")]
pub use self::logging::{init_tracing, logging_middleware, shutdown_tracer};
#[cfg(feature = "observability")]
pub use self::metrics::{
    MetricsHandle, init_metrics, metrics_app, metrics_middleware, track_auth_gate,
    track_authorization_check,
};

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if observability is enabled via the `OBSERVABILITY_ENABLED` env var.
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true)
    })
}

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{Router, extract::Request, middleware::Next, response::Response};

    /// Placeholder for the Prometheus handle.
    #[derive(Debug, Clone)]
    pub struct MetricsHandle;

    /// Console logging only.
    pub fn init_tracing() -> anyhow::Result<()> {
        super::init_basic_console_logging();
        Ok(())
    }

    pub async fn shutdown_tracer() {}

    pub async fn logging_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub fn init_metrics() -> anyhow::Result<Option<MetricsHandle>> {
        Ok(None)
    }

    pub fn metrics_app(_handle: MetricsHandle) -> Router {
        Router::new()
    }

    pub fn track_auth_gate(_gate: &'static str, _outcome: &'static str) {}
    pub fn track_authorization_check(_allowed: bool, _role: &str) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
