use anyhow::Context;
use dotenvy::dotenv;
use learnhub::router::init_router;
use learnhub::state::init_app_state;
use learnhub_config::ServerConfig;
use learnhub_observability::{init_metrics, init_tracing, shutdown_tracer};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing()?;
    let metrics = init_metrics()?;

    let state = init_app_state().await?;
    if state.jwt_config.uses_development_secret() {
        warn!("Serving with development JWT secrets; do not expose this instance");
    }

    let app = init_router(state, metrics);

    let server_config = ServerConfig::from_env();
    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!(address = %address, "🚀 Server running");
    info!("📚 Swagger UI available at http://{address}/swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    shutdown_tracer().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
