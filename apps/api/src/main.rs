use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use unimatch::catalog;
use unimatch::config::Config;
use unimatch::recommendation::admission::{AdmissionModel, HeuristicAdmissionModel};
use unimatch::routes::build_router;
use unimatch::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting UniMatch API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Catalog loaded: {} universities, {} scholarships, {} countries",
        catalog::universities().len(),
        catalog::scholarships().len(),
        catalog::country_costs().len()
    );

    let admission_model: Arc<dyn AdmissionModel> = Arc::new(HeuristicAdmissionModel);
    info!("Admission model: {}", admission_model.name());

    let state = AppState { admission_model };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("invalid bind address '{}'", config.bind_address()))?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
