use std::future::Future;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{config::Config, handlers, service::Service, shutdown::shutdown_signal, telemetry};

/// Shared application state. `Copy`, so handlers get it for free.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub service: Service,
}

impl AppState {
    pub fn new(service: Service) -> Self {
        Self { service }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/api/health", get(handlers::health))
        .fallback(handlers::fallback)

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Serve `service` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, service: Service, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(AppState::new(service));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Process entry point shared by both service binaries.
pub async fn run(service: Service) -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    telemetry::init_tracing();

    let config = Config::from_env(service)?;

    info!("╔══════════════════════════════════════╗");
    info!("║  {:<21} — Rust + Axum ║", service.name());
    info!("╚══════════════════════════════════════╝");

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    info!("Liveness probe: GET http://{}/api/health", addr);

    serve(listener, service, shutdown_signal()).await?;

    info!(service = %service, "Shutdown complete");
    Ok(())
}
