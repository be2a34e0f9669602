//! Expedition Site - headless host for the Iceland expedition website
//!
//! This is the main entry point for the expedition-site preview server.

use std::sync::Arc;
use tokio::{net::TcpListener, sync::mpsc};
use tracing::info;

use expedition_site::{
    api::create_router,
    config::Config,
    state::AppState,
    tasks::auto_advance_task,
    utils::{shutdown_signal, shutdown_signals},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("expedition_site={},tower_http=info", config.log_level()))
        .init();

    info!("Starting expedition-site v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, hero={}ms, lightbox={}ms",
        config.host, config.port, config.hero_interval_ms, config.lightbox_interval_ms
    );

    let signals = shutdown_signals()?;

    // Create application state; the hero starts playing immediately
    let (tick_tx, tick_rx) = mpsc::unbounded_channel();
    let state = Arc::new(AppState::new(config.settings(), tick_tx)?);

    // Start the auto-advance background task
    let tick_state = Arc::clone(&state);
    tokio::spawn(async move {
        auto_advance_task(tick_state, tick_rx).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /content    - All static content, or one /content/<section>");
    info!("  GET  /events     - Server-sent site snapshots");
    info!("  GET  /hero, POST /hero/{{next,prev,play,pause,input}}, POST /hero/goto/:index");
    info!("  GET  /lightbox, POST /lightbox/open/:index, POST /lightbox/goto/:index");
    info!("  POST /lightbox/{{close,next,prev,play,pause,input}}");
    info!("  POST /booking    - Build a messaging deep link");
    info!("  GET  /status     - Carousel state and uptime");
    info!("  GET  /health     - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal(signals) => {
            info!("Shutdown signal received");
        }
    }

    if let Err(e) = state.shutdown() {
        tracing::error!("Failed to release carousels: {}", e);
    }

    info!("Server shutdown complete");
    Ok(())
}
