pub mod handlers;
pub mod types;

use crate::{Result, config::Config, pipeline};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Builds the application router around the given state.
pub fn app(state: handlers::AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/analyze", post(handlers::analyze))
        .route("/generate", post(handlers::generate))
        .route("/bloom-preview", post(handlers::bloom_preview))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Construct both pipeline handles up front; failures land in the slots
    let classifier = pipeline::load_classifier(&config.models);
    let generator = pipeline::load_generator(&config.models);

    if classifier.is_ready() && generator.is_ready() {
        info!("All models loaded, ready to serve requests");
    } else {
        warn!("Some models failed to load; affected endpoints will return 503");
    }

    // Create application state
    let app_state = handlers::AppState {
        classifier: Arc::new(classifier),
        generator: Arc::new(generator),
    };

    let app = app(app_state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
