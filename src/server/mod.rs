pub mod handlers;
mod types;

pub use types::{ErrorResponse, MoodResponse, TextAnalyzeRequest, WelcomeResponse};

use crate::analysis::{KeywordAnalyzer, StubImageAnalyzer};
use crate::caption::QuoteBook;
use crate::{Result, config::Config};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

// Camera photos routinely exceed the transport's 2 MiB default body cap
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/analyze/text", post(handlers::analyze_text))
        .route("/api/analyze/image", post(handlers::analyze_image))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        // All origins, methods and headers; tighten before exposing publicly
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Stub analyzers; model-backed implementations slot in here
    let state = AppState {
        text_analyzer: Arc::new(KeywordAnalyzer::new()),
        image_analyzer: Arc::new(StubImageAnalyzer::new()),
        captions: Arc::new(QuoteBook::new()),
    };

    let app = router(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
