//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ProductScraper;
use crate::server::routes::{health_handler, scrape_handler};
use crate::server::static_files::serve_web_app;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub scraper: Arc<dyn ProductScraper>,
}

impl AppState {
    pub fn new(scraper: Arc<dyn ProductScraper>) -> Self {
        Self { scraper }
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    // CORS configuration - lets `dx serve` on another port reach /scrape
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/scrape", post(scrape_handler))
        .route("/health", get(health_handler))
        // Page shell and web bundle
        .fallback(serve_web_app)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
