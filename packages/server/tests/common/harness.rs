//! Test harness that runs real servers on ephemeral loopback ports.
//!
//! `TestServer` serves the application router; `Storefront` serves canned
//! listing pages for the scraper to fetch.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{http::StatusCode, response::Html, routing::get, Router};
use scrape_server::kernel::ProductScraper;
use scrape_server::server::{build_app, AppState};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use super::LISTING_HTML;

/// Initialize tracing once; run with `RUST_LOG=debug cargo test -- --nocapture`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

async fn spawn(router: Router) -> Result<(SocketAddr, JoinHandle<()>)> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .context("Failed to bind test listener")?;
    let addr = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    Ok((addr, handle))
}

/// The application, listening on loopback
pub struct TestServer {
    pub addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start(scraper: Arc<dyn ProductScraper>) -> Result<Self> {
        init_tracing();
        let (addr, handle) = spawn(build_app(AppState::new(scraper))).await?;
        Ok(Self { addr, handle })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A fake storefront.
///
/// - `/listing` - product listing page
/// - `/empty` - page with no product rows
/// - `/gone` - 404
/// - `/unavailable` - 503
pub struct Storefront {
    pub addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl Storefront {
    pub async fn start() -> Result<Self> {
        let router = Router::new()
            .route("/listing", get(|| async { Html(LISTING_HTML) }))
            .route(
                "/empty",
                get(|| async { Html("<html><body><p>Nothing here</p></body></html>") }),
            )
            .route("/gone", get(|| async { (StatusCode::NOT_FOUND, "gone") }))
            .route(
                "/unavailable",
                get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "try later") }),
            );
        let (addr, handle) = spawn(router).await?;
        Ok(Self { addr, handle })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for Storefront {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
