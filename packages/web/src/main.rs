//! Product scrape page
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build, served by `scrape-server`:
//! ```bash
//! dx bundle --platform web --release --features web
//! ```
//!
//! Set `SCRAPE_ENDPOINT` at build time to post to a different server, e.g.
//! `SCRAPE_ENDPOINT=http://localhost:8080/scrape dx serve --features web`.

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    if let Some(endpoint) = scrape_web::client::build_time_endpoint() {
        scrape_web::client::init_scrape_endpoint(endpoint.to_string());
    }

    dioxus::launch(scrape_web::app::App);
}
