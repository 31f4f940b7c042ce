use std::path::Path;

use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

/// Page shell (`index.html`) plus the web bundle it boots.
///
/// The shell loads `/wasm/scrape-web.js` and `/wasm/scrape-web_bg.wasm`.
/// Fill in the bundle before a release build:
///
/// ```bash
/// cd packages/web && dx bundle --platform web --release --features web
/// cp -r <bundle>/public/wasm <bundle>/public/assets ../server/static/
/// ```
///
/// Debug builds read the folder from disk, so a fresh bundle shows up
/// without recompiling the server.
#[derive(RustEmbed)]
#[folder = "static/"]
pub struct WebAssets;

pub const SHELL: &str = "index.html";

/// `GET /` and every path not claimed by a route
pub async fn serve_web_app(uri: Uri) -> Response {
    serve_embedded::<WebAssets>(uri.path())
}

fn serve_embedded<E: RustEmbed>(path: &str) -> Response {
    let path = match path.trim_start_matches('/') {
        "" => SHELL,
        path => path,
    };

    if let Some(file) = E::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return ([(header::CONTENT_TYPE, mime.as_ref())], file.data).into_response();
    }

    // A missing file stays a 404 so a stale bundle fails loudly; client-side
    // routes get the shell
    if is_asset_path(path) {
        tracing::debug!(path = %path, "Web asset not found");
        return (StatusCode::NOT_FOUND, "404 Not Found").into_response();
    }

    match E::get(SHELL) {
        Some(shell) => ([(header::CONTENT_TYPE, "text/html")], shell.data).into_response(),
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}

fn is_asset_path(path: &str) -> bool {
    Path::new(path).extension().is_some()
}
