//! Single-page bundle hosting
//!
//! History-mode fallback: every declared route is answered with the
//! bundle's `index.html` so the client router can take over. Files that
//! exist in the bundle are served as-is. Anything else still gets
//! `index.html` (the client renders its not-found page) but with a 404
//! status.

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;

use crate::server::error::ServerError;
use crate::server::state::AppState;

/// Fallback handler for every request no API route claimed
pub async fn spa_fallback(State(state): State<Arc<AppState>>, mut request: Request) -> Response {
    if request.method() != Method::GET && request.method() != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let navigation = state.context.navigation();
    let path = request.uri().path().to_string();

    let Some(relative) = navigation.strip_base(&path) else {
        return ServerError::NotFound(format!("{} is outside {}", path, navigation.base()))
            .into_response();
    };

    if let Some(resolved) = navigation.resolve_relative(relative) {
        tracing::debug!(path = %path, route = resolved.name(), "Serving route");
        return serve_index(&state, StatusCode::OK).await;
    }

    // Static assets live under the bundle root, without the base prefix
    let asset_uri = match request.uri().query() {
        Some(query) => format!("{}?{}", relative, query),
        None => relative.to_string(),
    };
    match asset_uri.parse::<Uri>() {
        Ok(uri) => *request.uri_mut() = uri,
        Err(e) => return ServerError::Validation(format!("bad path {}: {}", path, e)).into_response(),
    }

    // Directories are not pages: no slash redirect (its Location would drop
    // the base) and no implicit index.html
    let assets = ServeDir::new(&state.config.dist_dir).append_index_html_on_directories(false);
    let response = match assets.oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    };
    if response.status() != StatusCode::NOT_FOUND {
        return response.into_response();
    }

    tracing::debug!(path = %path, "No route or asset matched");
    serve_index(&state, StatusCode::NOT_FOUND).await
}

/// Respond with the bundle's `index.html`
async fn serve_index(state: &AppState, status: StatusCode) -> Response {
    let index = state.config.index_file();
    match tokio::fs::read_to_string(&index).await {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::warn!("Failed to read {:?}: {}", index, e);
            ServerError::BundleMissing(index).into_response()
        }
    }
}
