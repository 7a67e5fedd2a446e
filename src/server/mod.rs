//! DataShow Server
//!
//! Hosts the built single-page bundle with history-mode fallback and
//! exposes the route table over HTTP. Built with Axum.
//!
//! # Endpoints
//!
//! ## Route table
//! - `GET /api/v1/routes` - List all routes
//! - `GET /api/v1/routes/:name` - Get a route by name
//! - `GET /api/v1/resolve?path=...` - Resolve a browser location
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## Everything else
//! - Declared routes under the base: `index.html`, 200
//! - Files in the bundle: served as-is
//! - Anything else under the base: `index.html`, 404
//! - Outside the base: JSON error, 404
//!
//! # Example
//!
//! ```rust,ignore
//! use datashow::config::ServerConfig;
//! use datashow::server::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     serve(AppState::new(config.clone()), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/routes", get(handlers::routes::list_routes))
        .route("/routes/:name", get(handlers::routes::get_route))
        .route("/resolve", get(handlers::routes::resolve));

    let health_routes = Router::new()
        .route("/live", get(handlers::health::liveness))
        .route("/ready", get(handlers::health::readiness))
        .route("/", get(handlers::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback(handlers::spa::spa_fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ServerError> {
    if !state.bundle_available().await {
        tracing::warn!(
            "No bundle at {:?}; pages will answer 503 until it is built",
            config.index_file()
        );
    }

    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("DataShow listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("DataShow shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use tempfile::{tempdir, TempDir};
    use tower::util::ServiceExt;

    const INDEX_HTML: &str = "<!DOCTYPE html><html><body>datashow</body></html>";
    const APP_JS: &str = "console.log('datashow');";

    fn create_test_app(base_url: &str) -> (Router, TempDir) {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets").join("app.js"), APP_JS).unwrap();

        let app = create_app_without_bundle(base_url, &dir);
        (app, dir)
    }

    fn create_app_without_bundle(base_url: &str, dir: &TempDir) -> Router {
        let config = ServerConfig {
            dist_dir: dir.path().to_path_buf(),
            base_url: base_url.to_string(),
            ..Default::default()
        };
        build_router(AppState::new(config))
    }

    async fn send_get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        serde_json::from_str(&body_string(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app("/");
        assert_eq!(send_get(app, "/health/live").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_with_bundle() {
        let (app, _dir) = create_test_app("/");
        assert_eq!(send_get(app, "/health/ready").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_without_bundle() {
        let dir = tempdir().unwrap();
        let app = create_app_without_bundle("/", &dir);
        assert_eq!(
            send_get(app, "/health/ready").await.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app("/");
        let response = send_get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["routes"], 9);
    }

    #[tokio::test]
    async fn test_declared_routes_serve_index() {
        let (app, _dir) = create_test_app("/");
        for path in [
            "/",
            "/pie-chart",
            "/bar-chart",
            "/line-chart",
            "/radar-chart",
            "/scatter-chart",
            "/heatmap-chart",
            "/funnel-chart",
            "/gauge-chart",
        ] {
            let response = send_get(app.clone(), path).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", path);
            assert_eq!(body_string(response).await, INDEX_HTML);
        }
    }

    #[tokio::test]
    async fn test_route_with_query_serves_index() {
        let (app, _dir) = create_test_app("/");
        let response = send_get(app, "/line-chart?theme=dark").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_path_is_404_with_index() {
        let (app, _dir) = create_test_app("/");
        let response = send_get(app, "/nonexistent").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, INDEX_HTML);
    }

    #[tokio::test]
    async fn test_asset_is_served() {
        let (app, _dir) = create_test_app("/");
        let response = send_get(app, "/assets/app.js").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, APP_JS);
    }

    #[tokio::test]
    async fn test_base_prefix() {
        let (app, _dir) = create_test_app("/charts/");

        let response = send_get(app.clone(), "/charts/pie-chart").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send_get(app.clone(), "/charts").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send_get(app.clone(), "/charts/assets/app.js").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, APP_JS);

        let response = send_get(app.clone(), "/charts/unknown").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send_get(app, "/pie-chart").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_repeated_trailing_slashes_are_404() {
        let (app, _dir) = create_test_app("/");
        for path in ["//", "/bar-chart//", "/pie-chart///"] {
            let response = send_get(app.clone(), path).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", path);
            assert_eq!(body_string(response).await, INDEX_HTML);
        }

        let (app, _dir) = create_test_app("/charts");
        let response = send_get(app, "/charts/bar-chart//").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_bundle_directory_is_not_redirected() {
        let (app, _dir) = create_test_app("/charts");
        for path in ["/charts/assets", "/charts/assets/"] {
            let response = send_get(app.clone(), path).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", path);
            assert!(response.headers().get("location").is_none());
            assert_eq!(body_string(response).await, INDEX_HTML);
        }
    }

    #[tokio::test]
    async fn test_base_prefix_ignores_case() {
        let (app, _dir) = create_test_app("/charts");
        let response = send_get(app, "/CHARTS/pie-chart").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, INDEX_HTML);
    }

    #[tokio::test]
    async fn test_missing_bundle_is_503() {
        let dir = tempdir().unwrap();
        let app = create_app_without_bundle("/", &dir);
        let response = send_get(app, "/pie-chart").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await["error"]["code"], "BUNDLE_MISSING");
    }

    #[tokio::test]
    async fn test_post_to_page_not_allowed() {
        let (app, _dir) = create_test_app("/");
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/pie-chart")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_list_routes() {
        let (app, _dir) = create_test_app("/charts");
        let response = send_get(app, "/api/v1/routes").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["base"], "/charts");
        assert_eq!(json["count"], 9);
        assert_eq!(json["routes"][0]["name"], "Home");
        assert_eq!(json["routes"][0]["href"], "/charts/");
        assert_eq!(json["routes"][8]["name"], "GaugeChart");
        assert_eq!(json["routes"][8]["component"], "ChartView");
        assert_eq!(json["routes"][8]["chart"], "gauge");
        assert_eq!(json["routes"][8]["href"], "/charts/gauge-chart");
    }

    #[tokio::test]
    async fn test_get_route_by_name() {
        let (app, _dir) = create_test_app("/");
        let response = send_get(app.clone(), "/api/v1/routes/PieChart").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["path"], "/pie-chart");

        let response = send_get(app, "/api/v1/routes/DonutChart").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "ROUTE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_resolve() {
        let (app, _dir) = create_test_app("/");

        let response = send_get(app.clone(), "/api/v1/resolve?path=/gauge-chart").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["name"], "GaugeChart");
        assert_eq!(json["chart"], "gauge");

        let response = send_get(app.clone(), "/api/v1/resolve?path=/").await;
        assert_eq!(body_json(response).await["name"], "Home");

        let response = send_get(app.clone(), "/api/v1/resolve?path=/unknown").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send_get(app.clone(), "/api/v1/resolve?path=").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send_get(app, "/api/v1/resolve").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
