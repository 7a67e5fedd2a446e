//! Route Table Routes
//!
//! Read-only view of the route table for tooling and deployment checks.
//!
//! - GET /api/v1/routes - All routes in declaration order
//! - GET /api/v1/routes/:name - One route by name
//! - GET /api/v1/resolve?path=... - Resolve a browser location

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::server::dto::{ResolveQuery, ResolveResponse, RouteDto, RouteListResponse};
use crate::server::error::{ServerError, ServerResult};
use crate::server::state::AppState;

/// GET /api/v1/routes
pub async fn list_routes(State(state): State<Arc<AppState>>) -> Json<RouteListResponse> {
    let navigation = state.context.navigation();

    let routes: Vec<RouteDto> = navigation
        .table()
        .iter()
        .map(|route| RouteDto {
            route: *route,
            href: navigation.href_for_path(route.path),
        })
        .collect();

    Json(RouteListResponse {
        base: navigation.base().to_string(),
        count: routes.len(),
        routes,
    })
}

/// GET /api/v1/routes/:name
pub async fn get_route(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ServerResult<Json<RouteDto>> {
    let navigation = state.context.navigation();
    let href = navigation.href(&name)?;
    let route = navigation
        .table()
        .by_name(&name)
        .ok_or_else(|| ServerError::NotFound(format!("route {}", name)))?;

    Ok(Json(RouteDto {
        route: *route,
        href,
    }))
}

/// GET /api/v1/resolve?path=...
pub async fn resolve(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ResolveQuery>,
) -> ServerResult<Json<ResolveResponse>> {
    if query.path.trim().is_empty() {
        return Err(ServerError::Validation("path must not be empty".to_string()));
    }

    state
        .context
        .navigation()
        .resolve(&query.path)
        .map(|resolved| Json(resolved.into()))
        .ok_or_else(|| ServerError::NotFound(format!("no route matches {}", query.path)))
}
