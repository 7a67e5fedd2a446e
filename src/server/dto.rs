//! Data Transfer Objects
//!
//! Response and query types for the server endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::navigation::{Location, ResolvedRoute};
use crate::routes::RouteDescriptor;

// ============================================
// ROUTE TABLE DTOs
// ============================================

/// A route table row with its base-prefixed href
#[derive(Debug, Serialize)]
pub struct RouteDto {
    #[serde(flatten)]
    pub route: RouteDescriptor,
    pub href: String,
}

/// Whole route table, in declaration order
#[derive(Debug, Serialize)]
pub struct RouteListResponse {
    /// Base prefix the application is mounted under
    pub base: String,
    /// Number of routes
    pub count: usize,
    pub routes: Vec<RouteDto>,
}

/// Query for the resolve endpoint
#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    /// Browser location, base prefix included
    pub path: String,
}

/// Successful resolution
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    #[serde(flatten)]
    pub route: RouteDescriptor,
    /// Canonical href of the matched route
    pub href: String,
    /// Requested location relative to the base
    pub location: Location,
}

impl From<ResolvedRoute<'_>> for ResolveResponse {
    fn from(resolved: ResolvedRoute<'_>) -> Self {
        Self {
            route: *resolved.route,
            href: resolved.href,
            location: resolved.location,
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Bundle status: ok, missing
    pub bundle: String,
    /// Number of declared routes
    pub routes: usize,
    /// Server start time
    pub started_at: DateTime<Utc>,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
