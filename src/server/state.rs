//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::context::AppContext;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Route table and navigation manager
    pub context: AppContext,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start time reported by the health endpoint
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Build state from the server configuration
    pub fn new(config: ServerConfig) -> Self {
        let context = AppContext::new(&config.base_url);
        Self::with_context(context, config)
    }

    /// Build state around an existing context
    pub fn with_context(context: AppContext, config: ServerConfig) -> Self {
        Self {
            context,
            config: Arc::new(config),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Whether the bundle's `index.html` is present
    pub async fn bundle_available(&self) -> bool {
        tokio::fs::metadata(self.config.index_file())
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
    }
}
