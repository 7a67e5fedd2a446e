//! Application context
//!
//! Holds the one navigation manager of the application. Built once at
//! bootstrap and injected where navigation is needed: Leptos context on the
//! client, axum state on the server. Clones share the same manager.

use std::sync::Arc;

use crate::navigation::{create_router, History, NavigationManager};
use crate::routes::RouteTable;

/// Shared, read-only application context
#[derive(Debug, Clone)]
pub struct AppContext {
    navigation: Arc<NavigationManager>,
}

impl AppContext {
    /// Build the standard route table under `base_url`
    pub fn new(base_url: &str) -> Self {
        let navigation = create_router(base_url);
        tracing::info!(
            base = %navigation.base(),
            routes = navigation.table().len(),
            "Route table initialized"
        );
        Self {
            navigation: Arc::new(navigation),
        }
    }

    /// Wrap an existing manager
    pub fn with_manager(navigation: NavigationManager) -> Self {
        Self {
            navigation: Arc::new(navigation),
        }
    }

    pub fn navigation(&self) -> &NavigationManager {
        &self.navigation
    }

    pub fn routes(&self) -> &RouteTable {
        self.navigation.table()
    }

    pub fn base(&self) -> &str {
        self.navigation.base()
    }

    /// New history session starting at `initial`
    pub fn history(&self, initial: &str) -> History<'_> {
        History::new(&self.navigation, initial)
    }
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.navigation, &other.navigation) || self.navigation == other.navigation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{ChartKind, RouteDescriptor};

    #[test]
    fn test_clones_share_manager() {
        let ctx = AppContext::new("/app");
        let clone = ctx.clone();
        assert!(std::ptr::eq(ctx.navigation(), clone.navigation()));
        assert_eq!(ctx, clone);
    }

    #[test]
    fn test_separate_contexts_are_equal() {
        assert_eq!(AppContext::new("/"), AppContext::new(""));
        assert_ne!(AppContext::new("/"), AppContext::new("/other"));
    }

    #[test]
    fn test_wrap_custom_manager() {
        let table = RouteTable::new(vec![
            RouteDescriptor::home(),
            RouteDescriptor::chart(ChartKind::Gauge),
        ])
        .unwrap();
        let ctx = AppContext::with_manager(NavigationManager::new("/dash", table));

        assert_eq!(ctx.base(), "/dash");
        assert_eq!(ctx.routes().len(), 2);
        assert_eq!(
            ctx.navigation().resolve("/dash/gauge-chart").map(|r| r.name()),
            Some("GaugeChart")
        );
        assert!(ctx.navigation().resolve("/dash/pie-chart").is_none());
        assert_ne!(ctx, AppContext::new("/dash"));
    }

    #[test]
    fn test_history_from_context() {
        let ctx = AppContext::new("/");
        let mut history = ctx.history("/");
        history.push("/scatter-chart").unwrap();
        assert_eq!(history.current().route_name, Some("ScatterChart"));
        assert_eq!(ctx.routes().len(), 9);
    }
}
