//! History-mode navigation manager
//!
//! Owns the route table and the application base prefix. Resolves browser
//! locations to routes and builds hrefs for named navigation.

use serde::Serialize;

use super::error::{NavigationError, NavigationResult};
use super::location::Location;
use crate::routes::{ChartKind, RouteDescriptor, RouteTable, ViewKind};

/// Result of resolving a location against the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRoute<'a> {
    /// Matched descriptor
    pub route: &'a RouteDescriptor,
    /// Location relative to the base
    pub location: Location,
    /// Full href including the base
    pub href: String,
}

impl ResolvedRoute<'_> {
    pub fn name(&self) -> &'static str {
        self.route.name
    }

    pub fn view(&self) -> ViewKind {
        self.route.view
    }
}

/// Resolves locations against a route table under a base prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationManager {
    base: String,
    table: RouteTable,
}

impl NavigationManager {
    /// Create a manager for `table` mounted under `base`
    pub fn new(base: &str, table: RouteTable) -> Self {
        let base = normalize_base(base);
        tracing::debug!(base = %base, routes = table.len(), "Navigation manager created");
        Self { base, table }
    }

    /// Normalized base prefix (`/` or `/segment` without trailing slash)
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Remove the base prefix from an absolute path
    ///
    /// Returns `None` when the path lies outside the base. The prefix is
    /// compared ignoring ASCII case, like route paths.
    pub fn strip_base<'p>(&self, path: &'p str) -> Option<&'p str> {
        if self.base == "/" {
            return Some(path);
        }
        let prefix = path.get(..self.base.len())?;
        if !prefix.eq_ignore_ascii_case(&self.base) {
            return None;
        }
        let rest = &path[self.base.len()..];
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            // "/appendix" is not under "/app"
            None
        }
    }

    /// Resolve a full browser location (base included)
    ///
    /// Query string and fragment are kept on the result but ignored for
    /// matching. Locations outside the base never match.
    pub fn resolve(&self, raw: &str) -> Option<ResolvedRoute<'_>> {
        let location = Location::parse(raw);
        let relative = self.strip_base(&location.path)?.to_string();
        self.resolve_location(location.with_path(relative))
    }

    /// Resolve a location that is already relative to the base
    pub fn resolve_relative(&self, raw: &str) -> Option<ResolvedRoute<'_>> {
        self.resolve_location(Location::parse(raw))
    }

    fn resolve_location(&self, location: Location) -> Option<ResolvedRoute<'_>> {
        let route = match self.table.match_path(&location.path) {
            Some(route) => route,
            None => {
                tracing::debug!(path = %location.path, "No match found for location");
                return None;
            }
        };
        let href = self.href_for_location(&location.with_path(route.path));
        Some(ResolvedRoute {
            route,
            location,
            href,
        })
    }

    /// Href for a named route
    pub fn href(&self, name: &str) -> NavigationResult<String> {
        self.table
            .by_name(name)
            .map(|route| self.href_for_path(route.path))
            .ok_or_else(|| NavigationError::UnknownRouteName(name.to_string()))
    }

    /// Href of the page showing `kind`
    pub fn chart_href(&self, kind: ChartKind) -> String {
        self.href_for_path(kind.path())
    }

    /// Prefix a base-relative path with the base
    pub fn href_for_path(&self, path: &str) -> String {
        if self.base == "/" {
            return path.to_string();
        }
        if path == "/" {
            // Home under a base keeps the trailing slash, e.g. "/app/"
            return format!("{}/", self.base);
        }
        format!("{}{}", self.base, path)
    }

    /// Prefix a base-relative location with the base, keeping query and fragment
    pub fn href_for_location(&self, location: &Location) -> String {
        location
            .with_path(self.href_for_path(&location.path))
            .to_string()
    }
}

/// Create the application's navigation manager: the standard table under `base`
pub fn create_router(base: &str) -> NavigationManager {
    NavigationManager::new(base, RouteTable::standard())
}

/// Empty means `/`; add a leading slash; drop trailing slashes
fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(""), "/");
        assert_eq!(normalize_base("/"), "/");
        assert_eq!(normalize_base("/app/"), "/app");
        assert_eq!(normalize_base("app"), "/app");
        assert_eq!(normalize_base("/nested/app//"), "/nested/app");
    }

    #[test]
    fn test_scenarios_at_root() {
        let router = create_router("/");
        assert_eq!(router.resolve("/").map(|r| r.name()), Some("Home"));
        assert_eq!(router.resolve("/gauge-chart").map(|r| r.name()), Some("GaugeChart"));
        assert!(router.resolve("/unknown").is_none());
        assert!(router.resolve("/nonexistent").is_none());
    }

    #[test]
    fn test_every_chart_mounts_chart_view() {
        let router = create_router("/");
        for kind in ChartKind::ALL {
            let resolved = router.resolve(kind.path()).unwrap();
            assert_eq!(resolved.name(), kind.route_name());
            assert_eq!(resolved.view(), ViewKind::Chart { chart: kind });
        }
    }

    #[test]
    fn test_resolve_ignores_query_and_hash() {
        let router = create_router("/");
        let resolved = router.resolve("/radar-chart?theme=dark#top").unwrap();
        assert_eq!(resolved.name(), "RadarChart");
        assert_eq!(resolved.location.query.as_deref(), Some("theme=dark"));
        assert_eq!(resolved.href, "/radar-chart?theme=dark#top");
    }

    #[test]
    fn test_resolve_under_base() {
        let router = create_router("/datashow/");
        assert_eq!(router.base(), "/datashow");
        assert_eq!(router.resolve("/datashow").map(|r| r.name()), Some("Home"));
        assert_eq!(router.resolve("/datashow/").map(|r| r.name()), Some("Home"));
        assert_eq!(
            router.resolve("/datashow/scatter-chart").map(|r| r.name()),
            Some("ScatterChart")
        );
        // Outside the base
        assert!(router.resolve("/scatter-chart").is_none());
        assert!(router.resolve("/datashowcase").is_none());
    }

    #[test]
    fn test_base_ignores_case() {
        let router = create_router("/datashow");
        assert_eq!(router.strip_base("/DataShow/pie-chart"), Some("/pie-chart"));
        assert_eq!(
            router.resolve("/DATASHOW/pie-chart").map(|r| r.name()),
            Some("PieChart")
        );
        assert!(router.resolve("/DATASHOWCASE").is_none());
    }

    #[test]
    fn test_repeated_trailing_slashes_do_not_match() {
        let router = create_router("/");
        assert!(router.resolve("//").is_none());
        assert!(router.resolve("/pie-chart///").is_none());

        let router = create_router("/datashow");
        assert_eq!(router.resolve("/datashow/").map(|r| r.name()), Some("Home"));
        assert!(router.resolve("/datashow//").is_none());
        assert!(router.resolve("/datashow/bar-chart//").is_none());
    }

    #[test]
    fn test_resolve_relative_skips_base() {
        let router = create_router("/datashow");
        let resolved = router.resolve_relative("/heatmap-chart").unwrap();
        assert_eq!(resolved.name(), "HeatmapChart");
        assert_eq!(resolved.href, "/datashow/heatmap-chart");
    }

    #[test]
    fn test_resolve_canonicalizes_href() {
        let router = create_router("/");
        let resolved = router.resolve("/FUNNEL-CHART/").unwrap();
        assert_eq!(resolved.name(), "FunnelChart");
        assert_eq!(resolved.location.path, "/FUNNEL-CHART/");
        assert_eq!(resolved.href, "/funnel-chart");
    }

    #[test]
    fn test_href_by_name() {
        let router = create_router("/app");
        assert_eq!(router.href("Home").unwrap(), "/app/");
        assert_eq!(router.href("LineChart").unwrap(), "/app/line-chart");
        assert_eq!(
            router.href("DonutChart").unwrap_err(),
            NavigationError::UnknownRouteName("DonutChart".to_string())
        );
        assert_eq!(router.chart_href(ChartKind::Bar), "/app/bar-chart");
    }

    #[test]
    fn test_href_at_root() {
        let router = create_router("");
        assert_eq!(router.href("Home").unwrap(), "/");
        assert_eq!(router.href("PieChart").unwrap(), "/pie-chart");
    }

    #[test]
    fn test_create_router_is_idempotent() {
        let a = create_router("/app");
        let b = create_router("/app");
        assert_eq!(a, b);
        assert_eq!(a.table().routes(), b.table().routes());
    }
}
