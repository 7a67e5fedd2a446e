//! Route table
//!
//! Ordered, immutable list of route descriptors. Built once at startup and
//! handed to the navigation manager.

use std::collections::HashSet;

use super::chart_kind::ChartKind;
use super::descriptor::RouteDescriptor;
use super::error::{RouteError, RouteResult};

/// Ordered set of routes with unique paths and names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    /// Build a table from a custom descriptor list
    ///
    /// Fails on relative paths, duplicate paths and duplicate names. Paths
    /// are compared case-insensitively and without trailing slash, the same
    /// way they are matched.
    pub fn new(routes: Vec<RouteDescriptor>) -> RouteResult<Self> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();

        for route in &routes {
            if !route.path.starts_with('/') {
                return Err(RouteError::InvalidPath(route.path.to_string()));
            }
            if !paths.insert(normalize_path(route.path)) {
                return Err(RouteError::DuplicatePath(route.path.to_string()));
            }
            if !names.insert(route.name) {
                return Err(RouteError::DuplicateName(route.name.to_string()));
            }
        }

        Ok(Self { routes })
    }

    /// The application's table: home followed by one route per chart kind
    pub fn standard() -> Self {
        let routes = std::iter::once(RouteDescriptor::home())
            .chain(ChartKind::ALL.into_iter().map(RouteDescriptor::chart))
            .collect();
        Self { routes }
    }

    /// Descriptors in declaration order
    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Look up a route by name (exact, case-sensitive)
    pub fn by_name(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Route that shows the given chart kind
    pub fn by_chart(&self, kind: ChartKind) -> Option<&RouteDescriptor> {
        self.routes
            .iter()
            .find(|r| r.view.chart_kind() == Some(kind))
    }

    /// First route whose path matches, ignoring case and a trailing slash
    ///
    /// `path` must already be relative to the application base and free of
    /// query string and fragment.
    pub fn match_path(&self, path: &str) -> Option<&RouteDescriptor> {
        let wanted = normalize_path(path);
        self.routes
            .iter()
            .find(|r| normalize_path(r.path) == wanted)
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteDescriptor;
    type IntoIter = std::slice::Iter<'a, RouteDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

/// Comparison key: lowercase with a leading slash and at most one trailing
/// slash dropped
///
/// The root (`/` or empty) becomes the empty key, so `//` keeps a slash and
/// matches nothing.
fn normalize_path(path: &str) -> String {
    let mut key = path.to_ascii_lowercase();
    if !key.is_empty() && !key.starts_with('/') {
        key.insert(0, '/');
    }
    if key.ends_with('/') {
        key.pop();
    }
    key
}
