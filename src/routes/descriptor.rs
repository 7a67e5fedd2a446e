//! Route descriptors
//!
//! One row of the route table: a path, a name and the view it mounts.

use serde::Serialize;

use super::chart_kind::ChartKind;

/// The view a route mounts
///
/// `Home` is a concrete page. Every chart route mounts the same chart page,
/// parameterized by the kind carried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "component")]
pub enum ViewKind {
    Home,
    #[serde(rename = "ChartView")]
    Chart { chart: ChartKind },
}

impl ViewKind {
    /// Name of the view component
    pub fn component_name(self) -> &'static str {
        match self {
            ViewKind::Home => "Home",
            ViewKind::Chart { .. } => "ChartView",
        }
    }

    /// Chart kind, if this is the chart view
    pub fn chart_kind(self) -> Option<ChartKind> {
        match self {
            ViewKind::Home => None,
            ViewKind::Chart { chart } => Some(chart),
        }
    }
}

impl From<ChartKind> for ViewKind {
    fn from(chart: ChartKind) -> Self {
        ViewKind::Chart { chart }
    }
}

/// A single route: path and name bound to a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RouteDescriptor {
    /// Absolute URL path, unique within a table
    pub path: &'static str,
    /// Name used for programmatic navigation, unique within a table
    pub name: &'static str,
    /// View mounted when the route matches
    #[serde(flatten)]
    pub view: ViewKind,
}

impl RouteDescriptor {
    pub const fn new(path: &'static str, name: &'static str, view: ViewKind) -> Self {
        Self { path, name, view }
    }

    /// Descriptor for the home page
    pub const fn home() -> Self {
        Self::new("/", "Home", ViewKind::Home)
    }

    /// Descriptor for a chart page
    pub fn chart(kind: ChartKind) -> Self {
        Self::new(kind.path(), kind.route_name(), ViewKind::Chart { chart: kind })
    }
}
