//! Chart kinds
//!
//! The closed set of charts the application can show. A single chart page
//! is shared by every kind; the kind is what tells it which one to render.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::error::RouteError;

/// Chart type shown by the shared chart page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
    Radar,
    Scatter,
    Heatmap,
    Funnel,
    Gauge,
}

impl ChartKind {
    /// All kinds, in route table order
    pub const ALL: [ChartKind; 8] = [
        ChartKind::Pie,
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Radar,
        ChartKind::Scatter,
        ChartKind::Heatmap,
        ChartKind::Funnel,
        ChartKind::Gauge,
    ];

    /// Short lowercase identifier (`pie`, `bar`, ...)
    pub fn slug(self) -> &'static str {
        match self {
            ChartKind::Pie => "pie",
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Radar => "radar",
            ChartKind::Scatter => "scatter",
            ChartKind::Heatmap => "heatmap",
            ChartKind::Funnel => "funnel",
            ChartKind::Gauge => "gauge",
        }
    }

    /// Name of the route that shows this chart
    pub fn route_name(self) -> &'static str {
        match self {
            ChartKind::Pie => "PieChart",
            ChartKind::Bar => "BarChart",
            ChartKind::Line => "LineChart",
            ChartKind::Radar => "RadarChart",
            ChartKind::Scatter => "ScatterChart",
            ChartKind::Heatmap => "HeatmapChart",
            ChartKind::Funnel => "FunnelChart",
            ChartKind::Gauge => "GaugeChart",
        }
    }

    /// Path of the route that shows this chart
    pub fn path(self) -> &'static str {
        match self {
            ChartKind::Pie => "/pie-chart",
            ChartKind::Bar => "/bar-chart",
            ChartKind::Line => "/line-chart",
            ChartKind::Radar => "/radar-chart",
            ChartKind::Scatter => "/scatter-chart",
            ChartKind::Heatmap => "/heatmap-chart",
            ChartKind::Funnel => "/funnel-chart",
            ChartKind::Gauge => "/gauge-chart",
        }
    }

    /// Human readable title
    pub fn title(self) -> &'static str {
        match self {
            ChartKind::Pie => "Pie Chart",
            ChartKind::Bar => "Bar Chart",
            ChartKind::Line => "Line Chart",
            ChartKind::Radar => "Radar Chart",
            ChartKind::Scatter => "Scatter Chart",
            ChartKind::Heatmap => "Heatmap Chart",
            ChartKind::Funnel => "Funnel Chart",
            ChartKind::Gauge => "Gauge Chart",
        }
    }

    /// One-line description shown on the home page and chart header
    pub fn description(self) -> &'static str {
        match self {
            ChartKind::Pie => "Parts of a whole as slices of a circle",
            ChartKind::Bar => "Compare values across categories",
            ChartKind::Line => "Trends over an ordered axis",
            ChartKind::Radar => "Several dimensions on radial axes",
            ChartKind::Scatter => "Correlation between two variables",
            ChartKind::Heatmap => "Magnitude as color over a grid",
            ChartKind::Funnel => "Drop-off between sequential stages",
            ChartKind::Gauge => "A single value against a range",
        }
    }

    /// Position in table order
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).unwrap_or(0)
    }

    /// Previous kind in table order, wrapping around
    pub fn prev(self) -> ChartKind {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    /// Next kind in table order, wrapping around
    pub fn next(self) -> ChartKind {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ChartKind {
    type Err = RouteError;

    /// Accepts `pie`, `pie-chart`, `/pie-chart` or `PieChart`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().trim_start_matches('/');
        Self::ALL
            .into_iter()
            .find(|kind| {
                needle.eq_ignore_ascii_case(kind.slug())
                    || needle.eq_ignore_ascii_case(kind.route_name())
                    || needle.eq_ignore_ascii_case(&kind.path()[1..])
            })
            .ok_or_else(|| RouteError::UnknownChartKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_derive_from_slug() {
        for kind in ChartKind::ALL {
            assert_eq!(kind.path(), format!("/{}-chart", kind.slug()));
            assert!(kind.route_name().ends_with("Chart"));
        }
    }

    #[test]
    fn test_parse_accepts_all_spellings() {
        assert_eq!("pie".parse::<ChartKind>().unwrap(), ChartKind::Pie);
        assert_eq!("HEATMAP".parse::<ChartKind>().unwrap(), ChartKind::Heatmap);
        assert_eq!("funnel-chart".parse::<ChartKind>().unwrap(), ChartKind::Funnel);
        assert_eq!("/gauge-chart".parse::<ChartKind>().unwrap(), ChartKind::Gauge);
        assert_eq!("RadarChart".parse::<ChartKind>().unwrap(), ChartKind::Radar);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "donut".parse::<ChartKind>().unwrap_err();
        assert!(matches!(err, RouteError::UnknownChartKind(ref s) if s == "donut"));
    }

    #[test]
    fn test_prev_next_wrap() {
        assert_eq!(ChartKind::Pie.prev(), ChartKind::Gauge);
        assert_eq!(ChartKind::Gauge.next(), ChartKind::Pie);
        assert_eq!(ChartKind::Bar.next(), ChartKind::Line);
        for kind in ChartKind::ALL {
            assert_eq!(kind.next().prev(), kind);
        }
    }

    #[test]
    fn test_serializes_as_slug() {
        let json = serde_json::to_string(&ChartKind::Scatter).unwrap();
        assert_eq!(json, "\"scatter\"");
    }
}
