//! Route table
//!
//! Declares every navigable path of the application and the view bound to
//! it.
//!
//! | Path | Name | View |
//! |---|---|---|
//! | `/` | Home | Home |
//! | `/pie-chart` | PieChart | ChartView |
//! | `/bar-chart` | BarChart | ChartView |
//! | `/line-chart` | LineChart | ChartView |
//! | `/radar-chart` | RadarChart | ChartView |
//! | `/scatter-chart` | ScatterChart | ChartView |
//! | `/heatmap-chart` | HeatmapChart | ChartView |
//! | `/funnel-chart` | FunnelChart | ChartView |
//! | `/gauge-chart` | GaugeChart | ChartView |

pub mod chart_kind;
pub mod descriptor;
pub mod error;
pub mod table;

pub use chart_kind::ChartKind;
pub use descriptor::{RouteDescriptor, ViewKind};
pub use error::{RouteError, RouteResult};
pub use table::RouteTable;
