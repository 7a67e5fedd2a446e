//! # DataShow
//!
//! Route table and history-mode navigation for the DataShow single-page
//! charting application, plus the server that hosts its bundle.
//!
//! ## Modules
//!
//! - [`routes`]: The route table and the chart kinds it exposes
//! - [`navigation`]: Base prefix handling, location resolution, history
//! - [`context`]: The application context that owns the navigation manager
//! - `config`, `logging`, `server`: Hosting (feature `server`, on by default)
//!
//! ## Quick Start
//!
//! ```rust
//! use datashow::{AppContext, ChartKind, ViewKind};
//!
//! let ctx = AppContext::new("/");
//!
//! let resolved = ctx.navigation().resolve("/gauge-chart").unwrap();
//! assert_eq!(resolved.name(), "GaugeChart");
//! assert_eq!(resolved.view(), ViewKind::Chart { chart: ChartKind::Gauge });
//!
//! assert!(ctx.navigation().resolve("/unknown").is_none());
//! ```

pub mod context;
pub mod navigation;
pub mod routes;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod logging;
#[cfg(feature = "server")]
pub mod server;

// Re-export top-level types for convenience
pub use context::AppContext;

pub use routes::{ChartKind, RouteDescriptor, RouteError, RouteResult, RouteTable, ViewKind};

pub use navigation::{
    create_router, History, HistoryEntry, Location, NavigationError, NavigationManager,
    NavigationResult, NavigationTarget, ResolvedRoute,
};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError, LogFormat, LoggingConfig, ServerConfig};

#[cfg(feature = "server")]
pub use server::{build_router, serve, AppState, ServerError};
