//! Navigation
//!
//! History-mode navigation over the route table: base-prefix handling,
//! location resolution, hrefs for named routes and history sessions.

pub mod error;
pub mod history;
pub mod location;
pub mod manager;

pub use error::{NavigationError, NavigationResult};
pub use history::{History, HistoryEntry, NavigationTarget};
pub use location::Location;
pub use manager::{create_router, NavigationManager, ResolvedRoute};
