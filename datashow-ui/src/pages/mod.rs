//! Pages
//!
//! Top-level views the route table binds to.

pub mod chart_view;
pub mod home;
pub mod not_found;

pub use chart_view::ChartView;
pub use home::Home;
pub use not_found::NotFound;
