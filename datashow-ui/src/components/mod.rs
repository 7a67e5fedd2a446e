//! UI Components
//!
//! Reusable Leptos components.

pub mod chart_card;
pub mod nav;

pub use chart_card::{chart_icon, ChartCard};
pub use nav::Nav;
