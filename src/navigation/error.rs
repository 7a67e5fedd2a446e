//! Navigation error types

use thiserror::Error;

/// Errors raised by the navigation manager
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// Named navigation to a name that is not in the table
    #[error("No route named {0:?}")]
    UnknownRouteName(String),
}

/// Result type for navigation operations
pub type NavigationResult<T> = Result<T, NavigationError>;
