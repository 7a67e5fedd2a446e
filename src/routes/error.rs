//! Route table error types

use thiserror::Error;

/// Errors raised while building or querying a route table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Two descriptors declare the same path
    #[error("Duplicate route path: {0}")]
    DuplicatePath(String),

    /// Two descriptors declare the same name
    #[error("Duplicate route name: {0}")]
    DuplicateName(String),

    /// Path is not absolute
    #[error("Invalid route path {0:?}: must start with '/'")]
    InvalidPath(String),

    /// String does not name a chart kind
    #[error("Unknown chart kind: {0}")]
    UnknownChartKind(String),
}

/// Result type for route table operations
pub type RouteResult<T> = Result<T, RouteError>;
