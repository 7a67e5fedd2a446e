//! Request handlers organized by functionality.

pub mod health;
pub mod routes;
pub mod spa;
