//! Application state management.
//!
//! This module defines the shared application state passed to all request
//! handlers.

/// Shared application state.
///
/// This struct is cloned for each handler (inexpensive Arc clones), providing
/// access to:
/// - Application configuration
/// - PostgreSQL database connection pool
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
}
