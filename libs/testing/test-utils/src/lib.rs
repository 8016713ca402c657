//! Shared test infrastructure
//!
//! Provides a testcontainers-backed PostgreSQL fixture for integration tests.

pub mod postgres;

pub use postgres::TestDatabase;
