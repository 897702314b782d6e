//! Database connector structures.

/// Connector handed to the scheduler and the recovery loader.
pub mod database_connector;

/// SQLite-backed store.
pub mod database_connector_sqlite;
