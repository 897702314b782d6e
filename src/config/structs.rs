//! Configuration data structures.

/// Top-level configuration.
pub mod configuration;

/// Store location and flush settings.
pub mod database_config;

/// Bucket (table) and column names inside the store.
pub mod database_structure_config;
