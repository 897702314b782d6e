//! Durable store adapter.
//!
//! The store is an embedded SQLite file holding a single bucket (table)
//! of key/value records. The rest of the crate only talks to it through
//! [`DatabaseConnector`](structs::database_connector::DatabaseConnector),
//! which wraps any [`DatabaseBackend`](traits::database_backend::DatabaseBackend).
//!
//! # Records
//!
//! - `current` - latest page snapshot, overwritten on every flush
//! - `IPs` - latest visitor snapshot, overwritten on every flush
//! - `<day_of_year * 10000 + year>` - last page snapshot of that day

/// Store error types.
pub mod errors;
pub mod impls;
pub mod structs;
pub mod traits;
