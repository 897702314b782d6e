//! Implementation blocks for the database connectors.

pub mod database_connector;
pub mod database_connector_sqlite;
