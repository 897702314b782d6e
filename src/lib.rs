//! # View Counter
//!
//! An in-process page view and unique visitor counter whose state survives
//! restarts through periodic snapshots written to an embedded SQLite store.
//!
//! ## Overview
//!
//! Every recorded view increments a per-page counter and adds the visitor's
//! address to a set of unique visitors. A background task copies both
//! structures under their read locks at a fixed interval and writes them to
//! the store as JSON records. At startup the last written snapshot is loaded
//! back before any new view is accepted.
//!
//! ## Store layout
//!
//! One bucket (table `historicData` by default) holds three kinds of record:
//! - `current`: the latest page snapshot, `{"PageCounts":{...},"UniqueViews":n}`
//! - `IPs`: the latest visitor snapshot, `{"IPs":{"1.2.3.4":true}}`
//! - a day key (`ordinal * 10000 + year`, e.g. `52015`): the page snapshot of that day
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tokio::sync::watch;
//! use view_counter::config::structs::configuration::Configuration;
//! use view_counter::database::structs::database_connector::DatabaseConnector;
//! use view_counter::persistence::persistence::persistence_service;
//! use view_counter::tracker::structs::view_tracker::ViewTracker;
//!
//! let config = Arc::new(Configuration::init());
//! let tracker = Arc::new(ViewTracker::new(config.clone()));
//! tracker.check_for_records().await?;
//!
//! let connector = DatabaseConnector::new(config).await?;
//! let (tx, rx) = watch::channel(false);
//! let handle = persistence_service(tracker.clone(), connector, rx).await;
//!
//! tracker.record_view("1.2.3.4", "home");
//!
//! tx.send(true)?;
//! handle.await?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup, day keys and the shared error type
//! - [`config`] - Configuration loading, saving and validation
//! - [`counter`] - Concurrent page counts
//! - [`database`] - The SQLite key-value store
//! - [`persistence`] - Flush scheduler and startup recovery
//! - [`snapshot`] - JSON codec for persisted records
//! - [`stats`] - Runtime counters
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - The aggregate holding counts, visitors and stats
//! - [`visitors`] - Concurrent set of unique visitor addresses

/// Common utilities and shared functionality.
///
/// Contains logging setup, log level parsing, the day key used for daily
/// history records and the crate's generic error type.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing and validating configuration from a TOML file,
/// with defaults for every field.
pub mod config;

/// Concurrent mapping of page identifiers to view counts.
pub mod counter;

/// Embedded key-value store backed by SQLite.
///
/// Exposes the three operations persistence needs (get one record, write a
/// batch of records atomically, close) behind the `DatabaseBackend` trait.
pub mod database;

/// Periodic flush scheduler and startup recovery.
///
/// Writes consistent snapshots to the store on a fixed interval and loads the
/// last one back before any view is recorded.
pub mod persistence;

/// JSON codec for the page and visitor snapshots.
pub mod snapshot;

/// Statistics tracking module.
///
/// Counts pages, visitors, views and flush outcomes for the console report.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Core tracker module.
///
/// Contains `ViewTracker`, the aggregate that records views, answers count
/// queries and produces consistent snapshots for persistence.
pub mod tracker;

/// Concurrent set of unique visitor identifiers.
pub mod visitors;
