//! Persistence scheduler and recovery loader.
//!
//! At startup `ViewTracker::check_for_records` repopulates the live
//! structures from the store, once and before any view is recorded. Then
//! `persistence_service` runs in the background and flushes a consistent
//! snapshot every `database.persistent_interval` seconds until it is told to
//! stop through its watch channel.
//!
//! # Failure handling
//!
//! - Store cannot be opened: returned to the caller, which treats it as fatal
//! - Record present but undecodable: logged, recovery continues
//! - Flush fails: logged and counted, the next tick tries again

/// Persistence error types.
pub mod errors;

/// The background flush loop.
#[allow(clippy::module_inception)]
pub mod persistence;

/// Startup recovery from the store.
pub mod recovery;


/// Key of the most recent page snapshot.
pub const CURRENT_KEY: &str = "current";

/// Key of the most recent visitor snapshot.
pub const VISITORS_KEY: &str = "IPs";
