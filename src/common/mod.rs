//! Common utilities and shared functionality.
//!
//! Helpers used across the other modules:
//!
//! - Logging setup (`fern` dispatch on top of the `log` facade)
//! - Day-bucket key derivation for the historical snapshots
//! - `CustomError`, the error type used by the CLI flow
//!
//! # Example
//!
//! ```rust,ignore
//! use view_counter::common::common::{day_key, setup_logging};
//!
//! setup_logging(&config);
//! let key = day_key(chrono::NaiveDate::from_ymd_opt(2015, 1, 5).unwrap());
//! assert_eq!(key, "52015");
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
