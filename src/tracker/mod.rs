//! The view tracker service object.
//!
//! `ViewTracker` owns the counting store and the visitor set and is the
//! entry point for request handlers (`record_view`), administrative callers
//! (`add_page`, `delete_page`) and reporting (`get_count`,
//! `get_unique_visitor_count`). It is created explicitly and shared behind an
//! `Arc`; there is no process-global state.
//!
//! # Locking
//!
//! The page counts and the visitor set have independent locks. A
//! `record_view` updates them one after the other, so a snapshot taken at the
//! same moment may see the new count without the new visitor (or the
//! reverse). Unique visitor accounting is approximate by nature and this
//! window is accepted.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use view_counter::config::structs::configuration::Configuration;
//! use view_counter::tracker::structs::view_tracker::ViewTracker;
//!
//! let tracker = Arc::new(ViewTracker::new(Arc::new(Configuration::init())));
//! tracker.record_view("1.2.3.4", "home");
//! assert_eq!(tracker.get_count("home"), (1, true));
//! ```

/// Implementation blocks for the tracker.
pub mod impls;

/// Tracker data structures.
pub mod structs;
