//! Data structures for the view tracker.

/// The service object owning the live structures.
pub mod view_tracker;
