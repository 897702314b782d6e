//! Implementation blocks for the view tracker.

/// Construction, counting and query operations.
pub mod view_tracker;

/// Consistent snapshots of both live structures.
pub mod view_tracker_snapshot;
