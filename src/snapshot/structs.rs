//! Snapshot record structures.

/// Page counts plus the unique visitor count.
pub mod page_snapshot;

/// Full copy of the visitor set.
pub mod visitor_snapshot;
