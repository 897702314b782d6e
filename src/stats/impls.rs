//! Implementation blocks for statistics.

/// Constructors for `StatsAtomics`.
pub mod stats_atomics;

/// Statistics accessors on `ViewTracker`.
pub mod view_tracker;
