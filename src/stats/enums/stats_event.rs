//! Statistics event types.

use serde::{Deserialize, Serialize};

/// Each variant names one counter in `StatsAtomics`. Used with
/// `ViewTracker::update_stats()` and `ViewTracker::set_stats()`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    TimestampSave,
    Pages,
    Visitors,
    Views,
    Flushes,
    FlushFailures,
}
