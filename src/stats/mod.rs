//! Real-time statistics for the view counter.
//!
//! Atomic counters updated alongside the live structures and the
//! persistence cycle, so reading them never touches the structure locks.
//!
//! - Pages, unique visitors and total recorded views
//! - Successful and failed flushes, and when the next flush is due
//!
//! # Example
//!
//! ```rust,ignore
//! use view_counter::stats::enums::stats_event::StatsEvent;
//!
//! tracker.update_stats(StatsEvent::Views, 1);
//! let stats = tracker.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshot).
pub mod structs;
