use std::sync::atomic::AtomicI64;
use chrono::Utc;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> StatsAtomics
    {
        StatsAtomics {
            started: AtomicI64::new(Utc::now().timestamp()),
            timestamp_run_save: AtomicI64::new(0),
            pages: AtomicI64::new(0),
            visitors: AtomicI64::new(0),
            views: AtomicI64::new(0),
            flushes: AtomicI64::new(0),
            flush_failures: AtomicI64::new(0),
        }
    }
}

impl Default for StatsAtomics {
    fn default() -> Self {
        StatsAtomics::new()
    }
}
