use std::sync::atomic::AtomicI64;

#[derive(Debug)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub timestamp_run_save: AtomicI64,
    pub pages: AtomicI64,
    pub visitors: AtomicI64,
    pub views: AtomicI64,
    pub flushes: AtomicI64,
    pub flush_failures: AtomicI64,
}
