use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_save: i64,
    pub pages: i64,
    pub visitors: i64,
    pub views: i64,
    pub flushes: i64,
    pub flush_failures: i64,
}
