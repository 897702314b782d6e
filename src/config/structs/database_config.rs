use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Path of the store file on disk.
    pub path: String,
    /// Seconds between two flushes of the in-memory state.
    pub persistent_interval: u64
}
