#![allow(dead_code)]
use std::sync::Arc;
use tempfile::TempDir;
use view_counter::config::structs::configuration::Configuration;
use view_counter::tracker::structs::view_tracker::ViewTracker;

pub type TestTracker = Arc<ViewTracker>;
pub type TestConfig = Arc<Configuration>;

/// Configuration pointing the store at a file inside `dir`.
pub fn create_test_config(dir: &TempDir) -> TestConfig {
    let mut config: Configuration = Configuration::init();
    config.database.path = dir.path().join("viewCounter.db").to_string_lossy().to_string();
    config.database.persistent_interval = 1;
    Arc::new(config)
}

pub fn create_test_tracker(config: TestConfig) -> TestTracker {
    Arc::new(ViewTracker::new(config))
}

pub fn create_memory_tracker() -> TestTracker {
    Arc::new(ViewTracker::new(Arc::new(Configuration::init())))
}

pub fn visitor_ip(i: usize) -> String {
    format!("10.{}.{}.{}", (i >> 16) & 0xff, (i >> 8) & 0xff, i & 0xff)
}
