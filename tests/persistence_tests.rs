mod common;

use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::watch;
use view_counter::common::common::current_day_key;
use view_counter::database::structs::database_connector::DatabaseConnector;
use view_counter::persistence::persistence::persistence_service;
use view_counter::snapshot::structs::page_snapshot::PageSnapshot;

#[tokio::test]
async fn test_flush_then_recover() {
    let dir = TempDir::new().unwrap();
    let config = common::create_test_config(&dir);

    let tracker = common::create_test_tracker(config.clone());
    tracker.record_view("1.2.3.4", "home");
    tracker.record_view("1.2.3.4", "home");
    tracker.record_view("5.6.7.8", "home");
    tracker.record_view("1.2.3.4", "home");

    let connector = DatabaseConnector::new(config.clone()).await.unwrap();
    tracker.flush_snapshot(&connector).await.unwrap();
    connector.close().await;

    let restarted = common::create_test_tracker(config);
    assert_eq!(restarted.check_for_records().await.unwrap(), (1, 2));
    assert_eq!(restarted.get_count("home"), (4, true));
    assert_eq!(restarted.get_unique_visitor_count(), 2);

    restarted.record_view("1.2.3.4", "home");
    assert_eq!(restarted.get_count("home"), (5, true));
    assert_eq!(restarted.get_unique_visitor_count(), 2);
}

#[tokio::test]
async fn test_first_run_without_store() {
    let dir = TempDir::new().unwrap();
    let tracker = common::create_test_tracker(common::create_test_config(&dir));

    assert_eq!(tracker.check_for_records().await.unwrap(), (0, 0));
    assert_eq!(tracker.get_count("home"), (0, false));
    assert_eq!(tracker.get_unique_visitor_count(), 0);
}

#[tokio::test]
async fn test_malformed_current_starts_empty() {
    let dir = TempDir::new().unwrap();
    let config = common::create_test_config(&dir);

    let connector = DatabaseConnector::new(config.clone()).await.unwrap();
    connector.save_records(vec![(String::from("current"), b"not a snapshot".to_vec())]).await.unwrap();
    connector.close().await;

    let tracker = common::create_test_tracker(config);
    assert_eq!(tracker.check_for_records().await.unwrap(), (0, 0));
    assert_eq!(tracker.get_count("home"), (0, false));

    tracker.record_view("1.2.3.4", "home");
    assert_eq!(tracker.get_count("home"), (1, true));
}

#[tokio::test]
async fn test_flush_writes_day_record() {
    let dir = TempDir::new().unwrap();
    let config = common::create_test_config(&dir);
    let tracker = common::create_test_tracker(config.clone());
    tracker.record_view("1.2.3.4", "home");

    let connector = DatabaseConnector::new(config).await.unwrap();
    tracker.flush_snapshot_at(&connector, "52015").await.unwrap();

    let day = connector.get_record("52015").await.unwrap().expect("day record should be written");
    let current = connector.get_record("current").await.unwrap().expect("current record should be written");
    assert_eq!(day, current);
    assert_eq!(PageSnapshot::decode(&day).unwrap().page_counts.get("home"), Some(&1));
    connector.close().await;
}

#[tokio::test]
async fn test_service_saves_on_shutdown() {
    let dir = TempDir::new().unwrap();
    let config = common::create_test_config(&dir);
    let tracker = common::create_test_tracker(config.clone());

    let connector = DatabaseConnector::new(config.clone()).await.unwrap();
    let (tx, rx) = watch::channel(false);
    let handle = persistence_service(tracker.clone(), connector, rx).await;

    tracker.record_view("1.2.3.4", "home");
    tracker.record_view("5.6.7.8", "about");
    tx.send(true).unwrap();
    handle.await.unwrap();
    assert!(tracker.get_stats().flushes >= 1);

    let restarted = common::create_test_tracker(config.clone());
    restarted.check_for_records().await.unwrap();
    assert_eq!(restarted.get_count("home"), (1, true));
    assert_eq!(restarted.get_count("about"), (1, true));
    assert_eq!(restarted.get_unique_visitor_count(), 2);

    let connector = DatabaseConnector::new(config).await.unwrap();
    assert!(connector.get_record(&current_day_key()).await.unwrap().is_some());
    connector.close().await;
}

#[tokio::test]
async fn test_service_flushes_periodically() {
    let dir = TempDir::new().unwrap();
    let config = common::create_test_config(&dir);
    let tracker = common::create_test_tracker(config.clone());

    let connector = DatabaseConnector::new(config).await.unwrap();
    let (tx, rx) = watch::channel(false);
    let handle = persistence_service(tracker.clone(), connector, rx).await;

    tracker.record_view("1.2.3.4", "home");
    tokio::time::sleep(Duration::from_millis(2500)).await;
    assert!(tracker.get_stats().flushes >= 2, "Expected at least two periodic flushes");

    tx.send(true).unwrap();
    handle.await.unwrap();
}
