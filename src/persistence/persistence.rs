use std::sync::Arc;
use std::time::Instant;
use chrono::Utc;
use log::{error, info};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use crate::common::common::current_day_key;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::persistence::errors::PersistenceError;
use crate::persistence::{CURRENT_KEY, VISITORS_KEY};
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::view_tracker::ViewTracker;

impl ViewTracker {
    /// One flush under today's day key.
    pub async fn flush_snapshot(&self, connector: &DatabaseConnector) -> Result<(), PersistenceError>
    {
        self.flush_snapshot_at(connector, &current_day_key()).await
    }

    /// Snapshots both structures and writes the day record, `current` and
    /// `IPs` in a single transaction.
    #[tracing::instrument(level = "debug", skip(self, connector))]
    pub async fn flush_snapshot_at(&self, connector: &DatabaseConnector, day_key: &str) -> Result<(), PersistenceError>
    {
        let start = Instant::now();
        info!("[PERSIST] Tick, saving snapshot under day key {day_key}");

        match self.write_snapshot(connector, day_key).await {
            Ok(_) => {
                self.update_stats(StatsEvent::Flushes, 1);
                info!("[PERSIST] Snapshot saved in {:?}", start.elapsed());
                Ok(())
            }
            Err(e) => {
                self.update_stats(StatsEvent::FlushFailures, 1);
                error!("[PERSIST] Unable to save snapshot: {e}");
                Err(e)
            }
        }
    }

    async fn write_snapshot(&self, connector: &DatabaseConnector, day_key: &str) -> Result<(), PersistenceError>
    {
        let (page_snapshot, visitor_snapshot) = self.take_snapshot();
        let page_data = page_snapshot.encode()?;
        let visitor_data = visitor_snapshot.encode()?;

        connector.save_records(vec![
            (day_key.to_string(), page_data.clone()),
            (CURRENT_KEY.to_string(), page_data),
            (VISITORS_KEY.to_string(), visitor_data),
        ]).await?;
        Ok(())
    }
}

/// Spawns the background flush loop. The first flush happens one interval
/// after start. Sending `true` (or dropping the sender) stops the loop after
/// a final flush; the connector is closed on the way out.
pub async fn persistence_service(tracker: Arc<ViewTracker>, connector: DatabaseConnector, mut rx: watch::Receiver<bool>) -> JoinHandle<()>
{
    let period = tracker.config.flush_interval();
    let period_secs = period.as_secs() as i64;
    info!("[BOOT] Starting thread for persistence with {} seconds delay...", period.as_secs());

    tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracker.set_stats(StatsEvent::TimestampSave, Utc::now().timestamp() + period_secs);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    tracker.set_stats(StatsEvent::TimestampSave, Utc::now().timestamp() + period_secs);
                    let _ = tracker.flush_snapshot(&connector).await;
                }
                changed = rx.changed() => {
                    if changed.is_ok() && !*rx.borrow() {
                        continue;
                    }
                    info!("[BOOT] Shutting down thread for persistence...");
                    info!("[PERSIST] Saving final snapshot...");
                    let _ = tracker.flush_snapshot(&connector).await;
                    connector.close().await;
                    return;
                }
            }
        }
    })
}
