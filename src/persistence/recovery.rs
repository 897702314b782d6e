use log::{error, info, warn};
use crate::database::errors::DatabaseError;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::persistence::{CURRENT_KEY, VISITORS_KEY};
use crate::snapshot::structs::page_snapshot::PageSnapshot;
use crate::snapshot::structs::visitor_snapshot::VisitorSnapshot;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::view_tracker::ViewTracker;

impl ViewTracker {
    /// Loads the last persisted state when the store file exists.
    ///
    /// Returns the number of pages and visitors restored. Only a store that
    /// exists but cannot be opened is an error; the store is closed again
    /// before returning.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn check_for_records(&self) -> Result<(u64, u64), DatabaseError>
    {
        let path = &self.config.database.path;
        if !DatabaseConnector::exists(&self.config) {
            info!("[RECOVERY] {path} not present; starting with empty counters");
            return Ok((0, 0));
        }

        info!("[RECOVERY] {path} already exists; processing old entries");
        let connector = DatabaseConnector::new(self.config.clone()).await?;
        let loaded = self.load_records(&connector).await;
        connector.close().await;
        Ok(loaded)
    }

    /// Reads `current` and `IPs` and applies whatever decodes. Read and decode
    /// failures are logged and leave the affected structure as it was.
    pub async fn load_records(&self, connector: &DatabaseConnector) -> (u64, u64)
    {
        let pages = match connector.get_record(CURRENT_KEY).await {
            Ok(Some(data)) => match PageSnapshot::decode(&data) {
                Ok(snapshot) => self.restore_pages(snapshot),
                Err(e) => {
                    error!("[RECOVERY] Skipping {CURRENT_KEY} record: {e}");
                    0
                }
            },
            Ok(None) => {
                warn!("[RECOVERY] No {CURRENT_KEY} record found");
                0
            }
            Err(e) => {
                error!("[RECOVERY] Unable to read {CURRENT_KEY} record: {e}");
                0
            }
        };

        let visitors = match connector.get_record(VISITORS_KEY).await {
            Ok(Some(data)) => match VisitorSnapshot::decode(&data) {
                Ok(snapshot) => self.restore_visitors(snapshot),
                Err(e) => {
                    error!("[RECOVERY] Skipping {VISITORS_KEY} record: {e}");
                    0
                }
            },
            Ok(None) => {
                warn!("[RECOVERY] No {VISITORS_KEY} record found");
                0
            }
            Err(e) => {
                error!("[RECOVERY] Unable to read {VISITORS_KEY} record: {e}");
                0
            }
        };

        info!("[RECOVERY] Loaded {pages} pages and {visitors} visitors");
        (pages, visitors)
    }

    /// Assigns every persisted count as-is.
    pub fn restore_pages(&self, snapshot: PageSnapshot) -> u64
    {
        let mut restored = 0u64;
        for (page, count) in snapshot.page_counts {
            if self.pages.set_count(&page, count) {
                self.update_stats(StatsEvent::Pages, 1);
            }
            restored += 1;
        }
        restored
    }

    pub fn restore_visitors(&self, snapshot: VisitorSnapshot) -> u64
    {
        let mut restored = 0u64;
        for visitor in snapshot.visitors {
            if self.visitors.record(&visitor) {
                self.update_stats(StatsEvent::Visitors, 1);
            }
            restored += 1;
        }
        restored
    }
}
