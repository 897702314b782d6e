use std::sync::Arc;
use log::info;
use crate::config::structs::configuration::Configuration;
use crate::counter::structs::page_counter::PageCounter;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::view_tracker::ViewTracker;
use crate::visitors::structs::visitor_set::VisitorSet;

impl ViewTracker {
    pub fn new(config: Arc<Configuration>) -> ViewTracker
    {
        ViewTracker {
            config,
            pages: Arc::new(PageCounter::new()),
            visitors: Arc::new(VisitorSet::new()),
            stats: Arc::new(StatsAtomics::new()),
        }
    }

    /// Counts one view of `page` by `visitor`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn record_view(&self, visitor: &str, page: &str)
    {
        info!("{visitor} requests {page}");

        let (_, created) = self.pages.increment(page);
        if created {
            self.update_stats(StatsEvent::Pages, 1);
        }
        self.update_stats(StatsEvent::Views, 1);

        if self.visitors.record(visitor) {
            self.update_stats(StatsEvent::Visitors, 1);
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn add_page(&self, page: &str)
    {
        if self.pages.add_page(page) {
            self.update_stats(StatsEvent::Pages, 1);
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn delete_page(&self, page: &str)
    {
        if self.pages.delete_page(page) {
            self.update_stats(StatsEvent::Pages, -1);
        }
    }

    pub fn get_count(&self, page: &str) -> (u64, bool)
    {
        self.pages.get_count(page)
    }

    pub fn get_unique_visitor_count(&self) -> u64
    {
        self.visitors.count() as u64
    }
}
