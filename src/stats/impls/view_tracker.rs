use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::view_tracker::ViewTracker;

impl ViewTracker {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            timestamp_run_save: self.stats.timestamp_run_save.load(Ordering::SeqCst),
            pages: self.stats.pages.load(Ordering::SeqCst),
            visitors: self.stats.visitors.load(Ordering::SeqCst),
            views: self.stats.views.load(Ordering::SeqCst),
            flushes: self.stats.flushes.load(Ordering::SeqCst),
            flush_failures: self.stats.flush_failures.load(Ordering::SeqCst),
        }
    }

    fn stats_counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::TimestampSave => &self.stats.timestamp_run_save,
            StatsEvent::Pages => &self.stats.pages,
            StatsEvent::Visitors => &self.stats.visitors,
            StatsEvent::Views => &self.stats.views,
            StatsEvent::Flushes => &self.stats.flushes,
            StatsEvent::FlushFailures => &self.stats.flush_failures,
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        let counter = self.stats_counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats_counter(event).store(value, Ordering::SeqCst);
    }
}
