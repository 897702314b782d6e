use std::collections::{BTreeMap, BTreeSet, HashSet};
use crate::snapshot::structs::page_snapshot::PageSnapshot;
use crate::snapshot::structs::visitor_snapshot::VisitorSnapshot;
use crate::tracker::structs::view_tracker::ViewTracker;

impl ViewTracker {
    /// Copies both live structures with their shared locks held together, so
    /// the unique count matches the visitor copy. Only plain clones happen
    /// under the locks; ordering and encoding happen after release.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn take_snapshot(&self) -> (PageSnapshot, VisitorSnapshot)
    {
        let (page_counts, visitors) = self.copy_live_state();

        let visitors: BTreeSet<String> = visitors.into_iter().collect();
        let unique_views = visitors.len() as u64;
        (
            PageSnapshot::new(page_counts, unique_views),
            VisitorSnapshot::new(visitors)
        )
    }

    pub(crate) fn copy_live_state(&self) -> (BTreeMap<String, u64>, HashSet<String>)
    {
        let pages_lock = self.pages.pages.read();
        let visitors_lock = self.visitors.visitors.read();
        (pages_lock.clone(), visitors_lock.clone())
    }
}
