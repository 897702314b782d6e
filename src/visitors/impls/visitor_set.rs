use std::collections::{BTreeSet, HashSet};
use parking_lot::RwLock;
use crate::visitors::structs::visitor_set::VisitorSet;

impl VisitorSet {
    pub fn new() -> VisitorSet
    {
        VisitorSet {
            visitors: RwLock::new(HashSet::new()),
        }
    }

    /// Returns `true` when the visitor was not seen before.
    #[tracing::instrument(level = "debug", skip(self))]
    #[inline]
    pub fn record(&self, visitor: &str) -> bool
    {
        {
            let lock = self.visitors.read();
            if lock.contains(visitor) {
                return false;
            }
        }
        let mut lock = self.visitors.write();
        lock.insert(visitor.to_string())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    #[inline]
    pub fn contains(&self, visitor: &str) -> bool
    {
        let lock = self.visitors.read();
        lock.contains(visitor)
    }

    pub fn count(&self) -> usize
    {
        self.visitors.read().len()
    }

    /// Sorted copy of the set.
    pub fn snapshot(&self) -> BTreeSet<String>
    {
        let lock = self.visitors.read();
        lock.iter().cloned().collect()
    }
}
