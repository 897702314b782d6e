use std::collections::BTreeMap;
use parking_lot::RwLock;
use crate::counter::structs::page_counter::PageCounter;

impl PageCounter {
    pub fn new() -> PageCounter
    {
        PageCounter {
            pages: RwLock::new(BTreeMap::new()),
        }
    }

    /// Adds one view, creating the page at 1 when absent.
    ///
    /// Returns the new count and whether the page was created by this call.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn increment(&self, page: &str) -> (u64, bool)
    {
        let mut lock = self.pages.write();
        match lock.get_mut(page) {
            Some(count) => {
                *count += 1;
                (*count, false)
            }
            None => {
                lock.insert(page.to_string(), 1);
                (1, true)
            }
        }
    }

    /// Registers the page at 0, resetting it when it already exists.
    ///
    /// Returns `true` when the page did not exist before.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn add_page(&self, page: &str) -> bool
    {
        let mut lock = self.pages.write();
        lock.insert(page.to_string(), 0).is_none()
    }

    /// Returns `true` when a page was removed; deleting an unknown page is a no-op.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn delete_page(&self, page: &str) -> bool
    {
        let mut lock = self.pages.write();
        lock.remove(page).is_some()
    }

    /// Assigns an exact count. Returns `true` when the page was created.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn set_count(&self, page: &str, count: u64) -> bool
    {
        let mut lock = self.pages.write();
        lock.insert(page.to_string(), count).is_none()
    }

    /// `(count, exists)`; an unknown page reads as `(0, false)`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_count(&self, page: &str) -> (u64, bool)
    {
        let lock = self.pages.read();
        match lock.get(page) {
            None => (0, false),
            Some(count) => (*count, true)
        }
    }

    pub fn snapshot(&self) -> BTreeMap<String, u64>
    {
        let lock = self.pages.read();
        lock.clone()
    }

    pub fn len(&self) -> usize
    {
        self.pages.read().len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.pages.read().is_empty()
    }
}
