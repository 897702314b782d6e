use std::collections::BTreeMap;
use parking_lot::RwLock;

#[derive(Debug, Default)]
pub struct PageCounter {
    pub(crate) pages: RwLock<BTreeMap<String, u64>>,
}
