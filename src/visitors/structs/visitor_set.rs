use std::collections::HashSet;
use parking_lot::RwLock;

#[derive(Debug, Default)]
pub struct VisitorSet {
    pub(crate) visitors: RwLock<HashSet<String>>,
}
