use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::counter::structs::page_counter::PageCounter;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::visitors::structs::visitor_set::VisitorSet;

#[derive(Debug)]
pub struct ViewTracker {
    pub config: Arc<Configuration>,
    pub pages: Arc<PageCounter>,
    pub visitors: Arc<VisitorSet>,
    pub stats: Arc<StatsAtomics>,
}
