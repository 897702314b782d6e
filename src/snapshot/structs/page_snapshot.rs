use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::snapshot::helpers::nullable_counts;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    #[serde(rename = "PageCounts", default, deserialize_with = "nullable_counts")]
    pub page_counts: BTreeMap<String, u64>,
    #[serde(rename = "UniqueViews", default)]
    pub unique_views: u64,
}
