use std::collections::BTreeMap;
use crate::snapshot::errors::SnapshotError;
use crate::snapshot::structs::page_snapshot::PageSnapshot;

impl PageSnapshot {
    pub fn new(page_counts: BTreeMap<String, u64>, unique_views: u64) -> PageSnapshot
    {
        PageSnapshot { page_counts, unique_views }
    }

    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError>
    {
        serde_json::to_vec(self).map_err(|source| SnapshotError::EncodeError { record: "page", source })
    }

    pub fn decode(data: &[u8]) -> Result<PageSnapshot, SnapshotError>
    {
        serde_json::from_slice(data).map_err(|source| SnapshotError::DecodeError { record: "page", source })
    }
}
