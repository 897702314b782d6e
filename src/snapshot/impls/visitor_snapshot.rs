use std::collections::BTreeSet;
use crate::snapshot::errors::SnapshotError;
use crate::snapshot::structs::visitor_snapshot::VisitorSnapshot;

impl VisitorSnapshot {
    pub fn new(visitors: BTreeSet<String>) -> VisitorSnapshot
    {
        VisitorSnapshot { visitors }
    }

    pub fn len(&self) -> usize
    {
        self.visitors.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.visitors.is_empty()
    }

    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError>
    {
        serde_json::to_vec(self).map_err(|source| SnapshotError::EncodeError { record: "visitor", source })
    }

    pub fn decode(data: &[u8]) -> Result<VisitorSnapshot, SnapshotError>
    {
        serde_json::from_slice(data).map_err(|source| SnapshotError::DecodeError { record: "visitor", source })
    }
}
