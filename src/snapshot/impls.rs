//! Encode/decode implementations for the snapshot records.

pub mod page_snapshot;
pub mod visitor_snapshot;
