use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use crate::snapshot::helpers::{visitor_keys, visitor_map};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitorSnapshot {
    #[serde(rename = "IPs", default, serialize_with = "visitor_map", deserialize_with = "visitor_keys")]
    pub visitors: BTreeSet<String>,
}
