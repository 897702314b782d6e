use std::collections::{BTreeMap, BTreeSet};
use serde::{Deserialize, Deserializer, Serializer};
use serde::ser::SerializeMap;

pub fn nullable_counts<'de, D>(deserializer: D) -> Result<BTreeMap<String, u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, u64>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads the `{visitor: bool}` map; only the keys carry meaning.
pub fn visitor_keys<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = Option::<BTreeMap<String, bool>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(map.into_keys().collect())
}

pub fn visitor_map<S>(visitors: &BTreeSet<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(visitors.len()))?;
    for visitor in visitors {
        map.serialize_entry(visitor, &true)?;
    }
    map.end()
}
