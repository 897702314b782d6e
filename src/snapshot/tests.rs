#[cfg(test)]
mod snapshot_tests {
    use std::collections::{BTreeMap, BTreeSet};
    use proptest::prelude::*;
    use crate::snapshot::errors::SnapshotError;
    use crate::snapshot::structs::page_snapshot::PageSnapshot;
    use crate::snapshot::structs::visitor_snapshot::VisitorSnapshot;

    #[test]
    fn test_page_snapshot_wire_format() {
        let mut counts = BTreeMap::new();
        counts.insert(String::from("home"), 4);
        let encoded = PageSnapshot::new(counts, 2).encode().unwrap();
        assert_eq!(String::from_utf8(encoded).unwrap(), r#"{"PageCounts":{"home":4},"UniqueViews":2}"#);
    }

    #[test]
    fn test_visitor_snapshot_wire_format() {
        let visitors: BTreeSet<String> = ["5.6.7.8", "1.2.3.4"].iter().map(|ip| ip.to_string()).collect();
        let encoded = VisitorSnapshot::new(visitors).encode().unwrap();
        assert_eq!(String::from_utf8(encoded).unwrap(), r#"{"IPs":{"1.2.3.4":true,"5.6.7.8":true}}"#);
    }

    #[test]
    fn test_decode_empty_records() {
        let page = PageSnapshot::decode(br#"{"PageCounts":{},"UniqueViews":0}"#).unwrap();
        assert!(page.page_counts.is_empty());
        assert_eq!(page.unique_views, 0);

        let visitors = VisitorSnapshot::decode(br#"{"IPs":{}}"#).unwrap();
        assert!(visitors.is_empty());
    }

    #[test]
    fn test_decode_null_and_missing_collections() {
        let page = PageSnapshot::decode(br#"{"PageCounts":null,"UniqueViews":3}"#).unwrap();
        assert!(page.page_counts.is_empty());
        assert_eq!(page.unique_views, 3);

        let page = PageSnapshot::decode(b"{}").unwrap();
        assert_eq!(page, PageSnapshot::default());

        let visitors = VisitorSnapshot::decode(br#"{"IPs":null}"#).unwrap();
        assert!(visitors.is_empty());
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let page = PageSnapshot::decode(br#"{"PageCounts":{"home":1},"UniqueViews":1,"Referrers":{"x":2}}"#).unwrap();
        assert_eq!(page.page_counts.get("home"), Some(&1));
    }

    #[test]
    fn test_decode_visitor_values_carry_no_meaning() {
        let visitors = VisitorSnapshot::decode(br#"{"IPs":{"1.2.3.4":true,"5.6.7.8":false}}"#).unwrap();
        assert_eq!(visitors.len(), 2);
    }

    #[test]
    fn test_decode_malformed_bytes() {
        let result = PageSnapshot::decode(b"\x00\x01not json");
        assert!(matches!(result, Err(SnapshotError::DecodeError { record: "page", .. })));

        let result = VisitorSnapshot::decode(br#"{"IPs":["1.2.3.4"]}"#);
        assert!(matches!(result, Err(SnapshotError::DecodeError { record: "visitor", .. })));
    }

    #[test]
    fn test_decode_rejects_negative_counts() {
        assert!(PageSnapshot::decode(br#"{"PageCounts":{"home":-1},"UniqueViews":0}"#).is_err());
    }

    proptest! {
        #[test]
        fn prop_page_snapshot_round_trip(counts in proptest::collection::btree_map(".{0,16}", any::<u64>(), 0..32), unique in any::<u64>()) {
            let snapshot = PageSnapshot::new(counts, unique);
            let decoded = PageSnapshot::decode(&snapshot.encode().unwrap()).unwrap();
            prop_assert_eq!(decoded, snapshot);
        }

        #[test]
        fn prop_visitor_snapshot_round_trip(visitors in proptest::collection::btree_set(".{0,40}", 0..32)) {
            let snapshot = VisitorSnapshot::new(visitors);
            let decoded = VisitorSnapshot::decode(&snapshot.encode().unwrap()).unwrap();
            prop_assert_eq!(decoded, snapshot);
        }
    }
}
