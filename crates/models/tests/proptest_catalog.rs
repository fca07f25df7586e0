use std::collections::BTreeMap;

use models::license::{deserialize, serialize, sorted_copy};
use models::License;
use proptest::prelude::*;
use proptest::test_runner::Config;

fn catalog() -> impl Strategy<Value = Vec<License>> {
    // keyed by identifier so every generated catalog is unique
    prop::collection::btree_map(
        "[A-Za-z0-9.+-]{1,12}",
        ("[ -~]{0,24}", prop::sample::select(vec!["allowed", "denied", "unknown"])),
        0..24,
    )
    .prop_map(|m: BTreeMap<String, (String, &'static str)>| {
        m.into_iter().map(|(id, (name, status))| License::new(name, id, status)).collect()
    })
    .prop_shuffle()
}

proptest! {
    #![proptest_config(Config::with_cases(128))]
    #[test]
    fn sorted_catalog_survives_serialize_deserialize(list in catalog()) {
        let sorted = sorted_copy(&list);
        let blob = serialize(&sorted).expect("serialize");
        let back = deserialize(Some(&blob)).expect("deserialize");
        prop_assert_eq!(back, sorted);
    }

    #[test]
    fn sorted_copy_is_ascending_by_identifier(list in catalog()) {
        let sorted = sorted_copy(&list);
        prop_assert_eq!(sorted.len(), list.len());
        prop_assert!(sorted.windows(2).all(|w| w[0].identifier < w[1].identifier));
    }
}
