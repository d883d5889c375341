//! Property tests for the array and string merges

use json_merge::merge::{merge_arrays, merge_strings};
use json_merge::{MergeOptions, MergePolicy, Merger};
use proptest::prelude::*;
use serde_json::{json, Value};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-zA-Z]{0,4}".prop_map(Value::String),
    ]
}

fn element() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(2, 8, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Array),
            prop::collection::vec(("[a-c]", inner), 0..3)
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
        ]
    })
}

fn lowered(items: &[Value]) -> Vec<String> {
    items.iter().map(|v| v.to_string().to_lowercase()).collect()
}

proptest! {
    #[test]
    fn prop_array_merge_is_idempotent(
        target in prop::collection::vec(element(), 0..6),
        source in prop::collection::vec(element(), 0..6),
    ) {
        let once = merge_arrays(&target, &source, MergePolicy::Merge);
        let twice = merge_arrays(&once, &source, MergePolicy::Merge);
        prop_assert_eq!(&once, &twice);

        let with_self = merge_arrays(&once, &once, MergePolicy::Merge);
        prop_assert_eq!(&once, &with_self);
    }

    #[test]
    fn prop_array_merge_keeps_target_prefix(
        target in prop::collection::vec(element(), 0..6),
        source in prop::collection::vec(element(), 0..6),
    ) {
        let merged = merge_arrays(&target, &source, MergePolicy::Merge);
        prop_assert_eq!(&merged[..target.len()], &target[..]);

        let keys = lowered(&merged);
        for key in lowered(&source) {
            prop_assert!(keys.contains(&key));
        }

        // Appended elements are pairwise distinct
        let appended = &keys[target.len()..];
        for (i, key) in appended.iter().enumerate() {
            prop_assert!(!appended[i + 1..].contains(key));
        }
    }

    #[test]
    fn prop_array_clobber_returns_source(
        target in prop::collection::vec(element(), 0..6),
        source in prop::collection::vec(element(), 0..6),
    ) {
        prop_assert_eq!(merge_arrays(&target, &source, MergePolicy::Clobber), source);
    }

    #[test]
    fn prop_string_clobber_returns_source(target in ".{0,12}", source in ".{0,12}") {
        prop_assert_eq!(merge_strings(&target, &source, MergePolicy::Clobber, ','), source);
    }

    #[test]
    fn prop_string_merge_is_idempotent(target in "[a-c ,]{0,10}", source in "[a-c ,]{0,10}") {
        let once = merge_strings(&target, &source, MergePolicy::Merge, ',');
        let twice = merge_strings(&once, &source, MergePolicy::Merge, ',');
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.starts_with(target.as_str()));
    }

    #[test]
    fn prop_merge_with_self_is_identity_for_unique_arrays(
        values in prop::collection::btree_set("[a-z]{1,4}", 0..5),
        n in any::<i64>(),
    ) {
        let list: Vec<Value> = values.into_iter().map(Value::String).collect();
        let doc = json!({"list": list.clone(), "n": n, "nested": {"list": list}});
        let merged = Merger::new(MergeOptions::default()).merge_documents(&doc, &doc).unwrap();
        prop_assert_eq!(merged, doc);
    }
}
