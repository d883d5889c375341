//! Array merge
//!
//! Under `Merge` the result is the target's elements followed by every source
//! element not already present. Presence is decided on the element's compact
//! JSON text, compared case-insensitively, so `"Y"` matches an existing `"y"`
//! and `{"id":1}` matches an existing `{"ID":1}`. Nested object key order
//! still matters: `{"a":1,"b":2}` and `{"b":2,"a":1}` are distinct elements.

use serde_json::Value;
use tracing::debug;

use super::policy::MergePolicy;

/// Merge `source` into `target` under `policy`
pub fn merge_arrays(target: &[Value], source: &[Value], policy: MergePolicy) -> Vec<Value> {
    match policy {
        MergePolicy::Clobber => source.to_vec(),
        MergePolicy::Merge => {
            let mut merged = target.to_vec();
            let mut keys: Vec<String> = target.iter().map(dedup_key).collect();

            for element in source {
                let key = dedup_key(element);
                if keys.contains(&key) {
                    continue;
                }
                debug!(element = %element, "appending array element");
                merged.push(element.clone());
                keys.push(key);
            }

            merged
        }
    }
}

/// Lowercased compact serialization of an element
fn dedup_key(value: &Value) -> String {
    value.to_string().trim().to_lowercase()
}
