// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde_json::{json, Map, Value};

use crate::canonical::{canonical_bytes, canonical_hash, canonical_string, digest32};

#[test]
fn test_object_keys_sorted_recursively() {
    let value = json!({
        "b": [3, {"d": null, "c": true}],
        "a": "x\"y",
    });

    assert_eq!(
        canonical_string(&value),
        r#"{"a":"x\"y","b":[3,{"c":true,"d":null}]}"#
    );
}

#[test]
fn test_insertion_order_does_not_matter() {
    let mut forward = Map::new();
    forward.insert("a".into(), json!(1));
    forward.insert("b".into(), json!(2));

    let mut reverse = Map::new();
    reverse.insert("b".into(), json!(2));
    reverse.insert("a".into(), json!(1));

    assert_eq!(
        canonical_bytes(&Value::Object(forward)),
        canonical_bytes(&Value::Object(reverse))
    );
}

#[test]
fn test_array_order_preserved() {
    assert_ne!(canonical_bytes(&json!([1, 2])), canonical_bytes(&json!([2, 1])));
}

#[test]
fn test_string_and_number_distinct() {
    assert_ne!(canonical_bytes(&json!("1")), canonical_bytes(&json!(1)));
    assert_ne!(canonical_bytes(&json!(null)), canonical_bytes(&json!("null")));
}

#[test]
fn test_scalars_compact() {
    assert_eq!(canonical_string(&json!(null)), "null");
    assert_eq!(canonical_string(&json!(false)), "false");
    assert_eq!(canonical_string(&json!(-12)), "-12");
    assert_eq!(canonical_string(&json!("é\n")), "\"é\\n\"");
    assert_eq!(canonical_string(&json!({})), "{}");
    assert_eq!(canonical_string(&json!([])), "[]");
}

#[test]
fn test_hash_is_digest_of_canonical_bytes() {
    let value = json!({"z": 1, "y": [true]});
    assert_eq!(canonical_hash(&value), digest32(br#"{"y":[true],"z":1}"#));
}
