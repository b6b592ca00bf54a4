// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Canonical Encoding.
//!
//! Renders a structured value into the exact bytes that get hashed and signed.
//! The same writer is used for intents, policies and anything else that needs
//! a stable digest.
//!
//! # Rules
//! - Objects: keys sorted byte-wise, whatever order they were inserted in
//! - Arrays: element order preserved
//! - Scalars: compact JSON (`null`, `true`, `12`, `"a\"b"`)
//! - No whitespace anywhere

use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::types::id::Digest32;

/// Canonical text form of `value`.
pub fn canonical_string(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

/// Canonical bytes of `value` (UTF-8 of [`canonical_string`]).
pub fn canonical_bytes(value: &Value) -> Vec<u8> {
    canonical_string(value).into_bytes()
}

/// SHA-256 of arbitrary bytes.
pub fn digest32(bytes: &[u8]) -> Digest32 {
    Sha256::digest(bytes).into()
}

/// SHA-256 of the canonical encoding of `value`.
pub fn canonical_hash(value: &Value) -> Digest32 {
    digest32(&canonical_bytes(value))
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            // Sort explicitly: serde_json's map order depends on crate features.
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out);
                out.push(':');
                write_value(item, out);
            }
            out.push('}');
        }
        // Display on scalar values is compact JSON.
        scalar => out.push_str(&scalar.to_string()),
    }
}

fn write_string(s: &str, out: &mut String) {
    out.push_str(&Value::String(s.to_owned()).to_string());
}
