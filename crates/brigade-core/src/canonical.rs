//! Canonical CBOR encoding for deterministic audit digests.
//!
//! This module implements RFC 8949 Core Deterministic Encoding:
//! - Map keys sorted by encoded byte comparison
//! - Integers use smallest valid encoding
//! - Definite lengths only
//! - No floats (timestamps are i64 milliseconds)
//!
//! The canonical encoding is critical: the same audit record always
//! produces identical bytes (and thus an identical digest), and every
//! semantically meaningful field participates, so altering any field of
//! a sealed entry changes its hash.

use ciborium::value::Value;

use crate::audit::AuditRecord;
use crate::hash::ChainHash;

/// Digest field keys (integer keys for compact encoding).
///
/// Keys 0-23 encode as single bytes in CBOR.
mod keys {
    pub const ACTOR: u64 = 0;
    pub const ROLE: u64 = 1;
    pub const ACTION: u64 = 2;
    pub const ENTITY_KIND: u64 = 3;
    pub const ENTITY_ID: u64 = 4;
    pub const DETAILS: u64 = 5;
    pub const TIMESTAMP: u64 = 6;
    pub const PREV_HASH: u64 = 7;
}

/// Encode an audit record plus the previous entry's hash to canonical
/// CBOR bytes. This is the digest input for a chain entry.
pub fn canonical_entry_bytes(record: &AuditRecord, prev_hash: &ChainHash) -> Vec<u8> {
    let value = record_to_cbor_value(record, prev_hash);
    let mut buf = Vec::new();
    encode_value_to(&mut buf, &value);
    buf
}

/// Convert a record to a CBOR Value (map with integer keys).
fn record_to_cbor_value(record: &AuditRecord, prev_hash: &ChainHash) -> Value {
    // Build map entries in key order (already sorted 0-7)
    let entries = vec![
        (
            Value::Integer(keys::ACTOR.into()),
            Value::Text(record.actor_id.clone()),
        ),
        (
            Value::Integer(keys::ROLE.into()),
            Value::Text(record.role.clone()),
        ),
        (
            Value::Integer(keys::ACTION.into()),
            Value::Text(record.action.clone()),
        ),
        (
            Value::Integer(keys::ENTITY_KIND.into()),
            Value::Text(record.entity.as_str().to_owned()),
        ),
        (
            Value::Integer(keys::ENTITY_ID.into()),
            Value::Text(record.entity_id.clone()),
        ),
        (
            Value::Integer(keys::DETAILS.into()),
            Value::Text(record.details.clone()),
        ),
        (
            Value::Integer(keys::TIMESTAMP.into()),
            Value::Integer(record.timestamp.timestamp_millis().into()),
        ),
        (
            Value::Integer(keys::PREV_HASH.into()),
            Value::Bytes(prev_hash.0.to_vec()),
        ),
    ];

    Value::Map(entries)
}

/// Recursively encode a CBOR value.
fn encode_value_to(buf: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Integer(i) => {
            encode_integer(buf, *i);
        }
        Value::Bytes(b) => {
            encode_bytes(buf, b);
        }
        Value::Text(s) => {
            encode_text(buf, s);
        }
        Value::Map(entries) => {
            encode_map_canonical(buf, entries);
        }
        Value::Float(_) => {
            panic!("floats not supported in canonical encoding");
        }
        _ => {
            panic!("unsupported CBOR value type in digest input");
        }
    }
}

/// Encode a CBOR integer (major types 0 and 1).
fn encode_integer(buf: &mut Vec<u8>, i: ciborium::value::Integer) {
    let n: i128 = i.into();

    if n >= 0 {
        // Major type 0: unsigned integer
        encode_uint(buf, 0, n as u64);
    } else {
        // Major type 1: negative integer
        // CBOR encodes -1 as 0, -2 as 1, etc.
        let abs = (-1 - n) as u64;
        encode_uint(buf, 1, abs);
    }
}

/// Encode an unsigned integer with the given major type.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffffffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

/// Encode a byte string (major type 2).
fn encode_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    encode_uint(buf, 2, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}

/// Encode a text string (major type 3).
fn encode_text(buf: &mut Vec<u8>, s: &str) {
    encode_uint(buf, 3, s.len() as u64);
    buf.extend_from_slice(s.as_bytes());
}

/// Encode a map canonically (major type 5).
///
/// Keys are sorted by their encoded byte comparison.
fn encode_map_canonical(buf: &mut Vec<u8>, entries: &[(Value, Value)]) {
    // Encode all keys first to sort by encoded bytes
    let mut key_value_pairs: Vec<(Vec<u8>, &Value)> = entries
        .iter()
        .map(|(k, v)| {
            let mut key_buf = Vec::new();
            encode_value_to(&mut key_buf, k);
            (key_buf, v)
        })
        .collect();

    // Sort by encoded key bytes (lexicographic)
    key_value_pairs.sort_by(|a, b| a.0.cmp(&b.0));

    // Write map header
    encode_uint(buf, 5, key_value_pairs.len() as u64);

    // Write sorted key-value pairs
    for (key_bytes, value) in key_value_pairs {
        buf.extend_from_slice(&key_bytes);
        encode_value_to(buf, value);
    }
}
