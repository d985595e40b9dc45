//! Pack/unpack for the gateway's domain records
//!
//! Pack builds a fresh JSON object from a record, emitting numeric fields
//! only when non-zero and byte fields only when non-empty (base64). Unpack
//! is deliberately asymmetric: numeric fields are always assigned (absent
//! reads as zero), but absent byte fields leave the target untouched, so
//! callers unpacking into a reused record must pre-clear it.

use crate::bytes::{decode_base64, encode_base64};
use crate::error::DecodeError;
use crate::field::{get_int64, get_uint64};
use etcdgw_core::{KeyValue, ResponseHeader};
use serde_json::{Map, Value};

/// Encode a [`KeyValue`] as a gateway JSON object.
pub fn pack_key_value(kv: &KeyValue) -> Map<String, Value> {
    let mut obj = Map::new();

    if kv.create_revision != 0 {
        obj.insert("create_revision".to_string(), Value::from(kv.create_revision));
    }
    if kv.mod_revision != 0 {
        obj.insert("mod_revision".to_string(), Value::from(kv.mod_revision));
    }
    if kv.version != 0 {
        obj.insert("version".to_string(), Value::from(kv.version));
    }
    if kv.lease != 0 {
        obj.insert("lease".to_string(), Value::from(kv.lease));
    }
    if !kv.key.is_empty() {
        obj.insert("key".to_string(), Value::String(encode_base64(&kv.key)));
    }
    if !kv.value.is_empty() {
        obj.insert("value".to_string(), Value::String(encode_base64(&kv.value)));
    }

    obj
}

/// Decode a gateway JSON object into a [`KeyValue`].
///
/// Numeric fields are overwritten unconditionally; `key` and `value` are
/// only overwritten when present as strings. Invalid base64 is the one
/// failure that surfaces.
pub fn unpack_key_value(kv: &mut KeyValue, obj: &Map<String, Value>) -> Result<(), DecodeError> {
    kv.create_revision = get_int64(obj, "create_revision");
    kv.mod_revision = get_int64(obj, "mod_revision");
    kv.version = get_int64(obj, "version");
    kv.lease = get_int64(obj, "lease");

    if let Some(Value::String(b64)) = obj.get("key") {
        kv.key = decode_base64(b64)?;
    }
    if let Some(Value::String(b64)) = obj.get("value") {
        kv.value = decode_base64(b64)?;
    }

    Ok(())
}

/// Encode a [`ResponseHeader`] as a gateway JSON object.
pub fn pack_response_header(header: &ResponseHeader) -> Map<String, Value> {
    let mut obj = Map::new();

    if header.cluster_id != 0 {
        obj.insert("cluster_id".to_string(), Value::from(header.cluster_id));
    }
    if header.member_id != 0 {
        obj.insert("member_id".to_string(), Value::from(header.member_id));
    }
    if header.revision != 0 {
        obj.insert("revision".to_string(), Value::from(header.revision));
    }
    if header.raft_term != 0 {
        obj.insert("raft_term".to_string(), Value::from(header.raft_term));
    }

    obj
}

/// Decode a gateway JSON object into a [`ResponseHeader`].
///
/// All four fields are overwritten; absence reads as zero. Headers carry no
/// byte fields, so this cannot fail.
pub fn unpack_response_header(header: &mut ResponseHeader, obj: &Map<String, Value>) {
    header.cluster_id = get_uint64(obj, "cluster_id");
    header.member_id = get_uint64(obj, "member_id");
    header.revision = get_int64(obj, "revision");
    header.raft_term = get_uint64(obj, "raft_term");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::parse_object;

    fn full_kv() -> KeyValue {
        KeyValue {
            key: b"dir/node".to_vec(),
            value: b"payload".to_vec(),
            create_revision: 10,
            mod_revision: 20,
            version: 3,
            lease: 77,
        }
    }

    // === KeyValue pack ===

    #[test]
    fn test_pack_kv_full() {
        let obj = pack_key_value(&full_kv());
        assert_eq!(obj["create_revision"], 10);
        assert_eq!(obj["mod_revision"], 20);
        assert_eq!(obj["version"], 3);
        assert_eq!(obj["lease"], 77);
        assert_eq!(obj["key"], "ZGlyL25vZGU=");
        assert_eq!(obj["value"], "cGF5bG9hZA==");
    }

    #[test]
    fn test_pack_kv_omits_zeros_and_empties() {
        let obj = pack_key_value(&KeyValue::default());
        assert!(obj.is_empty());
    }

    #[test]
    fn test_pack_kv_partial() {
        let kv = KeyValue {
            key: b"k".to_vec(),
            mod_revision: 5,
            ..Default::default()
        };
        let obj = pack_key_value(&kv);
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("key"));
        assert!(obj.contains_key("mod_revision"));
    }

    // === KeyValue unpack ===

    #[test]
    fn test_unpack_kv_round_trip() {
        let original = full_kv();
        let obj = pack_key_value(&original);
        let mut decoded = KeyValue::default();
        unpack_key_value(&mut decoded, &obj).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_unpack_kv_absent_numerics_are_zeroed() {
        let mut kv = full_kv();
        unpack_key_value(&mut kv, &Map::new()).unwrap();
        assert_eq!(kv.create_revision, 0);
        assert_eq!(kv.mod_revision, 0);
        assert_eq!(kv.version, 0);
        assert_eq!(kv.lease, 0);
    }

    #[test]
    fn test_unpack_kv_absent_bytes_left_unmodified() {
        // pack omits empty byte fields, unpack does not reset them: a reused
        // target keeps its previous key and value
        let mut kv = full_kv();
        unpack_key_value(&mut kv, &Map::new()).unwrap();
        assert_eq!(kv.key, b"dir/node");
        assert_eq!(kv.value, b"payload");
    }

    #[test]
    fn test_unpack_kv_string_numerics() {
        let obj = parse_object(r#"{"mod_revision":"42","lease":"-7"}"#).unwrap();
        let mut kv = KeyValue::default();
        unpack_key_value(&mut kv, &obj).unwrap();
        assert_eq!(kv.mod_revision, 42);
        assert_eq!(kv.lease, -7);
    }

    #[test]
    fn test_unpack_kv_invalid_base64_errors() {
        let obj = parse_object(r#"{"key":"!!bad!!"}"#).unwrap();
        let mut kv = KeyValue::default();
        assert!(matches!(
            unpack_key_value(&mut kv, &obj),
            Err(DecodeError::InvalidBase64(_))
        ));
    }

    #[test]
    fn test_unpack_kv_non_string_bytes_ignored() {
        let obj = parse_object(r#"{"key":12345}"#).unwrap();
        let mut kv = KeyValue::default();
        unpack_key_value(&mut kv, &obj).unwrap();
        assert!(kv.key.is_empty());
    }

    // === ResponseHeader ===

    #[test]
    fn test_pack_header_full() {
        let header = ResponseHeader {
            cluster_id: 1,
            member_id: 2,
            revision: -3,
            raft_term: 4,
        };
        let obj = pack_response_header(&header);
        assert_eq!(obj["cluster_id"], 1);
        assert_eq!(obj["revision"], -3);
    }

    #[test]
    fn test_pack_header_omits_zeros() {
        assert!(pack_response_header(&ResponseHeader::default()).is_empty());
    }

    #[test]
    fn test_header_round_trip() {
        let original = ResponseHeader {
            cluster_id: u64::MAX,
            member_id: 9,
            revision: i64::MAX,
            raft_term: 5,
        };
        let obj = pack_response_header(&original);
        let mut decoded = ResponseHeader::default();
        unpack_response_header(&mut decoded, &obj);
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_unpack_header_string_numerics() {
        // the gateway renders 64-bit integers as decimal strings
        let obj = parse_object(
            r#"{"cluster_id":"18446744073709551615","member_id":"2","revision":"7","raft_term":"3"}"#,
        )
        .unwrap();
        let mut header = ResponseHeader::default();
        unpack_response_header(&mut header, &obj);
        assert_eq!(header.cluster_id, u64::MAX);
        assert_eq!(header.member_id, 2);
        assert_eq!(header.revision, 7);
        assert_eq!(header.raft_term, 3);
    }

    #[test]
    fn test_unpack_header_absent_is_zero() {
        let mut header = ResponseHeader {
            cluster_id: 1,
            member_id: 1,
            revision: 1,
            raft_term: 1,
        };
        unpack_response_header(&mut header, &Map::new());
        assert_eq!(header, ResponseHeader::default());
    }
}
