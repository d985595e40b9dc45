//! Response decoders for the kv endpoints
//!
//! Gateway responses are JSON objects with a `header` plus per-endpoint
//! payload. Decoding follows the wire codec's philosophy: a body that is not
//! a JSON object fails closed, everything inside degrades to defaults except
//! invalid base64.

use etcdgw_core::{KeyValue, ResponseHeader};
use etcdgw_wire::{
    get_bool, get_int64, parse_object, unpack_key_value, unpack_response_header, DecodeError,
};
use serde_json::{Map, Value};

/// Decoded body of a range/get response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeResponse {
    /// Response header.
    pub header: ResponseHeader,
    /// Matched entries.
    pub kvs: Vec<KeyValue>,
    /// True if the result was truncated by `limit`.
    pub more: bool,
    /// Total number of keys in the range, ignoring `limit`.
    pub count: i64,
}

/// Decoded body of a put/set response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutResponse {
    /// Response header.
    pub header: ResponseHeader,
    /// Previous entry, present when the request asked for `prev_kv`.
    pub prev_kv: Option<KeyValue>,
}

/// Decode a range/get response body.
pub fn decode_range_response(body: &str) -> Result<RangeResponse, DecodeError> {
    let obj = parse_object(body).ok_or(DecodeError::NotAnObject)?;

    let mut response = RangeResponse {
        more: get_bool(&obj, "more"),
        count: get_int64(&obj, "count"),
        ..Default::default()
    };

    if let Some(Value::Object(header)) = obj.get("header") {
        unpack_response_header(&mut response.header, header);
    }

    if let Some(Value::Array(items)) = obj.get("kvs") {
        for item in items {
            if let Value::Object(kv_obj) = item {
                response.kvs.push(decode_kv(kv_obj)?);
            }
        }
    }

    Ok(response)
}

/// Decode a put/set response body.
pub fn decode_put_response(body: &str) -> Result<PutResponse, DecodeError> {
    let obj = parse_object(body).ok_or(DecodeError::NotAnObject)?;

    let mut response = PutResponse::default();
    if let Some(Value::Object(header)) = obj.get("header") {
        unpack_response_header(&mut response.header, header);
    }
    if let Some(Value::Object(prev)) = obj.get("prev_kv") {
        response.prev_kv = Some(decode_kv(prev)?);
    }

    Ok(response)
}

fn decode_kv(obj: &Map<String, Value>) -> Result<KeyValue, DecodeError> {
    let mut kv = KeyValue::default();
    unpack_key_value(&mut kv, obj)?;
    Ok(kv)
}
