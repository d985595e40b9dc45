//! Tolerant scalar field extraction
//!
//! The gateway is loose about scalar representation: a 64-bit integer may be
//! a native JSON number or a decimal string, a boolean may be a number, and
//! so on. The getters here accept what the gateway might send and reduce
//! everything else to a default instead of erroring.
//!
//! Callers therefore cannot distinguish "absent" from "present but zero" or
//! "present but malformed". That is the wire contract, not an accident; see
//! the crate docs.

use serde_json::{Map, Number, Value};

/// Parse text as JSON and return the root object.
///
/// `None` on malformed text or a non-object root; parse errors never
/// propagate.
pub fn parse_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(obj)) => Some(obj),
        _ => None,
    }
}

/// Read a field as a string, coercing any scalar type.
///
/// `None` only when the field is absent. Present values stringify as:
/// null to `""`, booleans to `"true"`/`"false"`, numbers to their minimal
/// decimal rendering, and containers to the literal markers
/// `"[object object]"` / `"[object array]"`.
pub fn get_string(obj: &Map<String, Value>, key: &str) -> Option<String> {
    let value = obj.get(key)?;
    Some(match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Object(_) => "[object object]".to_string(),
        Value::Array(_) => "[object array]".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => render_number(n),
    })
}

/// Minimal decimal rendering, trying float first, then signed, then
/// unsigned.
fn render_number(n: &Number) -> String {
    if n.is_f64() {
        return match n.as_f64() {
            Some(f) => f.to_string(),
            None => n.to_string(),
        };
    }
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    match n.as_u64() {
        Some(u) => u.to_string(),
        None => n.to_string(),
    }
}

/// Read a field as a signed 64-bit integer.
///
/// Accepts a native number in i64 range or a decimal string (the gateway
/// stringifies 64-bit integers to dodge JSON float precision). Absent,
/// mistyped, or unparsable input yields `0`.
pub fn get_int64(obj: &Map<String, Value>, key: &str) -> i64 {
    match obj.get(key) {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => s.parse::<i64>().unwrap_or(0),
        _ => 0,
    }
}

/// Read a field as an unsigned 64-bit integer.
///
/// Same coercion rules as [`get_int64`] with unsigned range.
pub fn get_uint64(obj: &Map<String, Value>, key: &str) -> u64 {
    match obj.get(key) {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        Some(Value::String(s)) => s.parse::<u64>().unwrap_or(0),
        _ => 0,
    }
}

/// Read a field as a boolean.
///
/// Native booleans pass through; numbers test non-zero; strings parse as an
/// integer and test non-zero, defaulting to `1` (true) when unparsable.
/// Absent or otherwise mistyped fields yield `false`.
pub fn get_bool(obj: &Map<String, Value>, key: &str) -> bool {
    match obj.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => {
            if let Some(u) = n.as_u64() {
                u != 0
            } else if let Some(i) = n.as_i64() {
                i != 0
            } else {
                n.as_f64().map(|f| f != 0.0).unwrap_or(false)
            }
        }
        Some(Value::String(s)) => 0 != s.parse::<i64>().unwrap_or(1),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(json: &str) -> Map<String, Value> {
        parse_object(json).expect("test fixture must be a JSON object")
    }

    // === parse_object ===

    #[test]
    fn test_parse_object_ok() {
        let parsed = parse_object(r#"{"a":1}"#).unwrap();
        assert_eq!(parsed.get("a"), Some(&Value::from(1)));
    }

    #[test]
    fn test_parse_object_empty() {
        assert!(parse_object("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_object_rejects_array_root() {
        assert!(parse_object("[1,2]").is_none());
    }

    #[test]
    fn test_parse_object_rejects_scalar_root() {
        assert!(parse_object("42").is_none());
        assert!(parse_object(r#""text""#).is_none());
    }

    #[test]
    fn test_parse_object_rejects_garbage() {
        assert!(parse_object("{not json").is_none());
        assert!(parse_object("").is_none());
    }

    // === get_string ===

    #[test]
    fn test_get_string_absent() {
        assert_eq!(get_string(&obj("{}"), "missing"), None);
    }

    #[test]
    fn test_get_string_passthrough() {
        assert_eq!(get_string(&obj(r#"{"a":"hi"}"#), "a"), Some("hi".to_string()));
    }

    #[test]
    fn test_get_string_null() {
        assert_eq!(get_string(&obj(r#"{"a":null}"#), "a"), Some(String::new()));
    }

    #[test]
    fn test_get_string_bools() {
        assert_eq!(get_string(&obj(r#"{"a":true}"#), "a"), Some("true".to_string()));
        assert_eq!(get_string(&obj(r#"{"a":false}"#), "a"), Some("false".to_string()));
    }

    #[test]
    fn test_get_string_container_markers() {
        assert_eq!(
            get_string(&obj(r#"{"a":{"b":1}}"#), "a"),
            Some("[object object]".to_string())
        );
        assert_eq!(
            get_string(&obj(r#"{"a":[1,2]}"#), "a"),
            Some("[object array]".to_string())
        );
    }

    #[test]
    fn test_get_string_float_rendering() {
        assert_eq!(get_string(&obj(r#"{"a":3.5}"#), "a"), Some("3.5".to_string()));
    }

    #[test]
    fn test_get_string_int_rendering() {
        assert_eq!(get_string(&obj(r#"{"a":-7}"#), "a"), Some("-7".to_string()));
        assert_eq!(get_string(&obj(r#"{"a":0}"#), "a"), Some("0".to_string()));
    }

    #[test]
    fn test_get_string_u64_rendering() {
        assert_eq!(
            get_string(&obj(r#"{"a":18446744073709551615}"#), "a"),
            Some("18446744073709551615".to_string())
        );
    }

    // === get_int64 ===

    #[test]
    fn test_get_int64_absent() {
        assert_eq!(get_int64(&obj("{}"), "missing"), 0);
    }

    #[test]
    fn test_get_int64_native() {
        assert_eq!(get_int64(&obj(r#"{"a":-42}"#), "a"), -42);
        assert_eq!(get_int64(&obj(r#"{"a":9223372036854775807}"#), "a"), i64::MAX);
    }

    #[test]
    fn test_get_int64_from_string() {
        assert_eq!(get_int64(&obj(r#"{"a":"123"}"#), "a"), 123);
        assert_eq!(get_int64(&obj(r#"{"a":"-9223372036854775808"}"#), "a"), i64::MIN);
    }

    #[test]
    fn test_get_int64_unparsable_string_is_zero() {
        assert_eq!(get_int64(&obj(r#"{"a":"not a number"}"#), "a"), 0);
        assert_eq!(get_int64(&obj(r#"{"a":""}"#), "a"), 0);
    }

    #[test]
    fn test_get_int64_wrong_type_is_zero() {
        assert_eq!(get_int64(&obj(r#"{"a":true}"#), "a"), 0);
        assert_eq!(get_int64(&obj(r#"{"a":3.5}"#), "a"), 0);
        assert_eq!(get_int64(&obj(r#"{"a":{}}"#), "a"), 0);
    }

    #[test]
    fn test_get_int64_out_of_range_is_zero() {
        // u64-only values do not fit the signed reader
        assert_eq!(get_int64(&obj(r#"{"a":18446744073709551615}"#), "a"), 0);
    }

    // === get_uint64 ===

    #[test]
    fn test_get_uint64_absent() {
        assert_eq!(get_uint64(&obj("{}"), "missing"), 0);
    }

    #[test]
    fn test_get_uint64_native() {
        assert_eq!(
            get_uint64(&obj(r#"{"a":18446744073709551615}"#), "a"),
            u64::MAX
        );
    }

    #[test]
    fn test_get_uint64_from_string() {
        assert_eq!(
            get_uint64(&obj(r#"{"a":"18446744073709551615"}"#), "a"),
            u64::MAX
        );
    }

    #[test]
    fn test_get_uint64_negative_is_zero() {
        assert_eq!(get_uint64(&obj(r#"{"a":-1}"#), "a"), 0);
        assert_eq!(get_uint64(&obj(r#"{"a":"-1"}"#), "a"), 0);
    }

    // === get_bool ===

    #[test]
    fn test_get_bool_absent() {
        assert!(!get_bool(&obj("{}"), "missing"));
    }

    #[test]
    fn test_get_bool_native() {
        assert!(get_bool(&obj(r#"{"a":true}"#), "a"));
        assert!(!get_bool(&obj(r#"{"a":false}"#), "a"));
    }

    #[test]
    fn test_get_bool_numeric() {
        assert!(get_bool(&obj(r#"{"a":1}"#), "a"));
        assert!(get_bool(&obj(r#"{"a":-1}"#), "a"));
        assert!(!get_bool(&obj(r#"{"a":0}"#), "a"));
    }

    #[test]
    fn test_get_bool_from_string() {
        assert!(get_bool(&obj(r#"{"a":"1"}"#), "a"));
        assert!(!get_bool(&obj(r#"{"a":"0"}"#), "a"));
    }

    #[test]
    fn test_get_bool_unparsable_string_defaults_true() {
        assert!(get_bool(&obj(r#"{"a":"yes"}"#), "a"));
    }

    #[test]
    fn test_get_bool_null_is_false() {
        assert!(!get_bool(&obj(r#"{"a":null}"#), "a"));
    }
}
