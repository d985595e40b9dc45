//! Range-end convention for range queries
//!
//! etcd ranges are half-open `[key, range_end)` over byte strings:
//!
//! - no `range_end` - exact-key lookup
//! - `range_end` = `\0` - all keys >= `key`
//! - `range_end` = successor of `key` - all keys prefixed with `key`
//!
//! The wire protocol expresses the prefix case with the magic string
//! `"+1"`. This crate replaces that sentinel with an explicit tag so callers
//! cannot accidentally send the literal bytes `+1` as an upper bound.

/// Upper bound of a key range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeEnd {
    /// No upper bound field: exact-key lookup.
    None,
    /// Explicit upper bound, passed through as raw bytes.
    Bytes(Vec<u8>),
    /// Prefix scan: the encoder computes the lexicographic successor of the
    /// key and uses it as the upper bound.
    Prefix,
}

impl RangeEnd {
    /// Map a wire-level range-end string to the tagged form.
    ///
    /// `"+1"` is the prefix-scan sentinel, the empty string means no upper
    /// bound, anything else is a literal bound.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "+1" => RangeEnd::Prefix,
            "" => RangeEnd::None,
            other => RangeEnd::Bytes(other.as_bytes().to_vec()),
        }
    }
}

impl From<&[u8]> for RangeEnd {
    fn from(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            RangeEnd::None
        } else {
            RangeEnd::Bytes(bytes.to_vec())
        }
    }
}
