//! Wire codec for the etcd v3 JSON gateway
//!
//! This crate implements the encoding contract of the gateway: raw byte
//! strings travel as base64 JSON strings, 64-bit integers may arrive as
//! native numbers or decimal strings, and most fields are emitted only when
//! they carry a non-default value.
//!
//! ## Field Emission Rules
//!
//! | Field kind | Emitted when |
//! |------------|--------------|
//! | Entity numeric (revision, version, lease, ...) | non-zero |
//! | Entity bytes (key, value) | non-empty, base64 |
//! | Range `key` / `range_end` | non-empty, base64 |
//! | Request `limit`, `revision`, put booleans | always, even when zero/false |
//!
//! Decoding is tolerant by design: scalar getters degrade to defaults
//! (`0`/`false`/`""`) on absent, mistyped, or unparsable input. The one
//! decode failure that surfaces is invalid base64, since silently dropping
//! key or value bytes would corrupt data without signal.
//!
//! ## Examples
//!
//! ```
//! use etcdgw_core::{KeyValue, RangeEnd};
//! use etcdgw_wire::{pack_key_range, pack_key_value};
//!
//! // Prefix scan over everything under "aa"
//! let range = pack_key_range(b"aa", &RangeEnd::Prefix);
//! assert_eq!(range["range_end"], "YWI="); // base64("ab")
//!
//! // Zero fields are omitted
//! let kv = KeyValue { key: b"k".to_vec(), ..Default::default() };
//! let obj = pack_key_value(&kv);
//! assert!(!obj.contains_key("mod_revision"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod bytes;
mod entity;
mod error;
mod field;
mod range;

pub use bytes::{decode_base64, encode_base64};
pub use entity::{
    pack_key_value, pack_response_header, unpack_key_value, unpack_response_header,
};
pub use error::DecodeError;
pub use field::{get_bool, get_int64, get_string, get_uint64, parse_object};
pub use range::{pack_key_range, prefix_successor};
