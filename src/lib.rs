//! # etcdgw
//!
//! Client-side codec for the etcd v3 JSON/HTTP gateway.
//!
//! The gateway fronts etcd's binary RPC protocol with JSON over HTTP, and
//! its encoding has sharp edges: raw key/value bytes travel as base64
//! strings, 64-bit integers may be numbers or decimal strings, prefix scans
//! are expressed through a computed `range_end`, and each endpoint has its
//! own always-present vs. present-only-if-set field rules. This workspace
//! implements exactly that encoding engine; connections, retries, watch
//! streams, and authentication belong to the surrounding transport.
//!
//! ## Quick Start
//!
//! ```
//! use etcdgw::{decode_range_response, EtcdCluster, GatewayRequests, RangeEnd};
//!
//! // Build a prefix scan over everything under "config/"
//! let cluster = EtcdCluster::new();
//! let request = cluster.kv_get(b"config/", &RangeEnd::Prefix, 0, 0);
//! assert!(request.url.ends_with("/v3beta/kv/range"));
//!
//! // hand request.url / request.body / request.headers to any HTTP client,
//! // then decode the response body:
//! let response = decode_range_response(r#"{"count":"0"}"#).unwrap();
//! assert_eq!(response.count, 0);
//! ```
//!
//! ## Crates
//!
//! - `etcdgw-core` - domain records and cluster endpoint state
//! - `etcdgw-wire` - tolerant field extraction, base64, key-range encoding
//! - `etcdgw-client` - per-endpoint request builders and response decoders

#![warn(missing_docs)]

pub use etcdgw_client::{
    decode_put_response, decode_range_response, default_user_agent, GatewayRequest,
    GatewayRequests, PutResponse, RangeResponse, API_V3_KV_DELETE_RANGE, API_V3_KV_PUT,
    API_V3_KV_RANGE, API_V3_WATCH,
};
pub use etcdgw_core::{ClusterConfig, ClusterFlag, EtcdCluster, KeyValue, RangeEnd, ResponseHeader};
pub use etcdgw_wire::{
    decode_base64, encode_base64, get_bool, get_int64, get_string, get_uint64, pack_key_range,
    pack_key_value, pack_response_header, parse_object, prefix_successor, unpack_key_value,
    unpack_response_header, DecodeError,
};
