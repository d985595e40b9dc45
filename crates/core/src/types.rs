//! Domain records for the etcd v3 JSON gateway
//!
//! These are ephemeral value records: constructed fresh per request or
//! response and discarded after use. They carry no identity beyond their
//! fields.
//!
//! Keys and values are raw byte strings. The gateway requires them to travel
//! as base64 text inside JSON; that conversion lives in `etcdgw-wire`, not
//! here.

use serde::{Deserialize, Serialize};

/// A single stored entry as the gateway reports it.
///
/// The 64-bit numeric fields may arrive as native JSON numbers or as decimal
/// strings (the gateway stringifies 64-bit integers to avoid JSON float
/// precision loss); the wire codec accepts both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    /// Key bytes (raw, not base64).
    pub key: Vec<u8>,
    /// Value bytes (raw, not base64).
    pub value: Vec<u8>,
    /// Revision at which this key was created.
    pub create_revision: i64,
    /// Revision of the last modification.
    pub mod_revision: i64,
    /// Per-key version counter, reset on delete.
    pub version: i64,
    /// Attached lease id, zero if none.
    pub lease: i64,
}

/// Header attached to every gateway response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseHeader {
    /// Cluster id.
    pub cluster_id: u64,
    /// Id of the member that served the request.
    pub member_id: u64,
    /// Global revision at the time of the response.
    pub revision: i64,
    /// Raft term of the serving member.
    pub raft_term: u64,
}
