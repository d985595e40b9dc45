//! Core types for the etcd v3 gateway codec
//!
//! This crate defines the domain records carried over the JSON gateway
//! (`KeyValue`, `ResponseHeader`), the range-end convention used by range
//! queries, and the cluster endpoint state read by the request builders.
//!
//! It holds no encoding logic; see `etcdgw-wire` for the wire codec and
//! `etcdgw-client` for the request builders.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod cluster;
mod range_end;
mod types;

pub use cluster::{ClusterConfig, ClusterFlag, EtcdCluster};
pub use range_end::RangeEnd;
pub use types::{KeyValue, ResponseHeader};
