//! Request builders and response decoders for the etcd v3 JSON gateway
//!
//! Builders assemble complete POST request bodies for the gateway endpoints
//! (range, put, delete-range, watch-create) from an [`EtcdCluster`]'s
//! selected endpoint; decoders turn gateway response bodies back into domain
//! records.
//!
//! The HTTP transport itself is an external collaborator: this crate only
//! produces `(url, body, headers, timeout)` and consumes response text.
//!
//! ```
//! use etcdgw_client::GatewayRequests;
//! use etcdgw_core::{EtcdCluster, RangeEnd};
//!
//! let cluster = EtcdCluster::new();
//! let request = cluster.kv_get(b"config/", &RangeEnd::Prefix, 0, 0);
//! assert!(request.url.ends_with("/v3beta/kv/range"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod request;
mod response;

pub use etcdgw_core::EtcdCluster;
pub use request::{
    default_user_agent, GatewayRequest, GatewayRequests, API_V3_KV_DELETE_RANGE, API_V3_KV_PUT,
    API_V3_KV_RANGE, API_V3_WATCH,
};
pub use response::{decode_put_response, decode_range_response, PutResponse, RangeResponse};
