//! Request builders for the gateway endpoints
//!
//! Each builder returns a complete [`GatewayRequest`]: the full URL against
//! the cluster's selected endpoint, a compact JSON body, and the headers to
//! attach. Builders are pure transforms; parallel calls never interfere.
//!
//! Field presence differs per endpoint and matters on the wire:
//!
//! | Endpoint | Always present | Only when set |
//! |----------|----------------|---------------|
//! | range | `limit`, `revision` | `key`, `range_end` |
//! | put | `key`, `value`, `prev_kv`, `ignore_value`, `ignore_lease` | - |
//! | deleterange | `prev_kv` | `key`, `range_end` |
//! | watch create | - | everything |

use std::time::Duration;

use etcdgw_core::{EtcdCluster, RangeEnd};
use etcdgw_wire::{encode_base64, pack_key_range};
use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use tracing::debug;

/// Range/get endpoint.
pub const API_V3_KV_RANGE: &str = "/v3beta/kv/range";
/// Put/set endpoint.
pub const API_V3_KV_PUT: &str = "/v3beta/kv/put";
/// Delete-range endpoint.
pub const API_V3_KV_DELETE_RANGE: &str = "/v3beta/kv/deleterange";
/// Watch endpoint.
pub const API_V3_WATCH: &str = "/v3beta/watch";

static USER_AGENT: Lazy<String> = Lazy::new(|| {
    let sys_env = match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "Darwin",
        "windows" => "Windows",
        "freebsd" | "openbsd" | "netbsd" | "dragonfly" => "BSD",
        _ => "Unknown",
    };
    format!("Mozilla/5.0 ({}) Etcdgw/1.0", sys_env)
});

/// Process-wide User-Agent header value, computed once and reused by every
/// builder.
pub fn default_user_agent() -> &'static str {
    &USER_AGENT
}

/// One fully assembled gateway request, ready for an HTTP transport.
///
/// All gateway calls are POST.
#[derive(Debug, Clone)]
pub struct GatewayRequest {
    /// Selected endpoint plus the API path.
    pub url: String,
    /// Compact JSON body.
    pub body: String,
    /// Headers to attach.
    pub headers: Vec<(&'static str, String)>,
    /// Per-request timeout from the cluster configuration.
    pub timeout: Duration,
}

/// Gateway request builders over a cluster's selected endpoint.
pub trait GatewayRequests {
    /// Build a range/get request.
    ///
    /// `limit` and `revision` are always written, even when zero: the server
    /// treats them as unconditional parameters, unlike entity fields.
    fn kv_get(&self, key: &[u8], range_end: &RangeEnd, limit: i64, revision: i64)
        -> GatewayRequest;

    /// Build a put/set request.
    ///
    /// `key` and `value` are always written even when empty, as are the
    /// three booleans.
    fn kv_set(
        &self,
        key: &[u8],
        value: &[u8],
        prev_kv: bool,
        ignore_value: bool,
        ignore_lease: bool,
    ) -> GatewayRequest;

    /// Build a delete-range request.
    fn kv_delete(&self, key: &[u8], range_end: &RangeEnd, prev_kv: bool) -> GatewayRequest;

    /// Build a watch-create request.
    ///
    /// The body is a single `create_request` object; `prev_kv` and
    /// `progress_notify` are written only when true, `start_revision` only
    /// when non-zero. Watch streams stay open, so the request carries
    /// `Connection: keep-alive`.
    fn watch(
        &self,
        key: &[u8],
        range_end: &RangeEnd,
        start_revision: i64,
        prev_kv: bool,
        progress_notify: bool,
    ) -> GatewayRequest;
}

impl GatewayRequests for EtcdCluster {
    fn kv_get(
        &self,
        key: &[u8],
        range_end: &RangeEnd,
        limit: i64,
        revision: i64,
    ) -> GatewayRequest {
        let mut body = pack_key_range(key, range_end);
        body.insert("limit".to_string(), Value::from(limit));
        body.insert("revision".to_string(), Value::from(revision));

        finish(self, API_V3_KV_RANGE, body, false)
    }

    fn kv_set(
        &self,
        key: &[u8],
        value: &[u8],
        prev_kv: bool,
        ignore_value: bool,
        ignore_lease: bool,
    ) -> GatewayRequest {
        let mut body = Map::new();
        body.insert("key".to_string(), Value::String(encode_base64(key)));
        body.insert("value".to_string(), Value::String(encode_base64(value)));
        body.insert("prev_kv".to_string(), Value::Bool(prev_kv));
        body.insert("ignore_value".to_string(), Value::Bool(ignore_value));
        body.insert("ignore_lease".to_string(), Value::Bool(ignore_lease));

        finish(self, API_V3_KV_PUT, body, false)
    }

    fn kv_delete(&self, key: &[u8], range_end: &RangeEnd, prev_kv: bool) -> GatewayRequest {
        let mut body = pack_key_range(key, range_end);
        body.insert("prev_kv".to_string(), Value::Bool(prev_kv));

        finish(self, API_V3_KV_DELETE_RANGE, body, false)
    }

    fn watch(
        &self,
        key: &[u8],
        range_end: &RangeEnd,
        start_revision: i64,
        prev_kv: bool,
        progress_notify: bool,
    ) -> GatewayRequest {
        let mut create_request = pack_key_range(key, range_end);
        if prev_kv {
            create_request.insert("prev_kv".to_string(), Value::Bool(true));
        }
        if progress_notify {
            create_request.insert("progress_notify".to_string(), Value::Bool(true));
        }
        if start_revision != 0 {
            create_request.insert("start_revision".to_string(), Value::from(start_revision));
        }

        let mut body = Map::new();
        body.insert("create_request".to_string(), Value::Object(create_request));

        finish(self, API_V3_WATCH, body, true)
    }
}

fn finish(
    cluster: &EtcdCluster,
    path: &'static str,
    body: Map<String, Value>,
    keep_alive: bool,
) -> GatewayRequest {
    let url = format!("{}{}", cluster.selected_endpoint().unwrap_or(""), path);
    let body = Value::Object(body).to_string();

    let mut headers = vec![("User-Agent", default_user_agent().to_string())];
    if keep_alive {
        headers.push(("Connection", "keep-alive".to_string()));
    }

    debug!(path, bytes = body.len(), "built gateway request");

    GatewayRequest {
        url,
        body,
        headers,
        timeout: Duration::from_millis(cluster.http_timeout_ms()),
    }
}
