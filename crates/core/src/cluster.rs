//! Cluster endpoint state
//!
//! Configuration and lightweight status for one etcd cluster as seen by a
//! client: configured and discovered hosts, the currently selected endpoint,
//! lease id, and the refresh/keepalive deadlines the surrounding transport
//! drives.
//!
//! This state is not internally synchronized. Concurrent use of a single
//! `EtcdCluster` across threads must be serialized by the caller; the codec
//! itself only reads the selected endpoint and lease id when building
//! requests.

use std::time::{Duration, SystemTime};

/// Default endpoint used until member discovery selects one.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:2379";

/// Independent cluster status flags.
///
/// Each variant addresses exactly one bit of the mask, so combined-flag
/// mutation is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ClusterFlag {
    /// Cluster is shutting down; no further requests should be built.
    Closing = 0x0001,
    /// Lease acquisition requested. Granting and keepalive are driven by the
    /// transport layer, not by this crate.
    EnableLease = 0x0100,
}

impl ClusterFlag {
    fn bit(self) -> u32 {
        self as u32
    }
}

/// Cluster configuration record.
///
/// The member-refresh and keepalive deadlines are bookkeeping for the
/// surrounding client; nothing in this workspace schedules them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterConfig {
    /// Hosts given at configuration time.
    pub conf_hosts: Vec<String>,
    /// Hosts discovered from the member list.
    pub hosts: Vec<String>,
    /// Pre-acquired authorization token, sent by the transport.
    pub authorization: Option<String>,
    /// Per-request HTTP timeout.
    pub http_timeout: Duration,
    /// Currently selected endpoint, if any.
    pub selected_endpoint: Option<String>,
    /// Deadline for the next member-list refresh.
    pub members_next_update: SystemTime,
    /// Interval between member-list refreshes.
    pub members_update_interval: Duration,
    /// Retry interval after a failed refresh.
    pub members_retry_interval: Duration,
    /// Current lease id, zero if none.
    pub lease: i64,
    /// Deadline for the next lease keepalive.
    pub keepalive_next_update: SystemTime,
    /// Lease TTL requested on grant.
    pub keepalive_timeout: Duration,
    /// Interval between keepalives.
    pub keepalive_interval: Duration,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        ClusterConfig {
            conf_hosts: Vec::new(),
            hosts: Vec::new(),
            authorization: None,
            http_timeout: Duration::from_secs(10),
            selected_endpoint: Some(DEFAULT_ENDPOINT.to_string()),
            members_next_update: SystemTime::UNIX_EPOCH,
            members_update_interval: Duration::from_secs(5 * 60),
            members_retry_interval: Duration::from_secs(60),
            lease: 0,
            keepalive_next_update: SystemTime::UNIX_EPOCH,
            keepalive_timeout: Duration::from_secs(16),
            keepalive_interval: Duration::from_secs(5),
        }
    }
}

/// One etcd cluster from the client's point of view.
#[derive(Debug, Clone, Default)]
pub struct EtcdCluster {
    flags: u32,
    config: ClusterConfig,
}

impl EtcdCluster {
    /// Create a cluster with default configuration.
    pub fn new() -> Self {
        EtcdCluster::default()
    }

    /// Clear flags and restore default timers.
    ///
    /// Configured hosts survive a reset; the selected endpoint, authorization
    /// token, and lease do not.
    pub fn reset(&mut self) {
        self.flags = 0;
        self.config.authorization = None;
        self.config.selected_endpoint = None;
        self.config.http_timeout = Duration::from_secs(10);
        self.config.members_next_update = SystemTime::UNIX_EPOCH;
        self.config.members_update_interval = Duration::from_secs(5 * 60);
        self.config.members_retry_interval = Duration::from_secs(60);
        self.config.lease = 0;
        self.config.keepalive_next_update = SystemTime::UNIX_EPOCH;
        self.config.keepalive_timeout = Duration::from_secs(16);
        self.config.keepalive_interval = Duration::from_secs(5);
    }

    /// Whether requests can currently be built for this cluster.
    ///
    /// False while `Closing` is set or while no endpoint is selected.
    pub fn is_available(&self) -> bool {
        if self.check_flag(ClusterFlag::Closing) {
            return false;
        }

        // no endpoint yet: actions are delayed until discovery selects one
        self.config.selected_endpoint.is_some()
    }

    /// Test one status flag.
    pub fn check_flag(&self, flag: ClusterFlag) -> bool {
        0 != (self.flags & flag.bit())
    }

    /// Set or clear one status flag.
    ///
    /// Enabling `EnableLease` records the intent only; the lease-grant request
    /// and keepalive loop belong to the transport layer.
    pub fn set_flag(&mut self, flag: ClusterFlag, on: bool) {
        if on == self.check_flag(flag) {
            return;
        }

        if on {
            self.flags |= flag.bit();
        } else {
            self.flags &= !flag.bit();
        }
    }

    /// Shared configuration record.
    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    /// Mutable configuration record.
    pub fn config_mut(&mut self) -> &mut ClusterConfig {
        &mut self.config
    }

    /// Currently selected endpoint, if any.
    pub fn selected_endpoint(&self) -> Option<&str> {
        self.config.selected_endpoint.as_deref()
    }

    /// Select an endpoint to build requests against.
    pub fn select_endpoint(&mut self, endpoint: impl Into<String>) {
        self.config.selected_endpoint = Some(endpoint.into());
    }

    /// Replace the configured host list.
    pub fn set_conf_hosts(&mut self, hosts: Vec<String>) {
        self.config.conf_hosts = hosts;
    }

    /// Hosts given at configuration time.
    pub fn conf_hosts(&self) -> &[String] {
        &self.config.conf_hosts
    }

    /// Hosts discovered from the member list.
    pub fn available_hosts(&self) -> &[String] {
        &self.config.hosts
    }

    /// Current lease id, zero if none.
    pub fn lease(&self) -> i64 {
        self.config.lease
    }

    /// Record a granted lease id.
    pub fn set_lease(&mut self, lease: i64) {
        self.config.lease = lease;
    }

    /// Per-request HTTP timeout in milliseconds, never zero.
    pub fn http_timeout_ms(&self) -> u64 {
        let ms = self.config.http_timeout.as_millis() as u64;
        if ms == 0 {
            30_000
        } else {
            ms
        }
    }
}
