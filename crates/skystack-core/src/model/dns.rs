//! DNS zone reference and record declarations

use crate::graph::NodeId;
use serde::{Deserialize, Serialize};

/// Reference to an existing hosted zone, looked up by domain name.
///
/// The zone is owned by the provider account, not by the stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRef {
    /// Apex domain name of the zone (e.g. "example.com")
    pub domain_name: String,
}

impl ZoneRef {
    pub fn new(domain_name: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
        }
    }
}

/// Target of an alias record.
///
/// Aliases resolve to another declared resource's endpoint, so the
/// record follows the endpoint wherever the provider places it. A
/// literal address is deliberately not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasTarget {
    /// Public load balancer endpoint of a declared service
    ServiceEndpoint(NodeId),
}

/// An alias record pointing a subdomain at a declared endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecordSpec {
    /// Record name relative to the zone (e.g. "api-example")
    pub record_name: String,

    /// Zone the record is created in
    pub zone: NodeId,

    /// What the record resolves to
    pub target: AliasTarget,

    /// Record time-to-live in seconds
    pub ttl_seconds: u64,
}
