//! Managed container service declaration

use crate::graph::NodeId;
use serde::{Deserialize, Serialize};

/// A load-balanced, provider-managed container service.
///
/// The provider handles placement, scaling primitives and load
/// balancing; the stack declares sizing and wiring only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSpec {
    /// Cluster the tasks run in
    pub cluster: NodeId,

    /// Image the containers are started from
    pub image: NodeId,

    /// Certificate terminating TLS at the load balancer
    pub certificate: NodeId,

    /// CPU units per task
    pub cpu_units: u32,

    /// Memory limit per task in MiB
    pub memory_mib: u32,

    /// Number of task replicas to keep running
    pub desired_count: u32,

    /// Port the container listens on
    pub container_port: u16,

    /// Whether the load balancer is internet-facing
    pub public: bool,

    /// Health check on the service's routing target.
    /// Attached after declaration; `None` means the provider default.
    pub health_check: Option<HealthCheckSpec>,
}

impl ServiceSpec {
    pub fn new(cluster: NodeId, image: NodeId, certificate: NodeId) -> Self {
        Self {
            cluster,
            image,
            certificate,
            cpu_units: 256,
            memory_mib: 512,
            desired_count: 1,
            container_port: 80,
            public: true,
            health_check: None,
        }
    }
}

/// Health check configuration for a routing target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckSpec {
    /// Path the load balancer probes
    pub path: String,
}

impl HealthCheckSpec {
    pub fn path(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}
