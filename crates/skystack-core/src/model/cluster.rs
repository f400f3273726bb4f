//! Container cluster declaration

use crate::graph::NodeId;
use serde::{Deserialize, Serialize};

/// A compute grouping for container workloads, bound to a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSpec {
    /// Network the cluster's capacity lives in
    pub network: NodeId,
}

impl ClusterSpec {
    pub fn new(network: NodeId) -> Self {
        Self { network }
    }
}
