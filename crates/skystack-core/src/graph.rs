//! Typed declaration graph
//!
//! Resources are nodes; dependencies are edges derived from the
//! `NodeId` references inside each spec. Declare methods validate that
//! every referenced dependency already exists with the expected kind,
//! so a graph can only be built in dependency order. Execution of the
//! graph belongs to a provisioning engine, never to this module.

use crate::error::{Result, StackError};
use crate::model::{
    AliasTarget, CertificateSpec, ClusterSpec, DnsRecordSpec, HealthCheckSpec, ImageRef,
    NetworkSpec, OutputSpec, ServiceSpec, ZoneRef,
};
use serde::{Deserialize, Serialize};

/// Handle to a declared resource.
///
/// Identity equality on `NodeId` is identity of the declaration:
/// two resources referencing the same `NodeId` share the same entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }

    #[cfg(test)]
    pub(crate) fn test(index: u32) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Resource kind discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Network,
    Cluster,
    Image,
    Zone,
    Certificate,
    Service,
    DnsRecord,
    Output,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Network => write!(f, "network"),
            ResourceKind::Cluster => write!(f, "cluster"),
            ResourceKind::Image => write!(f, "image"),
            ResourceKind::Zone => write!(f, "zone"),
            ResourceKind::Certificate => write!(f, "certificate"),
            ResourceKind::Service => write!(f, "service"),
            ResourceKind::DnsRecord => write!(f, "dns-record"),
            ResourceKind::Output => write!(f, "output"),
        }
    }
}

/// Declaration payload of a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "spec", rename_all = "kebab-case")]
pub enum ResourceSpec {
    Network(NetworkSpec),
    Cluster(ClusterSpec),
    Image(ImageRef),
    Zone(ZoneRef),
    Certificate(CertificateSpec),
    Service(ServiceSpec),
    DnsRecord(DnsRecordSpec),
    Output(OutputSpec),
}

impl ResourceSpec {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceSpec::Network(_) => ResourceKind::Network,
            ResourceSpec::Cluster(_) => ResourceKind::Cluster,
            ResourceSpec::Image(_) => ResourceKind::Image,
            ResourceSpec::Zone(_) => ResourceKind::Zone,
            ResourceSpec::Certificate(_) => ResourceKind::Certificate,
            ResourceSpec::Service(_) => ResourceKind::Service,
            ResourceSpec::DnsRecord(_) => ResourceKind::DnsRecord,
            ResourceSpec::Output(_) => ResourceKind::Output,
        }
    }

    /// Nodes this spec references
    fn dependencies(&self) -> Vec<NodeId> {
        match self {
            ResourceSpec::Network(_) | ResourceSpec::Image(_) | ResourceSpec::Zone(_) => vec![],
            ResourceSpec::Cluster(cluster) => vec![cluster.network],
            ResourceSpec::Certificate(cert) => vec![cert.zone],
            ResourceSpec::Service(service) => {
                vec![service.cluster, service.image, service.certificate]
            }
            ResourceSpec::DnsRecord(record) => {
                let AliasTarget::ServiceEndpoint(service) = record.target;
                vec![record.zone, service]
            }
            ResourceSpec::Output(_) => vec![],
        }
    }
}

/// A declared resource with its logical name
#[derive(Debug, Clone, Serialize)]
pub struct ResourceNode {
    /// Handle of this node
    pub id: NodeId,

    /// Logical name, unique per kind (e.g. "cluster", "api")
    pub name: String,

    /// The declaration itself
    #[serde(flatten)]
    pub spec: ResourceSpec,
}

impl ResourceNode {
    /// Full resource key (kind:name)
    pub fn key(&self) -> String {
        format!("{}:{}", self.spec.kind(), self.name)
    }
}

/// Dependency-ordered set of resource declarations
#[derive(Debug, Default, Serialize)]
pub struct DeclarationGraph {
    nodes: Vec<ResourceNode>,
    /// (dependent, dependency) pairs
    edges: Vec<(NodeId, NodeId)>,
}

impl DeclarationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a resource, recording edges to its dependencies.
    ///
    /// Fails if the (kind, name) pair is already taken or any
    /// referenced dependency has not been declared yet.
    pub fn declare(&mut self, name: impl Into<String>, spec: ResourceSpec) -> Result<NodeId> {
        let name = name.into();
        let kind = spec.kind();

        if self.get(kind, &name).is_some() {
            return Err(StackError::DuplicateResource(format!("{kind}:{name}")));
        }
        for dep in spec.dependencies() {
            if dep.index() >= self.nodes.len() {
                return Err(StackError::UnknownDependency(dep));
            }
        }

        let id = NodeId(self.nodes.len() as u32);
        for dep in spec.dependencies() {
            self.edges.push((id, dep));
        }
        tracing::debug!("declared {}:{} as {}", kind, name, id);
        self.nodes.push(ResourceNode { id, name, spec });
        Ok(id)
    }

    pub fn declare_network(&mut self, name: &str, spec: NetworkSpec) -> Result<NodeId> {
        self.declare(name, ResourceSpec::Network(spec))
    }

    pub fn declare_cluster(&mut self, name: &str, spec: ClusterSpec) -> Result<NodeId> {
        self.expect_kind(spec.network, ResourceKind::Network)?;
        self.declare(name, ResourceSpec::Cluster(spec))
    }

    pub fn declare_image(&mut self, name: &str, spec: ImageRef) -> Result<NodeId> {
        self.declare(name, ResourceSpec::Image(spec))
    }

    pub fn declare_zone(&mut self, name: &str, spec: ZoneRef) -> Result<NodeId> {
        self.declare(name, ResourceSpec::Zone(spec))
    }

    pub fn declare_certificate(&mut self, name: &str, spec: CertificateSpec) -> Result<NodeId> {
        self.expect_kind(spec.zone, ResourceKind::Zone)?;
        self.declare(name, ResourceSpec::Certificate(spec))
    }

    pub fn declare_service(&mut self, name: &str, spec: ServiceSpec) -> Result<NodeId> {
        self.expect_kind(spec.cluster, ResourceKind::Cluster)?;
        self.expect_kind(spec.image, ResourceKind::Image)?;
        self.expect_kind(spec.certificate, ResourceKind::Certificate)?;
        self.declare(name, ResourceSpec::Service(spec))
    }

    pub fn declare_dns_record(&mut self, name: &str, spec: DnsRecordSpec) -> Result<NodeId> {
        self.expect_kind(spec.zone, ResourceKind::Zone)?;
        let AliasTarget::ServiceEndpoint(service) = spec.target;
        self.expect_kind(service, ResourceKind::Service)?;
        self.declare(name, ResourceSpec::DnsRecord(spec))
    }

    pub fn declare_output(&mut self, name: &str, spec: OutputSpec) -> Result<NodeId> {
        self.declare(name, ResourceSpec::Output(spec))
    }

    /// Attach a health check to an already-declared service's routing
    /// target. A mutation of the existing node, not a new declaration.
    pub fn configure_health_check(
        &mut self,
        service: NodeId,
        health_check: HealthCheckSpec,
    ) -> Result<()> {
        self.expect_kind(service, ResourceKind::Service)?;
        if let ResourceSpec::Service(spec) = &mut self.nodes[service.index()].spec {
            tracing::debug!("health check on {}: {}", service, health_check.path);
            spec.health_check = Some(health_check);
        }
        Ok(())
    }

    fn expect_kind(&self, id: NodeId, expected: ResourceKind) -> Result<()> {
        let node = self
            .node(id)
            .ok_or(StackError::UnknownDependency(id))?;
        let found = node.spec.kind();
        if found != expected {
            return Err(StackError::KindMismatch {
                name: node.name.clone(),
                expected,
                found,
            });
        }
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Option<&ResourceNode> {
        self.nodes.get(id.index())
    }

    /// Look up a node by kind and logical name
    pub fn get(&self, kind: ResourceKind, name: &str) -> Option<&ResourceNode> {
        self.nodes
            .iter()
            .find(|n| n.spec.kind() == kind && n.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn count(&self, kind: ResourceKind) -> usize {
        self.nodes.iter().filter(|n| n.spec.kind() == kind).count()
    }

    pub fn nodes_of(&self, kind: ResourceKind) -> Vec<&ResourceNode> {
        self.nodes
            .iter()
            .filter(|n| n.spec.kind() == kind)
            .collect()
    }

    /// Declared dependencies of a node
    pub fn dependencies(&self, id: NodeId) -> Vec<NodeId> {
        self.edges
            .iter()
            .filter(|(dependent, _)| *dependent == id)
            .map(|(_, dependency)| *dependency)
            .collect()
    }

    /// Stack outputs, in declaration order
    pub fn outputs(&self) -> Vec<(&str, &OutputSpec)> {
        self.nodes
            .iter()
            .filter_map(|n| match &n.spec {
                ResourceSpec::Output(output) => Some((n.name.as_str(), output)),
                _ => None,
            })
            .collect()
    }

    /// Topological order of all nodes (Kahn), dependencies first.
    ///
    /// Declare methods only accept existing dependencies, so a graph
    /// built through them cannot cycle; the check covers graphs
    /// assembled through [`declare`](Self::declare) with hand-built
    /// specs.
    pub fn ordered(&self) -> Result<Vec<&ResourceNode>> {
        let mut in_degree = vec![0usize; self.nodes.len()];
        for (dependent, _) in &self.edges {
            in_degree[dependent.index()] += 1;
        }

        let mut ready: Vec<usize> = (0..self.nodes.len())
            .filter(|&i| in_degree[i] == 0)
            .collect();
        let mut ordered = Vec::with_capacity(self.nodes.len());

        while let Some(index) = ready.first().copied() {
            ready.remove(0);
            ordered.push(&self.nodes[index]);
            for (dependent, dependency) in &self.edges {
                if dependency.index() == index {
                    in_degree[dependent.index()] -= 1;
                    if in_degree[dependent.index()] == 0 {
                        ready.push(dependent.index());
                    }
                }
            }
        }

        if ordered.len() != self.nodes.len() {
            let stuck: Vec<String> = self
                .nodes
                .iter()
                .filter(|n| in_degree[n.id.index()] > 0)
                .map(|n| n.key())
                .collect();
            return Err(StackError::CircularDependency(stuck.join(" -> ")));
        }
        Ok(ordered)
    }

    /// Serialize the whole graph as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
