//! Stack composer
//!
//! Assembles the fixed Skystack topology from a [`StackConfig`]:
//! network, cluster, image and zone references, certificate, managed
//! service, DNS alias and the public URL output. Pure in-memory
//! construction; no lookups, no provisioning, no retries.

use crate::error::Result;
use crate::graph::DeclarationGraph;
use crate::model::{
    AliasTarget, CertificateSpec, ClusterSpec, DnsRecordSpec, HealthCheckSpec, ImageRef,
    NetworkSpec, OutputSpec, ServiceSpec, ZoneRef,
};
use skystack_config::StackConfig;

/// Subdomain label the service is exposed under
pub const SUBDOMAIN: &str = "api-example";

/// Path the load balancer probes on the service
pub const HEALTH_CHECK_PATH: &str = "/alive";

// Fixed sizing; making these configurable is a product decision that
// has not been taken.
const SERVICE_CPU_UNITS: u32 = 256;
const SERVICE_MEMORY_MIB: u32 = 1024;
const SERVICE_DESIRED_COUNT: u32 = 1;
const CONTAINER_PORT: u16 = 3000;
const IMAGE_TAG: &str = "latest";
const RECORD_TTL_SECONDS: u64 = 60;

/// Builds the declaration graph for one stack.
pub struct StackComposer {
    config: StackConfig,
}

impl StackComposer {
    pub fn new(config: StackConfig) -> Self {
        Self { config }
    }

    /// Fully-qualified domain the service is served on
    pub fn service_domain(&self) -> String {
        format!("{}.{}", SUBDOMAIN, self.config.domain_name)
    }

    /// Public HTTPS URL of the service
    pub fn service_url(&self) -> String {
        format!("https://{}", self.service_domain())
    }

    /// Compose the full stack in dependency order.
    pub fn compose(&self) -> Result<DeclarationGraph> {
        let api_domain = self.service_domain();
        tracing::debug!("composing stack for {}", api_domain);

        let mut graph = DeclarationGraph::new();

        let network = graph.declare_network("network", NetworkSpec::default())?;
        let cluster = graph.declare_cluster("cluster", ClusterSpec::new(network))?;
        let image = graph.declare_image(
            "image",
            ImageRef::new(self.config.image_repository.clone(), IMAGE_TAG),
        )?;
        let zone = graph.declare_zone("zone", ZoneRef::new(self.config.domain_name.clone()))?;

        let certificate =
            graph.declare_certificate("certificate", CertificateSpec::new(&api_domain, zone))?;

        let service = graph.declare_service(
            "api",
            ServiceSpec {
                cpu_units: SERVICE_CPU_UNITS,
                memory_mib: SERVICE_MEMORY_MIB,
                desired_count: SERVICE_DESIRED_COUNT,
                container_port: CONTAINER_PORT,
                public: true,
                ..ServiceSpec::new(cluster, image, certificate)
            },
        )?;
        graph.configure_health_check(service, HealthCheckSpec::path(HEALTH_CHECK_PATH))?;

        graph.declare_dns_record(
            "api-record",
            DnsRecordSpec {
                record_name: SUBDOMAIN.to_string(),
                zone,
                target: AliasTarget::ServiceEndpoint(service),
                ttl_seconds: RECORD_TTL_SECONDS,
            },
        )?;

        graph.declare_output(
            "api-url",
            OutputSpec::new(self.service_url()).with_description("URL of the API service"),
        )?;

        Ok(graph)
    }
}
