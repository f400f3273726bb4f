//! Resource declaration models
//!
//! Every entity a stack can declare, as plain data. Cross-resource
//! references are [`NodeId`](crate::graph::NodeId) handles into the
//! declaration graph, never provider identifiers.

mod certificate;
mod cluster;
mod dns;
mod image;
mod network;
mod output;
mod service;

// Re-exports
pub use certificate::*;
pub use cluster::*;
pub use dns::*;
pub use image::*;
pub use network::*;
pub use output::*;
pub use service::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeId;

    #[test]
    fn test_image_ref_display() {
        let image = ImageRef::new("acme/api", "latest");
        assert_eq!(image.to_string(), "acme/api:latest");
    }

    #[test]
    fn test_service_spec_defaults() {
        let service = ServiceSpec::new(NodeId::test(0), NodeId::test(1), NodeId::test(2));
        assert_eq!(service.desired_count, 1);
        assert!(service.public);
        assert!(service.health_check.is_none());
    }

    #[test]
    fn test_dns_record_serialization() {
        let record = DnsRecordSpec {
            record_name: "api-example".to_string(),
            zone: NodeId::test(3),
            target: AliasTarget::ServiceEndpoint(NodeId::test(4)),
            ttl_seconds: 60,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("api-example"));
        assert!(json.contains("service_endpoint"));

        let back: DnsRecordSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ttl_seconds, 60);
        assert_eq!(back.target, record.target);
    }
}
