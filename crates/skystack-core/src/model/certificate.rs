//! TLS certificate declaration

use crate::graph::NodeId;
use serde::{Deserialize, Serialize};

/// A TLS certificate for a domain, DNS-validated against a zone.
///
/// Issuance and validation are asynchronous and happen entirely on the
/// provider side; the stack only declares the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateSpec {
    /// Fully-qualified domain name the certificate covers
    pub domain_name: String,

    /// Zone used for DNS validation
    pub zone: NodeId,

    /// Provider region to issue the certificate in, if pinned
    pub region: Option<String>,
}

impl CertificateSpec {
    pub fn new(domain_name: impl Into<String>, zone: NodeId) -> Self {
        Self {
            domain_name: domain_name.into(),
            zone,
            region: None,
        }
    }
}
