//! Skystack Core
//!
//! This crate builds the declaration graph for a Skystack deployment:
//! a virtual network, a container cluster, a load-balanced container
//! service, a TLS certificate and a DNS alias record, wired together
//! and exposed under a subdomain.
//!
//! The crate never talks to a cloud provider. It produces a typed,
//! dependency-ordered graph of resource declarations; diffing and
//! applying that graph is the job of a provisioning engine behind the
//! [`ProvisioningEngine`] trait.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                  Skystack CLI                    │
//! │               (sky synth/outputs)                │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │                skystack-core                     │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │   StackComposer → DeclarationGraph        │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐  ┌──────────────────────┐    │
//! │  │ Plan synth   │  │ trait                │    │
//! │  │ (ordered)    │  │ ProvisioningEngine   │    │
//! │  └──────────────┘  └──────────┬───────────┘    │
//! └────────────────────────────────┼────────────────┘
//!                                  │
//!                    ┌─────────────▼─────────────┐
//!                    │   external provisioning   │
//!                    │   engine (diff / apply)   │
//!                    └───────────────────────────┘
//! ```

pub mod compose;
pub mod engine;
pub mod error;
pub mod graph;
pub mod model;
pub mod plan;

// Re-exports
pub use compose::{HEALTH_CHECK_PATH, SUBDOMAIN, StackComposer};
pub use engine::{AuthStatus, ProvisioningEngine};
pub use error::{Result, StackError};
pub use graph::{DeclarationGraph, NodeId, ResourceKind, ResourceNode, ResourceSpec};
pub use model::{
    AliasTarget, CertificateSpec, ClusterSpec, DnsRecordSpec, HealthCheckSpec, ImageRef,
    NetworkSpec, OutputSpec, ServiceSpec, ZoneRef,
};
pub use plan::{Action, ActionType, ApplyResult, Plan, PlanSummary};
