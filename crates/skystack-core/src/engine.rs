//! Provisioning engine boundary
//!
//! Everything that touches a cloud provider lives behind this trait:
//! credential checks, diffing the declaration graph against live state,
//! applying changes and tearing the stack down. Skystack hands an
//! engine the graph and consumes its results; it never provisions.

use crate::error::Result;
use crate::graph::DeclarationGraph;
use crate::plan::{ApplyResult, Plan};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Provisioning engine abstraction
#[async_trait]
pub trait ProvisioningEngine: Send + Sync {
    /// Engine name (e.g. "cloudformation", "local")
    fn name(&self) -> &str;

    /// Check that the engine is configured and authenticated
    async fn check_auth(&self) -> Result<AuthStatus>;

    /// Diff the desired graph against live state
    async fn plan(&self, desired: &DeclarationGraph) -> Result<Plan>;

    /// Apply the planned actions
    async fn apply(&self, plan: &Plan) -> Result<ApplyResult>;

    /// Tear down every resource the engine manages for this stack
    async fn destroy_all(&self) -> Result<ApplyResult>;
}

/// Authentication status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthStatus {
    /// Whether authentication is valid
    pub authenticated: bool,

    /// Account/user information if available
    pub account_info: Option<String>,

    /// Error message if not authenticated
    pub error: Option<String>,
}

impl AuthStatus {
    pub fn ok(account_info: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            account_info: Some(account_info.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            authenticated: false,
            account_info: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::StackComposer;
    use crate::plan::ActionType;
    use skystack_config::StackConfig;

    /// Engine double: plans straight from the graph and "applies" by
    /// accepting every action.
    struct NullEngine;

    #[async_trait]
    impl ProvisioningEngine for NullEngine {
        fn name(&self) -> &str {
            "null"
        }

        async fn check_auth(&self) -> Result<AuthStatus> {
            Ok(AuthStatus::ok("test-account"))
        }

        async fn plan(&self, desired: &DeclarationGraph) -> Result<Plan> {
            Plan::from_graph(desired)
        }

        async fn apply(&self, plan: &Plan) -> Result<ApplyResult> {
            let mut result = ApplyResult::new();
            for action in &plan.actions {
                result.add_success(
                    format!("{}:{}", action.kind, action.name),
                    action.description.clone(),
                );
            }
            Ok(result)
        }

        async fn destroy_all(&self) -> Result<ApplyResult> {
            Ok(ApplyResult::new())
        }
    }

    fn graph() -> DeclarationGraph {
        let config = StackConfig::new("example.com", "acme/api").unwrap();
        StackComposer::new(config).compose().unwrap()
    }

    #[tokio::test]
    async fn test_engine_round_trip() {
        let engine = NullEngine;
        assert!(engine.check_auth().await.unwrap().authenticated);

        let graph = graph();
        let plan = engine.plan(&graph).await.unwrap();
        assert_eq!(plan.actions.len(), graph.len());
        assert!(plan.actions.iter().all(|a| a.action_type == ActionType::Create));

        let result = engine.apply(&plan).await.unwrap();
        assert!(result.is_success());
        assert_eq!(result.succeeded.len(), plan.actions.len());
    }

    #[test]
    fn test_auth_status_constructors() {
        let ok = AuthStatus::ok("acct");
        assert!(ok.authenticated);
        assert_eq!(ok.account_info.as_deref(), Some("acct"));

        let failed = AuthStatus::failed("no credentials");
        assert!(!failed.authenticated);
        assert_eq!(failed.error.as_deref(), Some("no credentials"));
    }
}
