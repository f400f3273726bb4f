//! Plan synthesis
//!
//! A [`Plan`] is the declaration graph flattened into dependency-ordered
//! actions. This crate only ever declares resources, so a synthesized
//! plan is all `Create`; diffing against live provider state happens
//! behind the [`ProvisioningEngine`](crate::engine::ProvisioningEngine)
//! boundary and may downgrade actions to `Update` or `NoOp` there.

use crate::error::Result;
use crate::graph::{DeclarationGraph, ResourceKind};
use serde::{Deserialize, Serialize};

/// A planned action on one resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    /// Type of action to perform
    pub action_type: ActionType,

    /// Kind of the resource acted on
    pub kind: ResourceKind,

    /// Logical name of the resource
    pub name: String,

    /// Human-readable description
    pub description: String,
}

/// Type of action to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Create a new resource
    Create,
    /// Update an existing resource
    Update,
    /// Delete a resource
    Delete,
    /// No changes needed
    NoOp,
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionType::Create => write!(f, "create"),
            ActionType::Update => write!(f, "update"),
            ActionType::Delete => write!(f, "delete"),
            ActionType::NoOp => write!(f, "no-op"),
        }
    }
}

/// Plan containing all actions to be applied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Actions in dependency order
    pub actions: Vec<Action>,

    /// Whether the plan has any changes
    pub has_changes: bool,
}

impl Plan {
    pub fn new(actions: Vec<Action>) -> Self {
        let has_changes = actions.iter().any(|a| a.action_type != ActionType::NoOp);
        Self {
            actions,
            has_changes,
        }
    }

    pub fn empty() -> Self {
        Self {
            actions: Vec::new(),
            has_changes: false,
        }
    }

    /// Synthesize a create-everything plan from a declaration graph,
    /// one action per node, dependencies first.
    pub fn from_graph(graph: &DeclarationGraph) -> Result<Self> {
        let ordered = graph.ordered()?;
        let actions = ordered
            .into_iter()
            .map(|node| Action {
                action_type: ActionType::Create,
                kind: node.spec.kind(),
                name: node.name.clone(),
                description: format!("create {}", node.key()),
            })
            .collect();
        Ok(Self::new(actions))
    }

    /// Get actions by type
    pub fn actions_by_type(&self, action_type: ActionType) -> Vec<&Action> {
        self.actions
            .iter()
            .filter(|a| a.action_type == action_type)
            .collect()
    }

    /// Summary of the plan
    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            create: self.actions_by_type(ActionType::Create).len(),
            update: self.actions_by_type(ActionType::Update).len(),
            delete: self.actions_by_type(ActionType::Delete).len(),
            no_change: self.actions_by_type(ActionType::NoOp).len(),
        }
    }
}

/// Summary of planned actions
#[derive(Debug, Clone)]
pub struct PlanSummary {
    pub create: usize,
    pub update: usize,
    pub delete: usize,
    pub no_change: usize,
}

impl std::fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} to create, {} to update, {} to delete, {} unchanged",
            self.create, self.update, self.delete, self.no_change
        )
    }
}

/// Result of applying a plan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplyResult {
    /// Successfully applied actions
    pub succeeded: Vec<ActionResult>,

    /// Failed actions
    pub failed: Vec<ActionResult>,
}

impl ApplyResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn add_success(&mut self, resource: impl Into<String>, message: impl Into<String>) {
        self.succeeded.push(ActionResult {
            resource: resource.into(),
            message: message.into(),
            error: None,
        });
    }

    pub fn add_failure(&mut self, resource: impl Into<String>, error: impl Into<String>) {
        self.failed.push(ActionResult {
            resource: resource.into(),
            message: String::new(),
            error: Some(error.into()),
        });
    }
}

/// Result of a single action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResult {
    /// Resource key the action applied to
    pub resource: String,

    /// Success message
    pub message: String,

    /// Error message if failed
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::StackComposer;
    use skystack_config::StackConfig;

    fn graph() -> DeclarationGraph {
        let config = StackConfig::new("example.com", "acme/api").unwrap();
        StackComposer::new(config).compose().unwrap()
    }

    #[test]
    fn test_plan_covers_every_node() {
        let graph = graph();
        let plan = Plan::from_graph(&graph).unwrap();
        assert_eq!(plan.actions.len(), graph.len());
        assert!(plan.has_changes);
        assert!(plan.actions.iter().all(|a| a.action_type == ActionType::Create));
    }

    #[test]
    fn test_plan_summary() {
        let plan = Plan::from_graph(&graph()).unwrap();
        let summary = plan.summary();
        assert_eq!(summary.create, 8);
        assert_eq!(summary.update, 0);
        assert_eq!(summary.delete, 0);
        assert_eq!(
            summary.to_string(),
            "8 to create, 0 to update, 0 to delete, 0 unchanged"
        );
    }

    #[test]
    fn test_empty_plan_has_no_changes() {
        let plan = Plan::empty();
        assert!(!plan.has_changes);
        assert!(plan.actions.is_empty());
    }

    #[test]
    fn test_apply_result_tracks_failures() {
        let mut result = ApplyResult::new();
        result.add_success("network:network", "created");
        result.add_failure("certificate:certificate", "validation timed out");
        assert!(!result.is_success());
        assert_eq!(result.succeeded.len(), 1);
        assert_eq!(
            result.failed[0].error.as_deref(),
            Some("validation timed out")
        );
    }

    #[test]
    fn test_plan_is_dependency_ordered() {
        let plan = Plan::from_graph(&graph()).unwrap();
        let position = |kind: ResourceKind| {
            plan.actions.iter().position(|a| a.kind == kind).unwrap()
        };
        assert!(position(ResourceKind::Network) < position(ResourceKind::Cluster));
        assert!(position(ResourceKind::Service) < position(ResourceKind::DnsRecord));
    }
}
