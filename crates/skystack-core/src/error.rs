//! Declaration graph error types

use crate::graph::{NodeId, ResourceKind};
use thiserror::Error;

/// Errors raised while building a declaration graph
#[derive(Error, Debug)]
pub enum StackError {
    #[error("resource already declared: {0}")]
    DuplicateResource(String),

    #[error("dependency {0} is not declared in the graph")]
    UnknownDependency(NodeId),

    #[error("dependency \"{name}\" has kind {found}, expected {expected}")]
    KindMismatch {
        name: String,
        expected: ResourceKind,
        found: ResourceKind,
    },

    #[error("circular dependency detected: {0}")]
    CircularDependency(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StackError>;
