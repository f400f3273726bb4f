//! Stack output declaration

use serde::{Deserialize, Serialize};

/// A computed value surfaced to the operator after apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpec {
    /// The output value
    pub value: String,

    /// Human-readable description
    pub description: Option<String>,
}

impl OutputSpec {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
