//! Virtual network declaration

use serde::{Deserialize, Serialize};

/// An isolated address space spread over multiple availability zones.
///
/// Immutable after declaration; the provider assigns the actual
/// identity and address ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Upper bound on availability zones to spread subnets over
    pub max_availability_zones: u32,
}

impl Default for NetworkSpec {
    fn default() -> Self {
        Self {
            max_availability_zones: 3,
        }
    }
}
